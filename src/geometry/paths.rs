//! UFO contour to kurbo path construction
//!
//! UFO contours are closed point lists where each on-curve point names the
//! segment type that reaches it, with off-curve control points buffered in
//! between. The first point's type describes the wrap-around segment from
//! the last point, so the closing segment is emitted from it at the end.

use crate::font_source::{ContourData, OutlineData, PointTypeData};
use kurbo::{BezPath, Point};

/// Convert every contour of an outline into a kurbo path
pub fn outline_to_bezpaths(outline: &OutlineData) -> Vec<BezPath> {
    outline.contours.iter().map(contour_to_bezpath).collect()
}

/// Convert one contour into a closed kurbo path
pub fn contour_to_bezpath(contour: &ContourData) -> BezPath {
    let mut path = BezPath::new();
    let mut pending_offcurves: Vec<Point> = Vec::new();

    let Some(first) = contour.points.first() else {
        return path;
    };
    path.move_to(first.position());

    for point in &contour.points[1..] {
        let pt = point.position();
        match point.typ {
            PointTypeData::Move => path.move_to(pt),
            PointTypeData::Line => path.line_to(pt),
            PointTypeData::OffCurve => pending_offcurves.push(pt),
            PointTypeData::Curve => flush_cubic(&mut path, &mut pending_offcurves, pt),
            PointTypeData::QCurve => flush_quadratic(&mut path, &mut pending_offcurves, pt),
        }
    }

    // Closing wrap-around segment, typed by the first point
    let first_pt = first.position();
    match first.typ {
        PointTypeData::Curve => flush_cubic(&mut path, &mut pending_offcurves, first_pt),
        PointTypeData::QCurve => flush_quadratic(&mut path, &mut pending_offcurves, first_pt),
        PointTypeData::Line | PointTypeData::OffCurve => path.line_to(first_pt),
        PointTypeData::Move => {}
    }

    path.close_path();
    path
}

/// Emit a cubic segment ending at `target` from the buffered off-curves
///
/// One buffered control point degrades to a quadratic, none to a line.
fn flush_cubic(path: &mut BezPath, pending: &mut Vec<Point>, target: Point) {
    match pending.len() {
        0 => path.line_to(target),
        1 => path.quad_to(pending[0], target),
        n => path.curve_to(pending[n - 2], pending[n - 1], target),
    }
    pending.clear();
}

/// Emit a quadratic run ending at `target` from the buffered off-curves
///
/// Consecutive off-curves imply on-curve midpoints between them
/// (TrueType-style contours).
fn flush_quadratic(path: &mut BezPath, pending: &mut Vec<Point>, target: Point) {
    if pending.is_empty() {
        path.line_to(target);
        return;
    }

    for i in 0..pending.len() {
        let control = pending[i];
        let end = if i == pending.len() - 1 {
            target
        } else {
            let next = pending[i + 1];
            Point::new((control.x + next.x) / 2.0, (control.y + next.y) / 2.0)
        };
        path.quad_to(control, end);
    }
    pending.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font_source::PointData;
    use kurbo::PathEl;

    fn line_contour(coords: &[(f64, f64)]) -> ContourData {
        ContourData {
            points: coords
                .iter()
                .map(|&(x, y)| PointData::new(x, y, PointTypeData::Line))
                .collect(),
        }
    }

    #[test]
    fn test_square_contour_becomes_closed_path() {
        let contour = line_contour(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]);
        let path = contour_to_bezpath(&contour);
        let elements = path.elements();

        // MoveTo, three LineTo, closing LineTo back to the start, ClosePath
        assert_eq!(elements.len(), 6);
        assert!(matches!(elements[0], PathEl::MoveTo(p) if p == Point::ZERO));
        assert!(matches!(elements[4], PathEl::LineTo(p) if p == Point::ZERO));
        assert!(matches!(elements[5], PathEl::ClosePath));
    }

    #[test]
    fn test_cubic_segment_from_offcurve_run() {
        let contour = ContourData {
            points: vec![
                PointData::new(0.0, 0.0, PointTypeData::Line),
                PointData::new(0.0, 55.0, PointTypeData::OffCurve),
                PointData::new(45.0, 100.0, PointTypeData::OffCurve),
                PointData::new(100.0, 100.0, PointTypeData::Curve),
            ],
        };
        let path = contour_to_bezpath(&contour);
        let elements = path.elements();

        assert!(matches!(elements[1], PathEl::CurveTo(c1, c2, p)
            if c1 == Point::new(0.0, 55.0)
                && c2 == Point::new(45.0, 100.0)
                && p == Point::new(100.0, 100.0)));
    }

    #[test]
    fn test_wraparound_curve_closes_through_first_point() {
        // First point is a curve target; the trailing off-curves feed the
        // closing segment.
        let contour = ContourData {
            points: vec![
                PointData::new(100.0, 0.0, PointTypeData::Curve),
                PointData::new(200.0, 0.0, PointTypeData::Line),
                PointData::new(200.0, 80.0, PointTypeData::OffCurve),
                PointData::new(120.0, 80.0, PointTypeData::OffCurve),
            ],
        };
        let path = contour_to_bezpath(&contour);
        let elements = path.elements();

        assert!(matches!(elements[2], PathEl::CurveTo(_, _, p)
            if p == Point::new(100.0, 0.0)));
    }

    #[test]
    fn test_quadratic_run_inserts_implied_oncurves() {
        let contour = ContourData {
            points: vec![
                PointData::new(0.0, 0.0, PointTypeData::Line),
                PointData::new(0.0, 100.0, PointTypeData::OffCurve),
                PointData::new(100.0, 100.0, PointTypeData::OffCurve),
                PointData::new(100.0, 0.0, PointTypeData::QCurve),
            ],
        };
        let path = contour_to_bezpath(&contour);
        let quads: Vec<_> = path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::QuadTo(..)))
            .collect();

        // Two off-curves imply a midpoint, so the run splits in two
        assert_eq!(quads.len(), 2);
        assert!(matches!(*quads[0], PathEl::QuadTo(_, p) if p == Point::new(50.0, 100.0)));
    }

    #[test]
    fn test_empty_contour_yields_empty_path() {
        let path = contour_to_bezpath(&ContourData { points: vec![] });
        assert!(path.elements().is_empty());
    }
}
