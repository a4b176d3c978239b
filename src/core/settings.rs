//! Preview settings
//!
//! Tunable parameters for the interpolation panel. These mirror the host
//! slider configuration plus the UPM the preview display normalizes to.

use serde::{Deserialize, Serialize};

/// Settings for the interpolation preview
///
/// Percent values are UI-facing; the engine works on the fraction
/// (`percent / 100`). The range deliberately extends past [0, 100] so the
/// slider can extrapolate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TweenSettings {
    /// Lowest slider value, in percent
    pub min_percent: f64,
    /// Highest slider value, in percent
    pub max_percent: f64,
    /// Initial slider value, in percent
    pub default_percent: f64,
    /// Stepper increment, in percent
    pub percent_increment: f64,
    /// UPM the preview is scaled to before display
    pub preview_upm: f64,
}

impl Default for TweenSettings {
    fn default() -> Self {
        Self {
            min_percent: -200.0,
            max_percent: 400.0,
            default_percent: 50.0,
            percent_increment: 10.0,
            preview_upm: 1000.0,
        }
    }
}

impl TweenSettings {
    /// Clamp a slider value to the configured range
    pub fn clamp_percent(&self, percent: f64) -> f64 {
        percent.clamp(self.min_percent, self.max_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_range_allows_extrapolation() {
        let settings = TweenSettings::default();
        assert!(settings.min_percent < 0.0, "Range should extend below 0%");
        assert!(settings.max_percent > 100.0, "Range should extend past 100%");
        assert_eq!(settings.default_percent, 50.0);
    }

    #[test]
    fn test_clamp_percent() {
        let settings = TweenSettings::default();
        assert_eq!(settings.clamp_percent(50.0), 50.0);
        assert_eq!(settings.clamp_percent(-500.0), -200.0);
        assert_eq!(settings.clamp_percent(1000.0), 400.0);
    }
}
