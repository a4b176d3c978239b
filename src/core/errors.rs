//! Error handling helpers
//!
//! Anyhow-based result alias plus the small amount of shared context
//! plumbing the rest of the crate uses. Nothing in the preview pipeline is
//! fatal; errors surface as user-visible status text at the controller.

use anyhow::{bail, Context};
use std::path::Path;

/// Crate-wide result type
pub type TweenResult<T> = anyhow::Result<T>;

/// Extension trait for attaching file-operation context to errors
pub trait TweenContext<T> {
    /// Add "Failed to <action> font file <path>" context to an error
    fn with_file_context(self, action: &str, path: &Path) -> TweenResult<T>;
}

impl<T> TweenContext<T> for TweenResult<T> {
    fn with_file_context(self, action: &str, path: &Path) -> TweenResult<T> {
        self.with_context(|| format!("Failed to {} font file: {}", action, path.display()))
    }
}

/// Check that a path plausibly points at a UFO package before handing it
/// to norad, so the user gets a clear message instead of a parse error.
pub fn validate_ufo_path(path: &Path) -> TweenResult<()> {
    if !path.exists() {
        bail!("Font path does not exist: {}", path.display());
    }
    let is_ufo = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("ufo"))
        .unwrap_or(false);
    if !is_ufo {
        bail!("Not a UFO package: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rejects_missing_path() {
        let result = validate_ufo_path(Path::new("/nonexistent/font.ufo"));
        assert!(result.is_err(), "Missing path should fail validation");
    }

    #[test]
    fn test_validate_rejects_wrong_extension() {
        // Use a path that exists but is not a UFO package
        let result = validate_ufo_path(Path::new("/tmp"));
        assert!(result.is_err(), "Non-UFO path should fail validation");
    }
}
