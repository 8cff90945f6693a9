/// Convenience result type used across eye-icon.
pub type IconResult<T> = Result<T, IconError>;

/// Top-level error taxonomy used by the renderer and the driver.
#[derive(thiserror::Error, Debug)]
pub enum IconError {
    /// Invalid caller-provided data, such as an icon size outside the supported range.
    #[error("validation error: {0}")]
    Validation(String),

    /// The imaging capability (PNG encoding) is not available in this build.
    #[error("missing capability: {0}")]
    MissingCapability(#[from] MissingCapability),

    /// Errors raised by a raster backend.
    #[error("raster error: {0}")]
    Raster(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IconError {
    /// Build a [`IconError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`IconError::Raster`] value.
    pub fn raster(msg: impl Into<String>) -> Self {
        Self::Raster(msg.into())
    }

    /// The missing capability, if this error is one.
    pub fn as_missing_capability(&self) -> Option<&MissingCapability> {
        match self {
            Self::MissingCapability(m) => Some(m),
            _ => None,
        }
    }
}

/// The imaging dependency needed to build canvases or encode PNG is absent.
///
/// Its two [`remediation_lines`](Self::remediation_lines) are what the driver prints instead of
/// the success summary.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("{capability} is required. Rebuild with: {install_hint}")]
pub struct MissingCapability {
    /// Human-readable name of the missing capability.
    pub capability: &'static str,
    /// How to obtain it.
    pub install_hint: &'static str,
}

impl MissingCapability {
    /// PNG encoding is not compiled into the `image` crate.
    pub fn png() -> Self {
        Self {
            capability: "PNG support (the `png` feature of eye-icon)",
            install_hint: "cargo build --features png",
        }
    }

    /// The two-line message shown to the user.
    pub fn remediation_lines(&self) -> [String; 2] {
        [
            self.to_string(),
            "Alternatively, you can create simple icon PNG files manually.".to_string(),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
