use crate::error::{ResizerError, Result};

/// Raw contents of the width and height text fields.
///
/// Nothing is validated while the user types; [`DimensionInput::parse`] is
/// called at the moment a resize is requested.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DimensionInput {
    pub width: String,
    pub height: String,
}

/// Validated target size in pixels. Both sides are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl DimensionInput {
    pub fn new(width: impl Into<String>, height: impl Into<String>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Parse both fields as positive integers.
    pub fn parse(&self) -> Result<TargetSize> {
        match (parse_side(&self.width), parse_side(&self.height)) {
            (Some(width), Some(height)) => Ok(TargetSize { width, height }),
            _ => Err(ResizerError::InvalidDimensions),
        }
    }
}

fn parse_side(text: &str) -> Option<u32> {
    text.trim().parse::<u32>().ok().filter(|&v| v > 0)
}

impl std::fmt::Display for TargetSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
