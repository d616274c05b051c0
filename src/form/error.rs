use std::fmt;

/// Raised when a metadata form is requested for a shape that carries no
/// metadata descriptors. The form panel is left untouched in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingMetadataError {
    pub shape: String,
}

impl MissingMetadataError {
    pub fn new(shape: impl Into<String>) -> Self {
        Self {
            shape: shape.into(),
        }
    }
}

impl fmt::Display for MissingMetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no metadata defined for shape '{}'", self.shape)
    }
}

impl std::error::Error for MissingMetadataError {}
