//! Image MIME types accepted by the vision model.

use std::fmt;
use std::str::FromStr;

use crate::client::GeminiError;

/// Image formats the Gemini API accepts as inline image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeType {
    Png,
    Jpeg,
    Heic,
    Heif,
    Webp,
}

impl MimeType {
    /// Every supported image type, in the order they are reported to callers.
    pub const ALL: [MimeType; 5] = [
        MimeType::Png,
        MimeType::Jpeg,
        MimeType::Heic,
        MimeType::Heif,
        MimeType::Webp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Png => "image/png",
            MimeType::Jpeg => "image/jpeg",
            MimeType::Heic => "image/heic",
            MimeType::Heif => "image/heif",
            MimeType::Webp => "image/webp",
        }
    }

    /// Map a user-supplied string onto a supported image type.
    ///
    /// Unknown strings fail with [`GeminiError::InvalidMimeType`], whose
    /// message lists every supported type.
    pub fn validate(candidate: &str) -> Result<MimeType, GeminiError> {
        MimeType::ALL
            .into_iter()
            .find(|mime_type| mime_type.as_str() == candidate)
            .ok_or_else(|| GeminiError::InvalidMimeType(candidate.to_string()))
    }

    /// Comma-separated list of every supported type, for error messages.
    pub(crate) fn supported_types() -> String {
        MimeType::ALL
            .iter()
            .map(MimeType::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MimeType {
    type Err = GeminiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MimeType::validate(s)
    }
}
