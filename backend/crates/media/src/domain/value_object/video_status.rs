//! Video Status Value Object
//!
//! Processing lifecycle of a submitted video. Kept deliberately small:
//! a video is uploaded, picked up by a processor, and ends up processed or
//! failed. Terminal states never transition out.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing status of a video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoStatus {
    /// Stored, waiting to be picked up
    #[default]
    Uploaded,

    /// A processor is working on it
    Processing,

    /// Processing finished; the processed file is available
    Processed,

    /// Processing failed
    Failed,
}

impl VideoStatus {
    /// String code for serialization/API
    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Uploaded => "uploaded",
            Self::Processing => "processing",
            Self::Processed => "processed",
            Self::Failed => "failed",
        }
    }

    /// Create from string code
    #[inline]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "uploaded" => Some(Self::Uploaded),
            "processing" => Some(Self::Processing),
            "processed" => Some(Self::Processed),
            "failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Check if this is a terminal state (cannot transition out)
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Processed | Self::Failed)
    }

    /// Check if the video is waiting for or undergoing processing
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Uploaded | Self::Processing)
    }
}

impl fmt::Display for VideoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for status in [
            VideoStatus::Uploaded,
            VideoStatus::Processing,
            VideoStatus::Processed,
            VideoStatus::Failed,
        ] {
            assert_eq!(VideoStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(VideoStatus::from_code("archived"), None);
    }

    #[test]
    fn test_default_is_uploaded() {
        assert_eq!(VideoStatus::default(), VideoStatus::Uploaded);
    }

    #[test]
    fn test_terminal_states() {
        assert!(VideoStatus::Processed.is_terminal());
        assert!(VideoStatus::Failed.is_terminal());
        assert!(!VideoStatus::Uploaded.is_terminal());
        assert!(VideoStatus::Uploaded.is_pending());
        assert!(!VideoStatus::Processed.is_pending());
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&VideoStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let back: VideoStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, VideoStatus::Processing);
    }
}
