/*!
 * Source format converters.
 *
 * A converter reads some caption source and produces a [`WebVttFile`].
 * [`WebVttConverter`] carries the factory methods every converter shares so
 * that a new source format only has to implement [`WebVttConverter::convert`].
 *
 * - `ttaf`: TTAF1 timed-text XML
 */

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::webvtt::{WebVttCue, WebVttFile};

pub mod ttaf;

pub use ttaf::TtafConverter;

/// Converts a caption source into a WebVTT document
pub trait WebVttConverter {
    /// Create the document the converted cues are collected into
    fn create_document(&self) -> WebVttFile {
        WebVttFile::new()
    }

    /// Create a cue, failing if either time is not `hh:mm:ss.ttt`
    fn create_cue(&self, start_time: &str, end_time: &str, text: &str) -> Result<WebVttCue> {
        WebVttCue::new(start_time, end_time, text)
    }

    /// Convert the whole source
    fn convert(&self) -> Result<WebVttFile>;
}

/// How cue ids are assigned when some source cues are skipped
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// Id is the cue's position in the source; skipped cues leave gaps
    #[default]
    Positional,
    /// Successfully converted cues are numbered 1..N
    Sequential,
}

impl IdPolicy {
    /// Id for a cue at source `position` (0-based) when `emitted` cues have
    /// already been kept
    pub fn id_for(&self, position: usize, emitted: usize) -> usize {
        match self {
            Self::Positional => position + 1,
            Self::Sequential => emitted + 1,
        }
    }
}

impl std::fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positional => write!(f, "positional"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

/// Counters collected during a conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionStats {
    /// Cues added to the document
    pub converted: usize,
    /// Source cues dropped because of a time or validation error
    pub skipped: usize,
}
