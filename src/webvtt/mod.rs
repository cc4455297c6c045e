/*!
 * WebVTT object model.
 *
 * - `cue`: a single timed caption with optional positioning settings
 * - `file`: the document holding the header, a comment block and the cues
 * - `settings`: keyword sets accepted by cue settings
 *
 * Chapters, regions and style blocks are not supported.
 */

pub mod cue;
pub mod file;
pub mod settings;

pub use cue::{WebVttCue, is_valid_cue_time};
pub use file::WebVttFile;
pub use settings::{LineAlign, PositionAlign, TextAlign, Vertical};

/// Native line terminator used for every emitted line
#[cfg(windows)]
pub const LINE_TERMINATOR: &str = "\r\n";
/// Native line terminator used for every emitted line
#[cfg(not(windows))]
pub const LINE_TERMINATOR: &str = "\n";

/// Blank-line block terminator
#[cfg(windows)]
pub const VTT_TERMINATION: &str = "\r\n\r\n";
/// Blank-line block terminator
#[cfg(not(windows))]
pub const VTT_TERMINATION: &str = "\n\n";

/// Magic first line of every WebVTT file
pub const VTT_FILE_HEADER: &str = "WEBVTT";

/// Prefix of a comment block
pub const VTT_COMMENT_PREFIX: &str = "NOTE";
