/*!
 * # ttaf2vtt - TTAF1 timed text to WebVTT
 *
 * A Rust library for building WebVTT caption files and converting legacy
 * TTAF1 XML subtitles into them.
 *
 * ## Features
 *
 * - WebVTT object model with validated cue timing and cue settings
 *   (vertical, line, position, size, align)
 * - Byte-exact WebVTT serialization (header, `NOTE` comment, cues)
 * - Normalization of loose `mm:ss` / `hh:mm:ss[.,]fff` timestamps
 * - TTAF1 (`body/div/p`) conversion with per-cue error isolation
 * - A converter trait for other source formats
 * - Directory conversion with bounded parallelism
 *
 * ## Architecture
 *
 * - `webvtt`: cue, file and cue setting types
 * - `time_format`: timestamp normalization
 * - `converters`: the `WebVttConverter` trait and the TTAF converter
 * - `file_utils`: file system capability (local and in-memory) and
 *   directory helpers
 * - `app_config`: configuration management
 * - `app_controller`: single-file and directory conversion
 * - `errors`: error types for the library
 *
 * Chapters, regions, style blocks and reading existing WebVTT files are not
 * supported.
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod converters;
pub mod errors;
pub mod file_utils;
pub mod time_format;
pub mod webvtt;

// Re-export main types for easier usage
pub use app_config::Config;
pub use converters::{ConversionStats, IdPolicy, TtafConverter, WebVttConverter};
pub use errors::WebVttError;
pub use file_utils::{FileSystem, LocalFileSystem, MemoryFileSystem};
pub use time_format::normalize_cue_time;
pub use webvtt::{WebVttCue, WebVttFile};
