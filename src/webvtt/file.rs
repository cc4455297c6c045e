use std::fmt;
use std::path::Path;

use log::debug;

use crate::errors::{Result, WebVttError};
use crate::file_utils::FileSystem;
use crate::webvtt::cue::WebVttCue;
use crate::webvtt::{VTT_COMMENT_PREFIX, VTT_FILE_HEADER, VTT_TERMINATION};

// @module: WebVTT document

/// A WebVTT file: optional header text, optional comment block and an
/// ordered list of cues
///
/// Cues are emitted in insertion order. Chapters and regions are not
/// supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebVttFile {
    // @field: Text following `WEBVTT - ` on the first line
    header_text: String,

    // @field: Emitted as a `NOTE` block after the header
    comment: String,

    // @field: Cues in output order
    cues: Vec<WebVttCue>,
}

impl WebVttFile {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a document from an existing `.vtt` file.
    ///
    /// Reading WebVTT is not supported: after checking the extension and
    /// that the file is readable this always fails with
    /// [`WebVttError::Unsupported`].
    pub fn from_file<P: AsRef<Path>>(path: P, fs: &dyn FileSystem) -> Result<Self> {
        let path = path.as_ref();

        let is_vtt = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == "vtt");
        if !is_vtt {
            return Err(WebVttError::Validation(format!(
                "file must be a vtt file: {}",
                path.display()
            )));
        }

        if !fs.is_readable(path) {
            return Err(WebVttError::io(path, "file is not readable"));
        }

        Err(WebVttError::Unsupported(format!(
            "loading existing WebVTT files is not implemented: {}",
            path.display()
        )))
    }

    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    pub fn set_header_text(&mut self, header_text: impl Into<String>) {
        self.header_text = header_text.into();
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn cues(&self) -> &[WebVttCue] {
        &self.cues
    }

    /// Append cues, keeping their relative order.
    ///
    /// Repeated calls accumulate; existing cues are never replaced.
    pub fn set_cues<I>(&mut self, cues: I)
    where
        I: IntoIterator<Item = WebVttCue>,
    {
        self.cues.extend(cues);
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    /// Write the serialized document to `path`.
    ///
    /// A missing parent directory is created (one level only). Fails with
    /// [`WebVttError::Io`] when the directory is not writable, in which case
    /// nothing is written. An existing file is overwritten.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P, fs: &dyn FileSystem) -> Result<()> {
        let path = path.as_ref();
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        if !fs.is_dir(dir) {
            debug!("Creating output directory {}", dir.display());
            fs.create_dir(dir)?;
        }

        if !fs.is_writable_dir(dir) {
            return Err(WebVttError::io(dir, "path is not writable"));
        }

        fs.write(path, &self.to_string())?;
        debug!("Wrote {} cues to {}", self.cues.len(), path.display());
        Ok(())
    }

    fn format_header(&self) -> String {
        if self.header_text.is_empty() {
            format!("{}{}", VTT_FILE_HEADER, VTT_TERMINATION)
        } else {
            format!("{} - {}{}", VTT_FILE_HEADER, self.header_text, VTT_TERMINATION)
        }
    }

    fn format_comment(&self) -> String {
        if self.comment.is_empty() {
            String::new()
        } else {
            format!("{} {}{}", VTT_COMMENT_PREFIX, self.comment, VTT_TERMINATION)
        }
    }
}

impl fmt::Display for WebVttFile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.format_header())?;
        f.write_str(&self.format_comment())?;
        for cue in &self.cues {
            write!(f, "{}", cue)?;
        }
        Ok(())
    }
}
