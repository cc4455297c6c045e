use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{Result, WebVttError};
use crate::webvtt::settings::{
    self, LineAlign, PositionAlign, TextAlign, Vertical,
};
use crate::webvtt::{LINE_TERMINATOR, VTT_TERMINATION};

// @module: A single WebVTT cue

// @const: Cue timestamp, `hh:mm:ss.ttt` with 2-4 hour digits, ASCII only
static VTT_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2,4}:[0-9]{2}:[0-9]{2}\.[0-9]{3}$").unwrap()
});

/// Check a timestamp against the strict cue time format
pub fn is_valid_cue_time(time: &str) -> bool {
    VTT_TIME_REGEX.is_match(time)
}

// @validates: Trimmed cue time
fn validated_time(time: &str) -> Result<String> {
    let time = time.trim();
    if is_valid_cue_time(time) {
        Ok(time.to_string())
    } else {
        Err(WebVttError::Validation(format!(
            "time must be given in the `hh:mm:ss.ttt` format, got `{}`",
            time
        )))
    }
}

/// Single caption entry of a WebVTT file
///
/// Start and end times are always valid against the cue time format; every
/// optional setting is checked before it is stored, and a failed setter
/// leaves the previous value untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebVttCue {
    // @field: Cue identifier
    id: String,

    // @field: Start time `hh:mm:ss.ttt`
    start_time: String,

    // @field: End time `hh:mm:ss.ttt`
    end_time: String,

    // @field: Payload, single line
    text: String,

    vertical: Option<Vertical>,
    line: String,
    position: String,
    size: String,
    align: Option<TextAlign>,
}

impl WebVttCue {
    /// Create a cue, validating both times
    pub fn new(start_time: &str, end_time: &str, text: &str) -> Result<Self> {
        let mut cue = Self {
            id: String::new(),
            start_time: validated_time(start_time)?,
            end_time: validated_time(end_time)?,
            text: String::new(),
            vertical: None,
            line: String::new(),
            position: String::new(),
            size: String::new(),
            align: None,
        };
        cue.set_text(text);
        Ok(cue)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Any string is accepted, surrounding whitespace is dropped
    pub fn set_id(&mut self, id: impl AsRef<str>) {
        self.id = id.as_ref().trim().to_string();
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn set_start_time(&mut self, start_time: &str) -> Result<()> {
        self.start_time = validated_time(start_time)?;
        Ok(())
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn set_end_time(&mut self, end_time: &str) -> Result<()> {
        self.end_time = validated_time(end_time)?;
        Ok(())
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the payload.
    ///
    /// The text is trimmed and tabs, carriage returns and line feeds are
    /// removed, so a blank line can never end up inside the cue block.
    /// Cue text tags (`<b>`, `<i>`, `<v Name>`, timestamp tags...) are kept
    /// as given.
    pub fn set_text(&mut self, text: &str) {
        self.text = text
            .trim()
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();
    }

    /// Vertical setting, empty when the cue is horizontal
    pub fn vertical(&self) -> &str {
        self.vertical.map(|v| v.as_str()).unwrap_or("")
    }

    /// Set the writing direction; an empty value leaves the setting unchanged
    pub fn set_vertical(&mut self, vertical: &str) -> Result<()> {
        if let Some(vertical) = settings::parse_optional::<Vertical>(vertical)? {
            self.vertical = Some(vertical);
        }
        Ok(())
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    /// Set the line position: a signed line number or a percentage, with an
    /// optional `start`/`center`/`end` alignment
    pub fn set_line(&mut self, line: &str, alignment: &str) -> Result<()> {
        let line = line.trim();
        if !settings::is_line_value(line) {
            return Err(WebVttError::Validation(format!(
                "line setting must be a positive or negative integer, or a percentage between 0 and 100 followed by a `%`, got `{}`",
                line
            )));
        }
        let alignment = settings::parse_optional::<LineAlign>(alignment)?;
        self.line = settings::join_setting(line, alignment);
        Ok(())
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    /// Set the horizontal position percentage with an optional
    /// `line-left`/`center`/`line-right` alignment
    pub fn set_position(&mut self, position: &str, alignment: &str) -> Result<()> {
        let position = position.trim();
        if !settings::is_percentage(position) {
            return Err(WebVttError::Validation(format!(
                "position setting must be a value between 0 and 100 followed by a `%`, got `{}`",
                position
            )));
        }
        let alignment = settings::parse_optional::<PositionAlign>(alignment)?;
        self.position = settings::join_setting(position, alignment);
        Ok(())
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn set_size(&mut self, size: &str) -> Result<()> {
        let size = size.trim();
        if !settings::is_percentage(size) {
            return Err(WebVttError::Validation(format!(
                "size setting must be a value between 0 and 100 followed by a `%`, got `{}`",
                size
            )));
        }
        self.size = size.to_string();
        Ok(())
    }

    pub fn align(&self) -> &str {
        self.align.map(|a| a.as_str()).unwrap_or("")
    }

    pub fn set_align(&mut self, align: &str) -> Result<()> {
        self.align = Some(align.parse()?);
        Ok(())
    }

    // @returns: ` name:value` for every non-empty setting, fixed order
    fn format_settings(&self) -> String {
        let entries = [
            ("vertical", self.vertical()),
            ("line", self.line()),
            ("position", self.position()),
            ("size", self.size()),
            ("align", self.align()),
        ];

        entries
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| format!(" {}:{}", name, value))
            .collect()
    }
}

impl fmt::Display for WebVttCue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.id, LINE_TERMINATOR)?;
        write!(
            f,
            "{} --> {}{}{}",
            self.start_time,
            self.end_time,
            self.format_settings(),
            LINE_TERMINATOR
        )?;
        write!(f, "{}{}", self.text, VTT_TERMINATION)
    }
}
