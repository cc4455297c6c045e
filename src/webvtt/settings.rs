/*!
 * Cue setting keywords and value checks.
 *
 * Each keyword set is a small enum with a `FromStr` implementation so that a
 * value outside the allowed set can never be stored on a cue.
 */

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::WebVttError;

// @const: Signed integer line number, ASCII digits only
static LINE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?[0-9]+$").unwrap()
});

/// Writing direction for vertical text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    /// Right to left
    Rl,
    /// Left to right
    Lr,
}

impl Vertical {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rl => "rl",
            Self::Lr => "lr",
        }
    }
}

impl FromStr for Vertical {
    type Err = WebVttError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "rl" => Ok(Self::Rl),
            "lr" => Ok(Self::Lr),
            _ => Err(WebVttError::Validation(
                "vertical setting must be `rl` or `lr`".to_string(),
            )),
        }
    }
}

/// Alignment keyword that may follow a `line` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAlign {
    Start,
    Center,
    End,
}

impl LineAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

impl FromStr for LineAlign {
    type Err = WebVttError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            _ => Err(WebVttError::Validation(
                "line alignment setting must be `start`, `center`, or `end`".to_string(),
            )),
        }
    }
}

/// Alignment keyword that may follow a `position` value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionAlign {
    LineLeft,
    Center,
    LineRight,
}

impl PositionAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LineLeft => "line-left",
            Self::Center => "center",
            Self::LineRight => "line-right",
        }
    }
}

impl FromStr for PositionAlign {
    type Err = WebVttError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "line-left" => Ok(Self::LineLeft),
            "center" => Ok(Self::Center),
            "line-right" => Ok(Self::LineRight),
            _ => Err(WebVttError::Validation(
                "position alignment setting must be `line-left`, `center`, or `line-right`"
                    .to_string(),
            )),
        }
    }
}

/// Text alignment within the cue box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
    Left,
    Right,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl FromStr for TextAlign {
    type Err = WebVttError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "start" => Ok(Self::Start),
            "center" => Ok(Self::Center),
            "end" => Ok(Self::End),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(WebVttError::Validation(
                "align setting must be `start`, `center`, `end`, `left`, or `right`".to_string(),
            )),
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_as_str!(Vertical, LineAlign, PositionAlign, TextAlign);

/// Parse an optional trailing alignment keyword; empty means "none"
pub(crate) fn parse_optional<T: FromStr<Err = WebVttError>>(value: &str) -> Result<Option<T>, WebVttError> {
    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// A line value is a signed line number or a percentage
pub(crate) fn is_line_value(value: &str) -> bool {
    LINE_NUMBER_REGEX.is_match(value) || is_percentage(value)
}

/// Percentages are only checked for the presence of `%`
pub(crate) fn is_percentage(value: &str) -> bool {
    value.contains('%')
}

/// Join a setting value and its optional alignment as `value,alignment`
pub(crate) fn join_setting<T: fmt::Display>(value: &str, alignment: Option<T>) -> String {
    match alignment {
        Some(alignment) => format!("{},{}", value, alignment),
        None => value.to_string(),
    }
}
