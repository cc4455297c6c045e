/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;

use ttaf2vtt::errors::WebVttError;

#[test]
fn test_webVttError_validation_shouldDisplayCorrectly() {
    let error = WebVttError::Validation("bad time".to_string());
    let display = format!("{}", error);
    assert!(display.contains("Validation error"));
    assert!(display.contains("bad time"));
    assert!(error.is_cue_level());
}

#[test]
fn test_webVttError_format_shouldBeCueLevel() {
    let error = WebVttError::Format("must at least be mm:ss".to_string());
    assert!(format!("{}", error).contains("mm:ss"));
    assert!(error.is_cue_level());
}

#[test]
fn test_webVttError_xmlAndIo_shouldNotBeCueLevel() {
    assert!(!WebVttError::Xml("unexpected end".to_string()).is_cue_level());
    assert!(!WebVttError::io("out", "not writable").is_cue_level());
    assert!(!WebVttError::Unsupported("load".to_string()).is_cue_level());
}

#[test]
fn test_webVttError_io_shouldIncludePathAndMessage() {
    let error = WebVttError::io("out/dir", "path is not writable");
    match &error {
        WebVttError::Io { path, message } => {
            assert_eq!(path, &PathBuf::from("out/dir"));
            assert_eq!(message, "path is not writable");
        }
        other => panic!("unexpected variant {:?}", other),
    }
    let display = format!("{}", error);
    assert!(display.contains("out/dir"));
    assert!(display.contains("path is not writable"));
}

#[test]
fn test_webVttError_fromIoError_shouldWrapAsIo() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
    let error: WebVttError = io_error.into();
    assert!(matches!(error, WebVttError::Io { .. }));
    assert!(format!("{}", error).contains("File not found"));
}

#[test]
fn test_webVttError_intoAnyhow_shouldKeepMessage() {
    let error: anyhow::Error = WebVttError::Unsupported("loading vtt".to_string()).into();
    assert!(format!("{}", error).contains("loading vtt"));
}
