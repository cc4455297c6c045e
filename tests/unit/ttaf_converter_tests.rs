/*!
 * Tests for the TTAF1 to WebVTT converter
 */

use ttaf2vtt::converters::{ConversionStats, IdPolicy, TtafConverter, WebVttConverter};
use ttaf2vtt::errors::WebVttError;
use ttaf2vtt::file_utils::MemoryFileSystem;
use crate::common;

fn ids(vtt: &ttaf2vtt::WebVttFile) -> Vec<String> {
    vtt.cues().iter().map(|c| c.id().to_string()).collect()
}

#[test]
fn test_convert_withValidSource_shouldBuildAllCues() {
    common::init_logger();
    let converter = TtafConverter::from_xml("valid.xml", common::VALID_TTAF);

    let vtt = converter.convert().unwrap();

    assert_eq!(ids(&vtt), vec!["1", "2", "3"]);
    let cues = vtt.cues();
    assert_eq!(cues[0].start_time(), "00:00:01.000");
    assert_eq!(cues[0].end_time(), "00:00:04.000");
    assert_eq!(cues[0].text(), "Hello");
    assert_eq!(cues[1].start_time(), "00:00:05.000");
    assert_eq!(cues[1].end_time(), "00:00:07.250");
    assert_eq!(cues[2].start_time(), "01:00:10.500");
    assert_eq!(cues[2].end_time(), "01:00:12.000");
    assert_eq!(cues[2].text(), "Third cue");
}

#[test]
fn test_convert_withBadCue_shouldSkipAndKeepPositionalIds() {
    common::init_logger();
    let converter = TtafConverter::from_xml("bad.xml", common::TTAF_WITH_BAD_CUE);

    let (vtt, stats) = converter.convert_with_stats().unwrap();

    assert_eq!(stats, ConversionStats { converted: 2, skipped: 1 });
    assert_eq!(ids(&vtt), vec!["1", "3"]);
    assert_eq!(vtt.cues()[1].text(), "Third line");
    assert_eq!(vtt.cues()[1].start_time(), "00:00:09.500");
    assert_eq!(vtt.cues()[1].end_time(), "00:00:12.000");
}

#[test]
fn test_convert_withBadCueAndSequentialPolicy_shouldRenumber() {
    let converter = TtafConverter::from_xml("bad.xml", common::TTAF_WITH_BAD_CUE)
        .with_id_policy(IdPolicy::Sequential);

    let vtt = converter.convert().unwrap();

    assert_eq!(ids(&vtt), vec!["1", "2"]);
}

#[test]
fn test_convert_withTimeFailingCueValidation_shouldSkipCue() {
    let xml = r#"<tt><body><div>
        <p begin="aa:bb" end="00:02">Invalid after normalization</p>
        <p begin="00:02" end="00:03">Kept</p>
    </div></body></tt>"#;

    let (vtt, stats) = TtafConverter::from_xml("inline", xml).convert_with_stats().unwrap();

    assert_eq!(stats.skipped, 1);
    assert_eq!(ids(&vtt), vec!["2"]);
}

#[test]
fn test_convert_withNonAsciiDigitTimes_shouldSkipCue() {
    let xml = r#"<tt><body><div>
        <p begin="١:٢" end="00:03">Arabic-Indic digits</p>
        <p begin="00:03" end="00:04">Kept</p>
    </div></body></tt>"#;

    let (vtt, stats) = TtafConverter::from_xml("inline", xml).convert_with_stats().unwrap();

    assert_eq!(stats.skipped, 1);
    assert_eq!(ids(&vtt), vec!["2"]);
    assert_eq!(vtt.cues()[0].text(), "Kept");
}

#[test]
fn test_convert_withMissingAttributes_shouldSkipCue() {
    let xml = r#"<tt><body><div>
        <p end="00:02">No begin</p>
        <p begin="00:02">No end</p>
    </div></body></tt>"#;

    let (vtt, stats) = TtafConverter::from_xml("inline", xml).convert_with_stats().unwrap();

    assert!(vtt.is_empty());
    assert_eq!(stats, ConversionStats { converted: 0, skipped: 2 });
}

#[test]
fn test_convert_withMultilineText_shouldFlattenText() {
    let xml = "<tt><body><div><p begin=\"00:01\" end=\"00:02\">\n    Hello\n    world\n  </p></div></body></tt>";

    let vtt = TtafConverter::from_xml("inline", xml).convert().unwrap();

    assert_eq!(vtt.cues()[0].text(), "Hello    world");
}

#[test]
fn test_convert_withChildElements_shouldUseDirectTextOnly() {
    let xml = r#"<tt><body><div><p begin="00:01" end="00:02">Hi <span>there</span>you</p></div></body></tt>"#;

    let vtt = TtafConverter::from_xml("inline", xml).convert().unwrap();

    assert_eq!(vtt.cues()[0].text(), "Hi you");
}

#[test]
fn test_convert_withOtherNamespace_shouldMatchLocalNames() {
    let xml = r#"<tt:tt xmlns:tt="http://www.w3.org/ns/ttml"><tt:body><tt:div>
        <tt:p begin="00:00:01.000" end="00:00:02.000">Prefixed</tt:p>
    </tt:div></tt:body></tt:tt>"#;

    let vtt = TtafConverter::from_xml("inline", xml).convert().unwrap();

    assert_eq!(vtt.len(), 1);
    assert_eq!(vtt.cues()[0].text(), "Prefixed");
}

#[test]
fn test_convert_withOnlyFirstDiv_shouldIgnoreLaterDivs() {
    let xml = r#"<tt><body>
        <div><p begin="00:01" end="00:02">First div</p></div>
        <div><p begin="00:03" end="00:04">Second div</p></div>
    </body></tt>"#;

    let vtt = TtafConverter::from_xml("inline", xml).convert().unwrap();

    assert_eq!(vtt.len(), 1);
    assert_eq!(vtt.cues()[0].text(), "First div");
}

#[test]
fn test_convert_withMalformedXml_shouldFailWithXmlError() {
    let result = TtafConverter::from_xml("broken.xml", common::MALFORMED_TTAF).convert();
    assert!(matches!(result, Err(WebVttError::Xml(_))));
}

#[test]
fn test_convert_withoutDiv_shouldFailWithXmlError() {
    let result = TtafConverter::from_xml("nodiv.xml", "<tt><body/></tt>").convert();
    match result {
        Err(WebVttError::Xml(message)) => assert!(message.contains("nodiv.xml")),
        other => panic!("expected XML error, got {:?}", other),
    }
}

#[test]
fn test_fromFile_withUnreadableSource_shouldFailIo() {
    let fs = MemoryFileSystem::new();
    fs.add_file("in/locked.xml", common::VALID_TTAF);
    fs.set_unreadable("in/locked.xml");

    let result = TtafConverter::from_file("in/locked.xml", &fs);

    assert!(matches!(result, Err(WebVttError::Io { .. })));
}

#[test]
fn test_fromFile_withDirectoryPath_shouldFailIo() {
    let fs = MemoryFileSystem::new();
    fs.add_file("in/captions.xml/inner.xml", common::VALID_TTAF);

    let result = TtafConverter::from_file("in/captions.xml", &fs);

    match result {
        Err(WebVttError::Io { message, .. }) => assert!(message.contains("not a file")),
        other => panic!("expected I/O error, got {:?}", other),
    }
}

#[test]
fn test_fromFile_withReadableSource_shouldUsePathAsSourceName() {
    let fs = MemoryFileSystem::new();
    fs.add_file("in/valid.xml", common::VALID_TTAF);

    let converter = TtafConverter::from_file("in/valid.xml", &fs).unwrap();

    assert_eq!(converter.source_name(), "in/valid.xml");
    assert_eq!(converter.convert().unwrap().len(), 3);
}

#[test]
fn test_createCue_defaultFactory_shouldValidateTimes() {
    let converter = TtafConverter::from_xml("inline", "<tt/>");
    assert!(converter.create_cue("00:00:01.000", "00:00:02.000", "ok").is_ok());
    assert!(matches!(
        converter.create_cue("1:00", "00:00:02.000", "bad"),
        Err(WebVttError::Validation(_))
    ));
    assert!(converter.create_document().is_empty());
}
