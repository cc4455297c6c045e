/*!
 * TTAF1 timed-text XML to WebVTT.
 *
 * Expected source layout:
 *
 * ```xml
 * <tt xmlns="http://www.w3.org/2006/10/ttaf1">
 *   <body>
 *     <div>
 *       <p begin="00:00:01.000" end="00:00:04.000">Cue text</p>
 *     </div>
 *   </body>
 * </tt>
 * ```
 *
 * Elements are matched on their local name so any namespace is accepted.
 */

use std::path::Path;

use log::{debug, warn};
use roxmltree::{Document, Node, ParsingOptions};

use crate::converters::{ConversionStats, IdPolicy, WebVttConverter};
use crate::errors::{Result, WebVttError};
use crate::file_utils::FileSystem;
use crate::time_format::normalize_cue_time;
use crate::webvtt::{WebVttCue, WebVttFile};

/// Converter for one TTAF1 source document
#[derive(Debug, Clone)]
pub struct TtafConverter {
    // @field: Path or caller supplied name, used in log messages
    source_name: String,

    // @field: Raw XML
    xml: String,

    id_policy: IdPolicy,
}

impl TtafConverter {
    /// Read a TTAF file through `fs`
    pub fn from_file<P: AsRef<Path>>(path: P, fs: &dyn FileSystem) -> Result<Self> {
        let path = path.as_ref();
        if !fs.is_file(path) {
            return Err(WebVttError::io(path, "XML source is not a file"));
        }
        if !fs.is_readable(path) {
            return Err(WebVttError::io(path, "XML file is not readable"));
        }
        let xml = fs.read_to_string(path)?;
        Ok(Self::from_xml(path.display().to_string(), xml))
    }

    /// Convert an in-memory XML document identified by `source_name`
    pub fn from_xml(source_name: impl Into<String>, xml: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            xml: xml.into(),
            id_policy: IdPolicy::default(),
        }
    }

    pub fn with_id_policy(mut self, id_policy: IdPolicy) -> Self {
        self.id_policy = id_policy;
        self
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Convert and report how many cues were kept and skipped.
    ///
    /// A cue whose times cannot be normalized or validated is logged and
    /// skipped; malformed XML or a missing `body/div` fails the whole
    /// conversion.
    pub fn convert_with_stats(&self) -> Result<(WebVttFile, ConversionStats)> {
        let mut vtt_file = self.create_document();

        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(&self.xml, options)?;

        let body = first_child_named(document.root_element(), "body")
            .ok_or_else(|| WebVttError::Xml(format!("{}: missing <body> element", self.source_name)))?;
        let div = first_child_named(body, "div")
            .ok_or_else(|| WebVttError::Xml(format!("{}: missing <div> element", self.source_name)))?;

        let mut stats = ConversionStats::default();
        let mut cues = Vec::new();

        let paragraphs = div
            .children()
            .filter(|node| node.is_element() && node.tag_name().name() == "p");

        for (position, paragraph) in paragraphs.enumerate() {
            match self.build_cue(paragraph) {
                Ok(mut cue) => {
                    cue.set_id(self.id_policy.id_for(position, cues.len()).to_string());
                    cues.push(cue);
                }
                Err(e) if e.is_cue_level() => {
                    warn!("File: {} - cue {}: {}", self.source_name, position + 1, e);
                    stats.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        stats.converted = cues.len();
        vtt_file.set_cues(cues);

        debug!(
            "Converted {}: {} cues, {} skipped",
            self.source_name, stats.converted, stats.skipped
        );
        Ok((vtt_file, stats))
    }

    fn build_cue(&self, paragraph: Node) -> Result<WebVttCue> {
        let begin = normalize_cue_time(paragraph.attribute("begin").unwrap_or(""))?;
        let end = normalize_cue_time(paragraph.attribute("end").unwrap_or(""))?;
        self.create_cue(&begin, &end, &direct_text(paragraph))
    }
}

impl WebVttConverter for TtafConverter {
    fn convert(&self) -> Result<WebVttFile> {
        self.convert_with_stats().map(|(vtt_file, _)| vtt_file)
    }
}

fn first_child_named<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

// Only the element's own text nodes; markup children contribute nothing
fn direct_text(node: Node) -> String {
    node.children()
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}
