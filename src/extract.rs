//! Reading publication sources into plain text.
//!
//! Markdown and plain text are the usual inputs. PDF, DOCX and ODT are accepted
//! as well so that a publication can be analyzed straight from the file the
//! publisher returned.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{debug, warn};
use quick_xml::Reader;
use quick_xml::events::Event;
use regex::Regex;
use zip::ZipArchive;

use crate::error::{Error, Result};

static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"```[\s\S]*?```").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]+`").unwrap());
static IMAGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());
static STAR_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*{1,2}([^*]+)\*{1,2}").unwrap());
static UNDERSCORE_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_{1,2}([^_]+)_{1,2}").unwrap());

const DOCX_BREAKS: &[&[u8]] = &[b"br"];
const DOCX_BLOCKS: &[&[u8]] = &[b"p"];
const ODT_BREAKS: &[&[u8]] = &[b"line-break", b"br"];
const ODT_BLOCKS: &[&[u8]] = &[b"p", b"h"];

/// Kind of source document, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Markdown,
    PlainText,
    Pdf,
    Docx,
    Odt,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "md" | "markdown" => Some(SourceFormat::Markdown),
            "txt" => Some(SourceFormat::PlainText),
            "pdf" => Some(SourceFormat::Pdf),
            "docx" => Some(SourceFormat::Docx),
            "odt" => Some(SourceFormat::Odt),
            _ => None,
        }
    }
}

/// Read `path` and return its text, with markdown formatting stripped for `.md` files.
pub fn extract_text(path: &Path) -> Result<String> {
    let format =
        SourceFormat::from_path(path).ok_or_else(|| Error::UnsupportedFormat(path.to_path_buf()))?;
    debug!("Reading {} as {:?}", path.display(), format);

    match format {
        SourceFormat::Markdown => {
            let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
            Ok(strip_markdown(&raw))
        }
        SourceFormat::PlainText => fs::read_to_string(path).map_err(|e| Error::io(path, e)),
        SourceFormat::Pdf => pdf_extract::extract_text(path).map_err(|e| Error::Pdf {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
        SourceFormat::Docx => {
            let xml = read_zip_entry(path, "word/document.xml")?;
            xml_to_text(&xml, DOCX_BREAKS, DOCX_BLOCKS)
                .map_err(|message| document_error(path, message))
        }
        SourceFormat::Odt => {
            let xml = read_zip_entry(path, "content.xml")?;
            xml_to_text(&xml, ODT_BREAKS, ODT_BLOCKS)
                .map_err(|message| document_error(path, message))
        }
    }
}

/// Remove markdown syntax so only the prose reaches the analyzer.
///
/// Links are unwrapped first, so an image keeps its alt text after a `!`.
/// Heading and emphasis markers go next, code is dropped last.
pub fn strip_markdown(text: &str) -> String {
    let text = LINK.replace_all(text, "$1");
    let text = IMAGE.replace_all(&text, "");
    let text = HEADING.replace_all(&text, "");
    let text = STAR_EMPHASIS.replace_all(&text, "$1");
    let text = UNDERSCORE_EMPHASIS.replace_all(&text, "$1");
    let text = FENCED_CODE.replace_all(&text, "");
    let text = INLINE_CODE.replace_all(&text, "");
    text.into_owned()
}

fn document_error(path: &Path, message: String) -> Error {
    Error::Document {
        path: path.to_path_buf(),
        message,
    }
}

fn read_zip_entry(path: &Path, entry: &str) -> Result<String> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut archive =
        ZipArchive::new(file).map_err(|e| document_error(path, format!("not a zip container: {e}")))?;
    let mut member = archive
        .by_name(entry)
        .map_err(|_| document_error(path, format!("missing {entry}")))?;
    let mut xml = String::new();
    member
        .read_to_string(&mut xml)
        .map_err(|e| document_error(path, format!("reading {entry}: {e}")))?;
    Ok(xml)
}

/// Collect the character data of an office XML body.
///
/// `breaks` are empty elements that stand for a line break, `blocks` are
/// elements whose end closes a paragraph.
fn xml_to_text(
    xml: &str,
    breaks: &[&[u8]],
    blocks: &[&[u8]],
) -> std::result::Result<String, String> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                if breaks.contains(&e.local_name().as_ref()) {
                    lines.push(std::mem::take(&mut current));
                }
            }
            Ok(Event::End(e)) => {
                if blocks.contains(&e.local_name().as_ref()) {
                    lines.push(std::mem::take(&mut current));
                }
            }
            Ok(Event::Text(t)) => current.push_str(&String::from_utf8_lossy(&t)),
            Ok(Event::GeneralRef(r)) => {
                let name = String::from_utf8_lossy(&r).into_owned();
                match resolve_entity(&name) {
                    Some(resolved) => current.push_str(&resolved),
                    None => {
                        current.push('&');
                        current.push_str(&name);
                        current.push(';');
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("XML parse error: {e}")),
            _ => {}
        }
        buf.clear();
    }
    lines.push(current);

    let text = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    Ok(text)
}

fn resolve_entity(name: &str) -> Option<String> {
    if let Some(code) = name.strip_prefix('#') {
        let value = match code.strip_prefix('x').or_else(|| code.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => code.parse::<u32>().ok()?,
        };
        return char::from_u32(value).map(String::from);
    }
    quick_xml::escape::resolve_predefined_entity(name).map(str::to_string)
}

/// Input files directly inside `dir`: markdown first, then plain text, then the
/// binary formats. Each group is sorted by file name.
pub fn collect_inputs(dir: &Path) -> Vec<PathBuf> {
    let mut groups: [Vec<PathBuf>; 3] = Default::default();
    for entry in walkdir::WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.into_path();
        let slot = match SourceFormat::from_path(&path) {
            Some(SourceFormat::Markdown) => 0,
            Some(SourceFormat::PlainText) => 1,
            Some(_) => 2,
            None => {
                warn!("Skipping unsupported file: {}", path.display());
                continue;
            }
        };
        groups[slot].push(path);
    }
    groups.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_keep_their_label() {
        let out = strip_markdown("See [the archive](https://example.org/a) today.");
        assert_eq!(out, "See the archive today.");
    }

    #[test]
    fn image_alt_text_survives_link_unwrapping() {
        let out = strip_markdown("Before ![a map](img/map.png) after");
        assert_eq!(out, "Before !a map after");
    }

    #[test]
    fn headings_and_emphasis_are_unwrapped() {
        let out = strip_markdown("## Title\nSome **bold** and *italic* and __under__ words");
        assert_eq!(out, "Title\nSome bold and italic and under words");
    }

    #[test]
    fn code_is_removed() {
        let out = strip_markdown("keep ```\nlet x = 1;\n``` this and `that` too");
        assert_eq!(out, "keep  this and  too");
    }

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(
            SourceFormat::from_path(Path::new("a/B.MD")),
            Some(SourceFormat::Markdown)
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("a/b.txt")),
            Some(SourceFormat::PlainText)
        );
        assert_eq!(SourceFormat::from_path(Path::new("a/b.rtf")), None);
        assert_eq!(SourceFormat::from_path(Path::new("a/noext")), None);
    }

    #[test]
    fn office_xml_paragraphs_become_lines() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
            <w:p><w:r><w:t>First &amp; one</w:t></w:r></w:p>
            <w:p><w:r><w:t>Second</w:t><w:br/><w:t>line</w:t></w:r></w:p>
        </w:body></w:document>"#;
        let text = xml_to_text(xml, DOCX_BREAKS, DOCX_BLOCKS).unwrap();
        assert_eq!(text, "First & one\nSecond\nline");
    }

    #[test]
    fn numeric_entities_resolve() {
        assert_eq!(resolve_entity("#233").as_deref(), Some("é"));
        assert_eq!(resolve_entity("#xE9").as_deref(), Some("é"));
        assert_eq!(resolve_entity("lt").as_deref(), Some("<"));
        assert_eq!(resolve_entity("bogus"), None);
    }
}
