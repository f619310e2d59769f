//! Text Extractor — turns an uploaded PDF into one ordered text string.
//!
//! Pages are concatenated in physical order with no separator, each page's
//! text kept verbatim. A document with no extractable text at all (scanned
//! images, blank pages) comes back as `""`.

use thiserror::Error;
use tracing::debug;

/// How far into the upload the `%PDF-` header may appear.
const MAGIC_SEARCH_WINDOW: usize = 1024;
const PDF_MAGIC: &[u8] = b"%PDF-";

#[derive(Debug, Error)]
#[error("could not read document: {reason}")]
pub struct DocumentReadError {
    pub reason: String,
}

impl DocumentReadError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Text of a whole document, pages already joined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    text: String,
    page_count: usize,
}

impl ExtractedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Returns true if the leading bytes carry a PDF header.
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    let window = &bytes[..bytes.len().min(MAGIC_SEARCH_WINDOW)];
    window
        .windows(PDF_MAGIC.len())
        .any(|w| w == PDF_MAGIC)
}

/// Extracts the text of every page and joins them in page order.
pub fn extract_text(bytes: &[u8]) -> Result<ExtractedText, DocumentReadError> {
    if bytes.is_empty() {
        return Err(DocumentReadError::new("document is empty"));
    }
    if !looks_like_pdf(bytes) {
        return Err(DocumentReadError::new("missing %PDF- header"));
    }

    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes)
        .map_err(|e| DocumentReadError::new(format!("PDF could not be parsed: {e}")))?;

    let extracted = join_pages(pages);
    debug!(
        "Extracted {} chars from {} page(s)",
        extracted.text.chars().count(),
        extracted.page_count
    );
    Ok(extracted)
}

/// Concatenates page texts with no separator. Whitespace between pages is
/// kept; only a document that is whitespace throughout collapses to `""`.
pub fn join_pages<I, S>(pages: I) -> ExtractedText
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut text = String::new();
    let mut page_count = 0;
    for page in pages {
        page_count += 1;
        text.push_str(page.as_ref());
    }
    if text.trim().is_empty() {
        text.clear();
    }
    ExtractedText { text, page_count }
}

#[cfg(test)]
pub mod testing {
    //! PDF fixtures built in memory.

    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    use super::ExtractedText;

    impl From<String> for ExtractedText {
        /// Wraps already-extracted text as a single page.
        fn from(text: String) -> Self {
            Self {
                text,
                page_count: 1,
            }
        }
    }

    /// Builds a PDF with one page per entry; `None` makes a page with no text.
    pub fn build_pdf(pages: &[Option<&str>]) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut kids: Vec<Object> = Vec::new();
        for page in pages {
            let operations = match page {
                Some(text) => vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 700.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
                None => vec![],
            };
            let content = Content { operations };
            let content_id =
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
            let page_id = doc.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            });
            kids.push(page_id.into());
        }

        let count = kids.len() as i64;
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }
}
