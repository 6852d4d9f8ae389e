//! PDF text extraction for uploaded resumes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("malformed PDF: {0}")]
    Parse(#[from] pdf_extract::OutputError),
}

/// Extracts the recoverable text of every page, in document order.
///
/// A page with no extractable text (a scanned image, an empty page)
/// contributes an empty string rather than failing the document. A
/// parser-level error on any page aborts the whole extraction; no partial
/// string is ever returned.
pub fn extract_text(pdf_bytes: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(pdf_bytes)?;
    Ok(join_pages(&pages))
}

/// Joins per-page text in page order, newline-separated, and trims the ends
/// of the combined result.
fn join_pages(pages: &[String]) -> String {
    pages.join("\n").trim().to_string()
}

/// Builds an in-memory PDF fixture with one page per entry; an empty entry
/// becomes a page with no text operators.
#[cfg(test)]
pub(crate) fn pdf_with_pages(page_texts: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let operations = if text.is_empty() {
            vec![]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            Content { operations }.encode().expect("encode page content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize PDF");
    buffer
}
