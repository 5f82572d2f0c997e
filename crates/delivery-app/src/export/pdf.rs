//! Single-page A4 PDF rendering of a delivery note
//!
//! Layout: centred supplier header and title, `label: value` rows, then the
//! signature lines side by side. Text uses the standard Helvetica fonts with
//! WinAnsi encoding, so no font files are embedded.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use delivery_domain::model::Document;
use delivery_types::{Error, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream, StringFormat};

// A4 in points
const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 40.0;
const LABEL_WIDTH: f32 = 170.0;

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

/// Export a delivery note to a PDF file
pub fn export_to_pdf(document: &Document, output_path: &Path) -> Result<()> {
    let mut pdf = build_pdf(document)?;
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    pdf.save_to(&mut writer)
        .map_err(|e| Error::Pdf(e.to_string()))?;
    writer.flush()?;
    Ok(())
}

fn build_pdf(document: &Document) -> Result<lopdf::Document> {
    let mut pdf = lopdf::Document::with_version("1.7");
    let pages_id = pdf.new_object_id();

    let regular_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let bold_id = pdf.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = pdf.add_object(dictionary! {
        "Font" => dictionary! { REGULAR => regular_id, BOLD => bold_id },
    });

    let content = Content {
        operations: page_operations(document),
    };
    let encoded = content.encode().map_err(|e| Error::Pdf(e.to_string()))?;
    let content_id = pdf.add_object(Stream::new(dictionary! {}, encoded));

    let page_id = pdf.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        "Contents" => content_id,
        "Resources" => resources_id,
    });
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => 1,
    };
    pdf.objects.insert(pages_id, pages.into());

    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);

    Ok(pdf)
}

fn page_operations(document: &Document) -> Vec<Operation> {
    let mut ops = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN - 14.0;

    centred(&mut ops, BOLD, 14.0, y, &document.header.name);
    y -= 18.0;
    centred(&mut ops, REGULAR, 10.0, y, &document.header.address);
    y -= 14.0;
    centred(&mut ops, REGULAR, 10.0, y, &document.header.contact_line());
    y -= 34.0;

    centred(&mut ops, BOLD, 12.0, y, &document.title);
    y -= 14.0;
    let issued = document.issued_at.format("%Y-%m-%d %H:%M").to_string();
    centred(&mut ops, REGULAR, 9.0, y, &issued);
    y -= 26.0;

    for row in &document.rows {
        text(&mut ops, REGULAR, 11.0, MARGIN, y, &format!("{}:", row.label));
        text(&mut ops, REGULAR, 11.0, MARGIN + LABEL_WIDTH, y, &row.value);
        y -= 22.0;
    }

    y -= 40.0;
    text(&mut ops, REGULAR, 11.0, MARGIN, y, "Signatures:");
    y -= 22.0;
    let column = (PAGE_WIDTH - 2.0 * MARGIN) / document.signatures.len().max(1) as f32;
    for (i, signature) in document.signatures.iter().enumerate() {
        let x = MARGIN + column * i as f32;
        text(&mut ops, REGULAR, 11.0, x, y, &format!("{}: _______________", signature));
    }

    ops
}

fn text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, s: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new(
        "Tj",
        vec![Object::String(win_ansi(s), StringFormat::Literal)],
    ));
    ops.push(Operation::new("ET", vec![]));
}

/// Centre on the page using an average Helvetica glyph width of half the
/// font size
fn centred(ops: &mut Vec<Operation>, font: &str, size: f32, y: f32, s: &str) {
    let width = s.chars().count() as f32 * size * 0.5;
    let x = ((PAGE_WIDTH - width) / 2.0).max(MARGIN);
    text(ops, font, size, x, y, s);
}

/// Latin-1 bytes; characters outside it become `?`
fn win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}
