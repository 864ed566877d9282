//! Text reconstruction from a page content stream.
//!
//! Statements often draw a whole page inside one `BT … ET` block and move
//! between rows with `Td`, `TD`, `T*`, `Tm` or the quote operators. Rows
//! are rebuilt from those moves: a vertical move starts a new line and a
//! horizontal move on the same row separates fields with a space.

use std::collections::BTreeMap;

use lopdf::content::Operation;
use lopdf::{Document, Encoding, Object, ObjectId};
use tracing::debug;

/// `TJ` adjustments below this (thousandths of a text unit) read as a space.
const TJ_SPACE_THRESHOLD: f32 = -100.0;

/// Vertical offsets smaller than this stay on the same row.
const SAME_ROW_TOLERANCE: f32 = 0.5;

/// Decodes the text of one page, one visual row per line.
///
/// Only a page whose content stream cannot be read is an error. Text drawn
/// with a font whose encoding cannot be resolved is left out, and the rest
/// of the page is kept.
pub fn page_text(document: &Document, page_id: ObjectId) -> lopdf::Result<String> {
    let encodings: BTreeMap<Vec<u8>, Encoding<'_>> = document
        .get_page_fonts(page_id)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(name, font)| match font.get_font_encoding(document) {
            Ok(encoding) => Some((name, encoding)),
            Err(err) => {
                debug!(
                    font = %String::from_utf8_lossy(&name),
                    error = %err,
                    "Skipping font without a usable encoding"
                );
                None
            }
        })
        .collect();

    let content = document.get_and_decode_page_content(page_id)?;

    let mut writer = RowWriter::default();
    let mut encoding: Option<&Encoding<'_>> = None;

    for operation in &content.operations {
        match operation.operator.as_str() {
            "BT" => writer.begin_text(),
            "ET" => writer.new_line(),
            "Tf" => {
                encoding = operation
                    .operands
                    .first()
                    .and_then(|name| name.as_name().ok())
                    .and_then(|name| encodings.get(name));
            }
            "Td" | "TD" => match (operand(operation, 0), operand(operation, 1)) {
                (Some(tx), Some(ty)) => writer.move_by(tx, ty),
                _ => writer.new_line(),
            },
            "Tm" => match operand(operation, 5) {
                Some(y) => writer.move_to(y),
                None => writer.new_line(),
            },
            "T*" => writer.new_line(),
            "Tj" | "TJ" => writer.show(encoding, &operation.operands),
            "'" => {
                writer.new_line();
                writer.show(encoding, &operation.operands);
            }
            "\"" => {
                writer.new_line();
                writer.show(encoding, operation.operands.get(2..).unwrap_or_default());
            }
            _ => {}
        }
    }

    Ok(writer.finish())
}

fn operand(operation: &Operation, index: usize) -> Option<f32> {
    operation.operands.get(index).and_then(|o| o.as_float().ok())
}

/// Accumulates page text, one row per line.
#[derive(Debug, Default)]
struct RowWriter {
    text: String,
    /// Baseline of the current row, when known.
    row_y: Option<f32>,
}

impl RowWriter {
    fn begin_text(&mut self) {
        // BT resets the text matrix; the next Tm/Td decides the row.
        self.row_y = None;
    }

    fn new_line(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }

    fn separate(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with(char::is_whitespace) {
            self.text.push(' ');
        }
    }

    fn move_by(&mut self, tx: f32, ty: f32) {
        if ty.abs() >= SAME_ROW_TOLERANCE {
            self.new_line();
        } else if tx != 0.0 {
            self.separate();
        }
        self.row_y = self.row_y.map(|y| y + ty);
    }

    fn move_to(&mut self, y: f32) {
        match self.row_y {
            Some(row_y) if (row_y - y).abs() < SAME_ROW_TOLERANCE => self.separate(),
            _ => self.new_line(),
        }
        self.row_y = Some(y);
    }

    fn show(&mut self, encoding: Option<&Encoding<'_>>, operands: &[Object]) {
        let Some(encoding) = encoding else {
            debug!("Skipping text drawn without a known font encoding");
            return;
        };
        for operand in operands {
            match operand {
                Object::String(bytes, _) => match Document::decode_text(encoding, bytes) {
                    Ok(decoded) => self.text.push_str(&decoded),
                    Err(err) => debug!(error = %err, "Skipping undecodable text"),
                },
                Object::Array(items) => self.show(Some(encoding), items),
                Object::Integer(_) | Object::Real(_) => {
                    if operand.as_float().is_ok_and(|adjust| adjust < TJ_SPACE_THRESHOLD) {
                        self.separate();
                    }
                }
                _ => {}
            }
        }
    }

    fn finish(mut self) -> String {
        self.new_line();
        self.text
    }
}
