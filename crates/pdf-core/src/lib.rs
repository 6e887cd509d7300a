//! PDF Core - Low-level PDF generation
//!
//! This crate provides functionality for:
//! - Creating documents with fixed-size blank pages
//! - Writing text in the standard Helvetica faces (no font embedding)
//! - Measuring and wrapping text with Helvetica metrics
//! - Drawing lines and rectangles
//! - Inserting JPEG/PNG images, optionally translucent
//!
//! Coordinates are in points with the origin at the top-left corner of the
//! page; y is the text baseline.
//!
//! # Example
//!
//! ```ignore
//! use pdf_core::{Align, PageSize, PdfDocument};
//!
//! let mut doc = PdfDocument::new(PageSize::LETTER);
//! let page = doc.add_blank_page();
//! doc.set_font_size(12.0);
//! doc.insert_text("Hello, World!", page, 72.0, 72.0, Align::Left)?;
//! let bytes = doc.into_bytes()?;
//! ```

mod document;
mod font;
mod image;
mod text;

pub use document::{Color, PageSize, PdfDocument};
pub use font::{encode_win_ansi, FontStyle, FontWeight, StandardFont};
pub use image::{calculate_scaled_dimensions, detect_format, ImageFormat, ImageScaleMode, ImageXObject};
pub use text::{escape_literal, generate_text_operators, wrap_text, TextRenderContext};

use thiserror::Error;

/// Errors that can occur during PDF operations
#[derive(Debug, Error)]
pub enum PdfError {
    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Invalid page number: {0} (document has {1} pages)")]
    InvalidPage(usize, usize),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Lopdf error: {0}")]
    LopdfError(#[from] lopdf::Error),
}

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Points per millimetre
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

/// Convert millimetres to points
pub fn mm_to_pt(mm: f64) -> f64 {
    mm * POINTS_PER_MM
}

/// Text alignment options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Format a number for a content stream: at most three decimals, no
/// trailing zeros, never `-0`
pub(crate) fn format_number(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    let s = format!("{rounded:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// zlib-compress a buffer for FlateDecode streams
pub(crate) fn zlib_compress(data: &[u8]) -> Result<Vec<u8>> {
    use std::io::Write;

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
