//! Certificate of Confirmation rendering
//!
//! This crate provides:
//! - Static field mapping tables and page boilerplate for the five pages
//! - [`CocRenderer`]: a canonical record onto a display list
//! - [`CocGenerator`]: raw input to PDF bytes, with validation warnings
//!
//! # Example
//!
//! ```no_run
//! use coc_template::{CocGenerator, LogoAsset};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let generator = CocGenerator::new(Arc::new(LogoAsset::from_path("ncip-logo.png")));
//! let generated = generator.generate(&json!({"firstName": "Maria", "lastName": "Santos"}))?;
//! std::fs::write(&generated.file_name, &generated.bytes)?;
//! # Ok::<(), coc_template::CocError>(())
//! ```

pub mod boilerplate;
mod document;
mod format;
mod generator;
mod logo;
pub mod mapping;
mod renderer;

pub use document::{DrawOp, RenderedDocument, RenderedPage};
pub use format::{display_value, format_date_mmddyyyy};
pub use generator::{pdf_file_name, CocGenerator, GeneratedCoc};
pub use logo::LogoAsset;
pub use mapping::{find_field, page_mapping, FieldMapping, TextField, TextStyle};
pub use renderer::{
    line_height_mm, CocRenderer, LINE_HEIGHT_FACTOR, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
    WATERMARK_OPACITY, WATERMARK_SIZE,
};

use thiserror::Error;

/// Errors that can occur while generating a certificate
#[derive(Debug, Error)]
pub enum CocError {
    #[error("PDF error: {0}")]
    Pdf(#[from] pdf_core::PdfError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logo error: {0}")]
    Logo(String),
}

/// Result type for certificate operations
pub type Result<T> = std::result::Result<T, CocError>;
