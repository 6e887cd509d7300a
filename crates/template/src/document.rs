//! Rendered document display list and PDF serialization

use crate::mapping::TextStyle;
use crate::Result;
use coc_record::PageId;
use pdf_core::{mm_to_pt, Align, ImageXObject, PageSize, PdfDocument};
use std::sync::Arc;

/// One drawing instruction; positions and sizes in millimetres
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        text: String,
        x: f64,
        /// Baseline
        y: f64,
        font_size: f32,
        style: TextStyle,
        align: Align,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// Stroke width in points
        width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        /// Stroke width in points
        line_width: f64,
    },
    Image {
        image: Arc<ImageXObject>,
        x: f64,
        /// Top edge
        y: f64,
        width: f64,
        height: f64,
        /// Fill opacity, 1.0 = opaque
        opacity: f32,
    },
}

/// Drawing instructions of one page, in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    pub page: PageId,
    pub ops: Vec<DrawOp>,
}

impl RenderedPage {
    /// Every text string drawn on the page
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// First text op drawing exactly `needle`
    pub fn find_text(&self, needle: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text == needle))
    }

    /// Number of image ops
    pub fn image_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Image { .. }))
            .count()
    }
}

/// The five pages of a certificate, ready to serialize
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub title: String,
    pub pages: Vec<RenderedPage>,
}

impl RenderedDocument {
    pub fn page(&self, page: PageId) -> Option<&RenderedPage> {
        self.pages.iter().find(|p| p.page == page)
    }

    /// Serialize to US Letter PDF bytes
    ///
    /// Output depends only on the display list, so equal documents give
    /// byte-identical files.
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>> {
        let mut doc = PdfDocument::new(PageSize::LETTER);
        doc.set_title(&self.title);

        for rendered in &self.pages {
            let page = doc.add_blank_page();
            for op in &rendered.ops {
                draw(&mut doc, page, op)?;
            }
        }

        let bytes = doc.into_bytes()?;
        log::debug!("Serialized {} pages, {} bytes", self.pages.len(), bytes.len());
        Ok(bytes)
    }
}

fn draw(doc: &mut PdfDocument, page: usize, op: &DrawOp) -> Result<()> {
    match op {
        DrawOp::Text {
            text,
            x,
            y,
            font_size,
            style,
            align,
        } => {
            doc.set_font_size(*font_size);
            doc.set_font_weight(style.weight());
            doc.set_font_style(style.font_style());
            doc.insert_text(text, page, mm_to_pt(*x), mm_to_pt(*y), *align)?;
        }
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width,
        } => {
            doc.set_line_width(*width);
            doc.draw_line(
                page,
                mm_to_pt(*x1),
                mm_to_pt(*y1),
                mm_to_pt(*x2),
                mm_to_pt(*y2),
            )?;
        }
        DrawOp::Rect {
            x,
            y,
            width,
            height,
            line_width,
        } => {
            doc.set_line_width(*line_width);
            doc.draw_rect(
                page,
                mm_to_pt(*x),
                mm_to_pt(*y),
                mm_to_pt(*width),
                mm_to_pt(*height),
            )?;
        }
        DrawOp::Image {
            image,
            x,
            y,
            width,
            height,
            opacity,
        } => {
            doc.set_fill_opacity(*opacity);
            doc.insert_image(
                image,
                page,
                mm_to_pt(*x),
                mm_to_pt(*y),
                mm_to_pt(*width),
                mm_to_pt(*height),
            )?;
            doc.set_fill_opacity(1.0);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RenderedDocument {
        RenderedDocument {
            title: "Sample".to_string(),
            pages: vec![RenderedPage {
                page: PageId::Page1,
                ops: vec![
                    DrawOp::Text {
                        text: "Maria Santos".to_string(),
                        x: 46.0,
                        y: 63.0,
                        font_size: 10.0,
                        style: TextStyle::Bold,
                        align: Align::Left,
                    },
                    DrawOp::Line {
                        x1: 45.0,
                        y1: 64.2,
                        x2: 195.9,
                        y2: 64.2,
                        width: 0.5,
                    },
                ],
            }],
        }
    }

    #[test]
    fn test_page_queries() {
        let doc = sample();
        let page = doc.page(PageId::Page1).unwrap();

        assert_eq!(page.texts().collect::<Vec<_>>(), vec!["Maria Santos"]);
        assert!(page.find_text("Maria Santos").is_some());
        assert!(page.find_text("Maria").is_none());
        assert_eq!(page.image_count(), 0);
        assert!(doc.page(PageId::Page2).is_none());
    }

    #[test]
    fn test_to_pdf_bytes() {
        let bytes = sample().to_pdf_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert_eq!(bytes, sample().to_pdf_bytes().unwrap());
    }
}
