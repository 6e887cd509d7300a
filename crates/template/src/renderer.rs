//! Certificate rendering

use crate::boilerplate::{page_elements, Element, HEADER};
use crate::document::{DrawOp, RenderedDocument, RenderedPage};
use crate::format::display_value;
use crate::logo::LogoAsset;
use crate::mapping::{page_mapping, FieldMapping, TextField};
use coc_record::{CanonicalRecord, PageId};
use pdf_core::{
    calculate_scaled_dimensions, wrap_text, ImageScaleMode, ImageXObject, POINTS_PER_MM,
};
use std::sync::Arc;

/// Page width of US Letter in millimetres
pub const PAGE_WIDTH_MM: f64 = 215.9;

/// Page height of US Letter in millimetres
pub const PAGE_HEIGHT_MM: f64 = 279.4;

/// Fill opacity of the background watermark
pub const WATERMARK_OPACITY: f32 = 0.08;

/// Watermark edge length in millimetres (square, centred on the page)
pub const WATERMARK_SIZE: f64 = 120.0;

/// Line spacing of wrapped text as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f64 = 1.15;

/// Renders a canonical record onto the five certificate pages
pub struct CocRenderer<'a> {
    /// Letterhead and watermark image
    logo: &'a LogoAsset,
}

impl<'a> CocRenderer<'a> {
    pub fn new(logo: &'a LogoAsset) -> Self {
        Self { logo }
    }

    /// Render every page, in order 1 to 5
    pub fn render(&self, record: &CanonicalRecord) -> RenderedDocument {
        let logo = self.logo.image();
        if logo.is_none() {
            log::debug!("Rendering without logo");
        }

        let pages = PageId::ALL
            .iter()
            .map(|page| self.render_page(*page, record, logo.as_ref()))
            .collect();

        RenderedDocument {
            title: document_title(record),
            pages,
        }
    }

    /// Render a single page
    ///
    /// Paint order: watermark, letterhead, static content, mapped fields.
    pub fn render_page(
        &self,
        page: PageId,
        record: &CanonicalRecord,
        logo: Option<&Arc<ImageXObject>>,
    ) -> RenderedPage {
        let mut ops = Vec::new();
        let mapping = page_mapping(page);

        if let Some(image) = logo {
            ops.push(watermark(image));
        }

        for (_, entry) in mapping {
            if let (FieldMapping::Logo(placement), Some(image)) = (entry, logo) {
                ops.push(fitted_image(
                    image,
                    placement.x,
                    placement.y,
                    placement.width,
                    placement.height,
                    1.0,
                ));
            }
        }
        ops.extend(HEADER.iter().map(element_op));
        ops.extend(page_elements(page).iter().map(element_op));

        for (_, entry) in mapping {
            if let FieldMapping::Text(field) = entry {
                render_field(&mut ops, field, record);
            }
        }

        log::debug!("Rendered {} with {} ops", page, ops.len());
        RenderedPage { page, ops }
    }
}

fn watermark(image: &Arc<ImageXObject>) -> DrawOp {
    fitted_image(
        image,
        (PAGE_WIDTH_MM - WATERMARK_SIZE) / 2.0,
        (PAGE_HEIGHT_MM - WATERMARK_SIZE) / 2.0,
        WATERMARK_SIZE,
        WATERMARK_SIZE,
        WATERMARK_OPACITY,
    )
}

/// Image scaled into a box keeping its aspect ratio, centred in the box
fn fitted_image(
    image: &Arc<ImageXObject>,
    x: f64,
    y: f64,
    box_width: f64,
    box_height: f64,
    opacity: f32,
) -> DrawOp {
    let (width, height) = calculate_scaled_dimensions(
        image.width,
        image.height,
        box_width,
        box_height,
        ImageScaleMode::FitBox,
    );
    DrawOp::Image {
        image: Arc::clone(image),
        x: x + (box_width - width) / 2.0,
        y: y + (box_height - height) / 2.0,
        width,
        height,
        opacity,
    }
}

/// Distance between wrapped lines in millimetres
pub fn line_height_mm(font_size: f32) -> f64 {
    font_size as f64 * LINE_HEIGHT_FACTOR / POINTS_PER_MM
}

/// Emit one mapped field, wrapped when it has a width limit
fn render_field(ops: &mut Vec<DrawOp>, field: &TextField, record: &CanonicalRecord) {
    let Some(text) = display_value(field.field, record) else {
        return;
    };

    let lines = match field.max_width {
        Some(max_width) => wrap_text(
            &text,
            field.style.font(),
            field.font_size,
            max_width * POINTS_PER_MM,
        ),
        None => vec![text],
    };

    let step = line_height_mm(field.font_size);
    for (i, line) in lines.into_iter().enumerate() {
        ops.push(DrawOp::Text {
            text: line,
            x: field.x,
            y: field.y + step * i as f64,
            font_size: field.font_size,
            style: field.style,
            align: field.align,
        });
    }
}

fn element_op(element: &Element) -> DrawOp {
    match *element {
        Element::Text {
            text,
            x,
            y,
            font_size,
            style,
            align,
        } => DrawOp::Text {
            text: text.to_string(),
            x,
            y,
            font_size,
            style,
            align,
        },
        Element::Line {
            x1,
            y1,
            x2,
            y2,
            width,
        } => DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            width,
        },
        Element::Rect {
            x,
            y,
            width,
            height,
            line_width,
        } => DrawOp::Rect {
            x,
            y,
            width,
            height,
            line_width,
        },
    }
}

fn document_title(record: &CanonicalRecord) -> String {
    let name = record.personal_info.full_name.trim();
    if name.is_empty() {
        "Certificate of Confirmation Application".to_string()
    } else {
        format!("Certificate of Confirmation Application - {name}")
    }
}
