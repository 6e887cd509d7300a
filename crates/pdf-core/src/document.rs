//! PDF Document builder

use crate::font::{encode_win_ansi, FontStyle, FontWeight, StandardFont};
use crate::image::ImageXObject;
use crate::text::{escape_literal, generate_text_operators, TextRenderContext};
use crate::{format_number, zlib_compress, Align, PdfError, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::{Hash, Hasher};
use std::path::Path;

/// RGB Color (values 0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Create a new RGB color (values 0.0 - 1.0)
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black color
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    fn operands(&self) -> String {
        format!(
            "{} {} {}",
            format_number(self.r as f64),
            format_number(self.g as f64),
            format_number(self.b as f64)
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Page dimensions in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl PageSize {
    /// US Letter, portrait (8.5 x 11 in)
    pub const LETTER: PageSize = PageSize {
        width: 612.0,
        height: 792.0,
    };
}

/// Buffered content and resource usage of one page
#[derive(Debug, Default)]
struct PageContent {
    /// Reserved page object id
    id: ObjectId,
    /// Content stream operators
    operators: Vec<u8>,
    /// Fonts referenced by the page
    fonts: BTreeSet<StandardFont>,
    /// Image resource name -> image object
    images: BTreeMap<String, ObjectId>,
    /// Graphics state resource name -> ExtGState object
    graphics_states: BTreeMap<String, ObjectId>,
}

/// PDF document builder providing high-level drawing operations
///
/// Pages are blank on creation. Everything drawn is buffered per page and
/// written out once by [`PdfDocument::into_bytes`]; resource maps are
/// ordered so that identical drawing calls produce identical bytes.
pub struct PdfDocument {
    /// The underlying lopdf document
    inner: Document,
    /// Reserved id of the page tree root
    pages_id: ObjectId,
    /// Size used for every page
    page_size: PageSize,
    /// Pages in order
    pages: Vec<PageContent>,
    /// Current font weight
    current_weight: FontWeight,
    /// Current font style
    current_style: FontStyle,
    /// Current font size
    current_font_size: f32,
    /// Current line width in points
    current_line_width: f64,
    /// Current fill opacity (1.0 = opaque)
    current_opacity: f32,
    /// Font object per face, created on first use
    font_objects: BTreeMap<StandardFont, ObjectId>,
    /// Embedded images (data hash -> PDF object ID)
    embedded_images: HashMap<u64, ObjectId>,
    /// Next image resource number
    next_image_resource: u32,
    /// ExtGState per fill opacity in thousandths
    opacity_states: BTreeMap<u32, ObjectId>,
    /// Document title for the Info dictionary
    title: Option<String>,
}

impl PdfDocument {
    /// Create an empty document; add pages with [`PdfDocument::add_blank_page`]
    pub fn new(page_size: PageSize) -> Self {
        let mut inner = Document::with_version("1.5");
        let pages_id = inner.new_object_id();

        Self {
            inner,
            pages_id,
            page_size,
            pages: Vec::new(),
            current_weight: FontWeight::default(),
            current_style: FontStyle::default(),
            current_font_size: 12.0,
            current_line_width: 1.0,
            current_opacity: 1.0,
            font_objects: BTreeMap::new(),
            embedded_images: HashMap::new(),
            next_image_resource: 1,
            opacity_states: BTreeMap::new(),
            title: None,
        }
    }

    /// Add a blank page and return its page number (1-indexed)
    pub fn add_blank_page(&mut self) -> usize {
        let id = self.inner.new_object_id();
        self.pages.push(PageContent {
            id,
            ..PageContent::default()
        });
        self.pages.len()
    }

    /// Get the number of pages in the document
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Page size shared by all pages
    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Set the `/Title` written to the Info dictionary
    pub fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    /// Set the font size in points
    pub fn set_font_size(&mut self, size: f32) {
        self.current_font_size = size;
    }

    /// Set the font weight (keeps current size/style)
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.current_weight = weight;
    }

    /// Set the font style (keeps current size/weight)
    pub fn set_font_style(&mut self, style: FontStyle) {
        self.current_style = style;
    }

    /// Set the stroke width in points
    pub fn set_line_width(&mut self, width: f64) {
        self.current_line_width = width;
    }

    /// Set the fill opacity applied to subsequent text and images
    ///
    /// Values are clamped to 0.0..=1.0.
    pub fn set_fill_opacity(&mut self, opacity: f32) {
        self.current_opacity = opacity.clamp(0.0, 1.0);
    }

    /// Face selected by the current weight and style
    pub fn current_font(&self) -> StandardFont {
        StandardFont::from_variant(self.current_weight, self.current_style)
    }

    /// Insert text at a specific position
    ///
    /// # Arguments
    /// * `text` - Text to insert (characters outside WinAnsi render as `?`)
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Baseline Y coordinate in points (from top)
    /// * `align` - Text alignment relative to `x`
    pub fn insert_text(
        &mut self,
        text: &str,
        page: usize,
        x: f64,
        y: f64,
        align: Align,
    ) -> Result<()> {
        self.check_page(page)?;

        if text.is_empty() {
            return Ok(());
        }

        let font = self.current_font();
        let encoded = encode_win_ansi(text);
        let ctx = TextRenderContext {
            font_name: font.resource_name().to_string(),
            font_size: self.current_font_size,
            text_width: font.encoded_width(&encoded) as f64 * self.current_font_size as f64
                / 1000.0,
            color: Color::black(),
        };

        let pdf_y = self.page_size.height - y;
        let operators = generate_text_operators(&escape_literal(&encoded), x, pdf_y, align, &ctx);

        self.ensure_font_object(font);
        let gstate = self.opacity_state(page);
        let content = &mut self.pages[page - 1];
        content.fonts.insert(font);
        push_operators(content, gstate.as_deref(), &operators);

        Ok(())
    }

    /// Draw a straight line between two points (top-origin coordinates)
    pub fn draw_line(&mut self, page: usize, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<()> {
        self.check_page(page)?;

        let height = self.page_size.height;
        let operators = format!(
            "{} RG\n{} w\n{} {} m\n{} {} l\nS\n",
            Color::black().operands(),
            format_number(self.current_line_width),
            format_number(x1),
            format_number(height - y1),
            format_number(x2),
            format_number(height - y2),
        );

        push_operators(&mut self.pages[page - 1], None, operators.as_bytes());
        Ok(())
    }

    /// Stroke a rectangle whose top-left corner is at (x, y)
    pub fn draw_rect(&mut self, page: usize, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        self.check_page(page)?;

        let pdf_y = self.page_size.height - y - height;
        let operators = format!(
            "{} RG\n{} w\n{} {} {} {} re\nS\n",
            Color::black().operands(),
            format_number(self.current_line_width),
            format_number(x),
            format_number(pdf_y),
            format_number(width),
            format_number(height),
        );

        push_operators(&mut self.pages[page - 1], None, operators.as_bytes());
        Ok(())
    }

    /// Insert an image stretched to the given box
    ///
    /// # Arguments
    /// * `image` - Decoded image
    /// * `page` - Page number (1-indexed)
    /// * `x` - X coordinate in points
    /// * `y` - Y coordinate of the top edge in points (from top)
    /// * `width` - Image width in points
    /// * `height` - Image height in points
    pub fn insert_image(
        &mut self,
        image: &ImageXObject,
        page: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<()> {
        self.check_page(page)?;

        let resource_name = self.get_or_create_image_ref(image, page);
        let pdf_y = self.page_size.height - y - height;
        let operators = format!(
            "{} 0 0 {} {} {} cm\n/{} Do\n",
            format_number(width),
            format_number(height),
            format_number(x),
            format_number(pdf_y),
            resource_name
        );

        let gstate = self.opacity_state(page);
        push_operators(&mut self.pages[page - 1], gstate.as_deref(), operators.as_bytes());
        Ok(())
    }

    /// Serialize the document
    pub fn into_bytes(mut self) -> Result<Vec<u8>> {
        if self.pages.is_empty() {
            return Err(PdfError::SaveError("Document has no pages".to_string()));
        }

        let pages = std::mem::take(&mut self.pages);
        let mut kids = Vec::with_capacity(pages.len());

        for content in pages {
            let page_dict = self.finalize_page(content.id, &content)?;
            self.inner
                .objects
                .insert(content.id, Object::Dictionary(page_dict));
            kids.push(Object::Reference(content.id));
        }

        let mut pages_dict = Dictionary::new();
        pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
        pages_dict.set("Count", kids.len() as i64);
        pages_dict.set("Kids", Object::Array(kids));
        self.inner
            .objects
            .insert(self.pages_id, Object::Dictionary(pages_dict));

        let mut catalog = Dictionary::new();
        catalog.set("Type", Object::Name(b"Catalog".to_vec()));
        catalog.set("Pages", Object::Reference(self.pages_id));
        let catalog_id = self.inner.add_object(catalog);
        self.inner.trailer.set("Root", Object::Reference(catalog_id));

        let mut info = Dictionary::new();
        info.set(
            "Producer",
            Object::String(b"pdf-core".to_vec(), StringFormat::Literal),
        );
        if let Some(title) = &self.title {
            info.set(
                "Title",
                Object::String(encode_win_ansi(title), StringFormat::Literal),
            );
        }
        let info_id = self.inner.add_object(info);
        self.inner.trailer.set("Info", Object::Reference(info_id));

        let mut buffer = Vec::new();
        self.inner
            .save_to(&mut buffer)
            .map_err(|e| PdfError::SaveError(e.to_string()))?;

        Ok(buffer)
    }

    /// Save the document to a file
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let bytes = self.into_bytes()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn check_page(&self, page: usize) -> Result<()> {
        if page == 0 || page > self.pages.len() {
            return Err(PdfError::InvalidPage(page, self.pages.len()));
        }
        Ok(())
    }

    fn ensure_font_object(&mut self, font: StandardFont) {
        if !self.font_objects.contains_key(&font) {
            let id = self.inner.add_object(font.to_pdf_dictionary());
            self.font_objects.insert(font, id);
        }
    }

    /// Resource name of the ExtGState for the current opacity, registered on
    /// the page; `None` when fully opaque
    fn opacity_state(&mut self, page: usize) -> Option<String> {
        if self.current_opacity >= 1.0 {
            return None;
        }

        let key = (self.current_opacity * 1000.0).round() as u32;
        let id = match self.opacity_states.get(&key) {
            Some(id) => *id,
            None => {
                let mut dict = Dictionary::new();
                dict.set("Type", Object::Name(b"ExtGState".to_vec()));
                dict.set("ca", Object::Real(key as f32 / 1000.0));
                dict.set("CA", Object::Real(key as f32 / 1000.0));
                let id = self.inner.add_object(dict);
                self.opacity_states.insert(key, id);
                id
            }
        };

        let name = format!("GS{key}");
        self.pages[page - 1]
            .graphics_states
            .insert(name.clone(), id);
        Some(name)
    }

    /// Get or create an image reference for a specific page
    ///
    /// Images are deduplicated by a hash of their data.
    fn get_or_create_image_ref(&mut self, image: &ImageXObject, page: usize) -> String {
        let mut hasher = DefaultHasher::new();
        image.data.hash(&mut hasher);
        image.soft_mask.hash(&mut hasher);
        (image.width, image.height).hash(&mut hasher);
        let data_hash = hasher.finish();

        let object_id = match self.embedded_images.get(&data_hash) {
            Some(id) => *id,
            None => {
                let mask_id = image
                    .soft_mask_stream()
                    .map(|mask| self.inner.add_object(mask));
                let id = self.inner.add_object(image.to_pdf_stream(mask_id));
                self.embedded_images.insert(data_hash, id);
                id
            }
        };

        let page_images = &mut self.pages[page - 1].images;
        if let Some((name, _)) = page_images.iter().find(|(_, id)| **id == object_id) {
            return name.clone();
        }

        let resource_name = format!("Im{}", self.next_image_resource);
        self.next_image_resource += 1;
        page_images.insert(resource_name.clone(), object_id);
        resource_name
    }

    /// Write the content stream and build the page dictionary
    fn finalize_page(&mut self, page_id: ObjectId, content: &PageContent) -> Result<Dictionary> {
        let mut stream_dict = Dictionary::new();
        stream_dict.set("Filter", Object::Name(b"FlateDecode".to_vec()));
        let contents_id = self.inner.add_object(Stream::new(
            stream_dict,
            zlib_compress(&content.operators)?,
        ));

        let mut resources = Dictionary::new();

        if !content.fonts.is_empty() {
            let mut fonts = Dictionary::new();
            for font in &content.fonts {
                if let Some(id) = self.font_objects.get(font) {
                    fonts.set(font.resource_name(), Object::Reference(*id));
                }
            }
            resources.set("Font", Object::Dictionary(fonts));
        }

        if !content.images.is_empty() {
            let mut xobjects = Dictionary::new();
            for (name, id) in &content.images {
                xobjects.set(name.as_bytes().to_vec(), Object::Reference(*id));
            }
            resources.set("XObject", Object::Dictionary(xobjects));
        }

        if !content.graphics_states.is_empty() {
            let mut states = Dictionary::new();
            for (name, id) in &content.graphics_states {
                states.set(name.as_bytes().to_vec(), Object::Reference(*id));
            }
            resources.set("ExtGState", Object::Dictionary(states));
        }

        let mut page_dict = Dictionary::new();
        page_dict.set("Type", Object::Name(b"Page".to_vec()));
        page_dict.set("Parent", Object::Reference(self.pages_id));
        page_dict.set(
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.page_size.width as f32),
                Object::Real(self.page_size.height as f32),
            ]),
        );
        page_dict.set("Resources", Object::Dictionary(resources));
        page_dict.set("Contents", Object::Reference(contents_id));

        log::debug!(
            "Finalized page {:?}: {} bytes of operators",
            page_id,
            content.operators.len()
        );

        Ok(page_dict)
    }
}

/// Append operators wrapped in a save/restore pair, selecting an ExtGState
/// first when given
fn push_operators(content: &mut PageContent, gstate: Option<&str>, operators: &[u8]) {
    content.operators.extend_from_slice(b"q\n");
    if let Some(name) = gstate {
        content
            .operators
            .extend_from_slice(format!("/{name} gs\n").as_bytes());
    }
    content.operators.extend_from_slice(operators);
    content.operators.extend_from_slice(b"Q\n");
}
