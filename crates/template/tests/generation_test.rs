//! End-to-end generation tests
//!
//! Raw JSON in, PDF bytes out, re-opened with lopdf.

use chrono::{NaiveDate, NaiveDateTime};
use coc_record::{FixedClock, PageId};
use coc_template::{
    find_field, CocError, CocGenerator, CocRenderer, DrawOp, LogoAsset, TextStyle, WATERMARK_OPACITY,
};
use image::{ImageBuffer, Rgba, RgbaImage};
use lopdf::{Document, Object};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::io::Cursor;
use std::sync::Arc;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, 19)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn generator(logo: LogoAsset) -> CocGenerator {
    CocGenerator::new(Arc::new(logo)).with_clock(FixedClock(now()))
}

fn maria_santos() -> Value {
    json!({
        "firstName": "Maria",
        "lastName": "Santos",
        "city": "Alabel",
        "barangay": "Poblacion",
        "tribe": "B'laan",
        "fatherName": "Pedro Santos",
        "motherName": "Ana Santos"
    })
}

fn logo_png() -> Vec<u8> {
    let img: RgbaImage = ImageBuffer::from_fn(8, 8, |x, y| Rgba([20, 90, 40, ((x + y) * 16) as u8]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

fn page_content(doc: &Document, page_number: u32) -> String {
    let page_id = doc.get_pages()[&page_number];
    let content = doc.get_page_content(page_id).unwrap();
    String::from_utf8_lossy(&content).into_owned()
}

fn media_box(doc: &Document, page_number: u32) -> Vec<f32> {
    let page_id = doc.get_pages()[&page_number];
    let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
    page.get(b"MediaBox")
        .unwrap()
        .as_array()
        .unwrap()
        .iter()
        .map(|o| match o {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r,
            other => panic!("unexpected MediaBox entry {other:?}"),
        })
        .collect()
}

fn text_position(op: &DrawOp) -> (f64, f64, TextStyle) {
    match op {
        DrawOp::Text { x, y, style, .. } => (*x, *y, *style),
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn test_maria_santos_end_to_end() {
    let generator = generator(LogoAsset::none());
    let generated = generator.generate(&maria_santos()).unwrap();

    assert!(generated
        .validation
        .missing_fields
        .contains(&"personalInfo.dateOfBirth".to_string()));
    assert_eq!(
        generated.file_name,
        format!(
            "COC_Application_Maria_Santos_{}.pdf",
            now().and_utc().timestamp_millis()
        )
    );

    let loaded = Document::load_mem(&generated.bytes).unwrap();
    assert_eq!(loaded.get_pages().len(), 5);
    for page in 1..=5 {
        assert_eq!(media_box(&loaded, page), vec![0.0, 0.0, 612.0, 792.0]);
    }

    assert!(page_content(&loaded, 1).contains("(Maria Santos) Tj"));
    assert!(page_content(&loaded, 2).contains("(Maria Santos) Tj"));
    assert!(page_content(&loaded, 5).contains("(Pedro Santos) Tj"));
}

#[test]
fn test_name_lands_at_mapped_positions() {
    let logo = LogoAsset::none();
    let record = generator(LogoAsset::none()).consolidate(&maria_santos());
    let rendered = CocRenderer::new(&logo).render(&record);

    let page1 = rendered.page(PageId::Page1).unwrap();
    let (x, y, style) = text_position(page1.find_text("Maria Santos").unwrap());
    assert_eq!((x, y), (46.0, 63.0));
    assert_eq!(style, TextStyle::Bold);

    let page2 = rendered.page(PageId::Page2).unwrap();
    let mapped = find_field(PageId::Page2, "applicantName").unwrap();
    let (x, y, _) = text_position(page2.find_text("Maria Santos").unwrap());
    assert_eq!((x, y), (mapped.x, mapped.y));
    assert_eq!((x, y), (103.1, 86.0));
}

#[test]
fn test_generation_is_idempotent() {
    let generator = generator(LogoAsset::from_bytes(logo_png()));
    let first = generator.generate(&maria_santos()).unwrap();
    let second = generator.generate(&maria_santos()).unwrap();

    assert_eq!(first.file_name, second.file_name);
    assert_eq!(first.record, second.record);
    assert!(first.bytes == second.bytes, "PDF bytes differ between runs");
}

#[test]
fn test_empty_and_whitespace_values_are_not_drawn() {
    let raw = json!({"firstName": "Maria", "lastName": "Santos", "religion": "   "});
    let logo = LogoAsset::none();
    let record = generator(LogoAsset::none()).consolidate(&raw);
    let rendered = CocRenderer::new(&logo).render(&record);

    let page1 = rendered.page(PageId::Page1).unwrap();
    let religion = find_field(PageId::Page1, "religion").unwrap();
    let drawn_at_religion = page1.ops.iter().any(|op| {
        matches!(op, DrawOp::Text { x, y, .. } if *x == religion.x && *y == religion.y)
    });
    assert!(!drawn_at_religion);
    assert!(page1.texts().all(|t| !t.trim().is_empty()));
}

#[test]
fn test_missing_logo_degrades_to_text_header() {
    let generator = generator(LogoAsset::from_path("/nonexistent/ncip-logo.png"));
    let generated = generator.generate(&maria_santos()).unwrap();

    let loaded = Document::load_mem(&generated.bytes).unwrap();
    let page1 = page_content(&loaded, 1);
    assert!(!page1.contains(" Do"));
    assert!(page1.contains("(NATIONAL COMMISSION ON INDIGENOUS PEOPLES) Tj"));

    let record = generator.consolidate(&maria_santos());
    let rendered = CocRenderer::new(generator.logo()).render(&record);
    assert!(rendered.pages.iter().all(|p| p.image_count() == 0));
}

#[test]
fn test_logo_draws_watermark_and_letterhead() {
    let logo = LogoAsset::from_bytes(logo_png());
    let record = generator(LogoAsset::none()).consolidate(&maria_santos());
    let rendered = CocRenderer::new(&logo).render(&record);

    for page in &rendered.pages {
        assert_eq!(page.image_count(), 2, "{}", page.page);
        match &page.ops[0] {
            DrawOp::Image { opacity, .. } => assert_eq!(*opacity, WATERMARK_OPACITY),
            other => panic!("watermark must be painted first, got {other:?}"),
        }
    }

    let loaded = Document::load_mem(&rendered.to_pdf_bytes().unwrap()).unwrap();
    let page1 = page_content(&loaded, 1);
    assert!(page1.contains("/GS80 gs"));
    assert!(page1.contains("/Im1 Do"));
    let page3 = page_content(&loaded, 3);
    assert!(page3.contains("/GS80 gs"));
    assert_eq!(page3.matches(" Do\n").count(), 2);
}

#[test]
fn test_generate_to_dir_uses_file_name() {
    let dir = std::env::temp_dir().join(format!("coc-template-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let raw = json!({"firstName": "Maria", "lastName": "Santos", "applicationId": "APP-42"});
    let path = generator(LogoAsset::none()).generate_to_dir(&raw, &dir).unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "COC_Application_Maria_Santos_APP-42.pdf"
    );
    assert!(std::fs::read(&path).unwrap().starts_with(b"%PDF-"));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_generate_from_json_text() {
    let generator = generator(LogoAsset::none());
    let text = maria_santos().to_string();

    let from_text = generator.generate_from_str(&text).unwrap();
    let from_value = generator.generate(&maria_santos()).unwrap();
    assert_eq!(from_text.record, from_value.record);
    assert!(from_text.bytes == from_value.bytes);

    let err = generator.generate_from_str("{\"firstName\": ").unwrap_err();
    assert!(matches!(err, CocError::Json(_)), "{err:?}");
}
