//! WASM bindings for Certificate of Confirmation generation
//!
//! This crate provides a JavaScript-friendly API for:
//! - Consolidating raw form input into the canonical record
//! - Advisory validation, globally or per page
//! - Generating the five-page certificate PDF in the browser
//!
//! # Example (JavaScript)
//!
//! ```javascript
//! import init, { CocGenerator } from 'coc-wasm';
//!
//! await init();
//!
//! const generator = new CocGenerator();
//! generator.loadLogo(new Uint8Array(await (await fetch('ncip-logo.png')).arrayBuffer()));
//!
//! const form = { firstName: "Maria", lastName: "Santos" };
//! const report = generator.validate(form);
//! const { bytes, fileName } = generator.generateWithName(form);
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use coc_record::{Clock, FixedClock, PageId, ValidationResult};
use coc_template::{pdf_file_name, GeneratedCoc, LogoAsset};
use serde::Serialize;
use std::str::FromStr;
use std::sync::Arc;
use wasm_bindgen::prelude::*;

// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Local time from the JavaScript `Date`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsClock;

impl Clock for JsClock {
    fn now(&self) -> NaiveDateTime {
        let date = js_sys::Date::new_0();
        NaiveDate::from_ymd_opt(
            date.get_full_year() as i32,
            date.get_month() + 1,
            date.get_date(),
        )
        .and_then(|day| {
            day.and_hms_milli_opt(
                date.get_hours(),
                date.get_minutes(),
                date.get_seconds(),
                date.get_milliseconds(),
            )
        })
        .unwrap_or_default()
    }
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(to_js_error)
}

fn warn_missing(scope: &str, result: &ValidationResult) {
    for path in &result.missing_fields {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "Missing required field ({scope}): {path}"
        )));
    }
}

/// Certificate generator
#[wasm_bindgen]
pub struct CocGenerator {
    inner: coc_template::CocGenerator,
}

#[wasm_bindgen]
impl CocGenerator {
    /// Create a generator without a logo
    #[wasm_bindgen(constructor)]
    pub fn new() -> CocGenerator {
        CocGenerator {
            inner: Self::build(LogoAsset::none()),
        }
    }

    fn build(logo: LogoAsset) -> coc_template::CocGenerator {
        coc_template::CocGenerator::new(Arc::new(logo)).with_clock(JsClock)
    }

    /// Load the letterhead logo
    ///
    /// @param data - PNG or JPEG bytes (Uint8Array)
    #[wasm_bindgen(js_name = loadLogo)]
    pub fn load_logo(&mut self, data: &[u8]) -> Result<(), JsValue> {
        let logo = LogoAsset::from_bytes(data);
        if logo.image().is_none() {
            return Err(JsValue::from_str("Failed to decode logo image"));
        }
        self.inner = Self::build(logo);
        Ok(())
    }

    /// Consolidate raw form input
    ///
    /// @param raw - Form data object
    /// @returns Canonical record object
    pub fn consolidate(&self, raw: JsValue) -> Result<JsValue, JsValue> {
        let raw: serde_json::Value = serde_wasm_bindgen::from_value(raw)?;
        to_js(&self.inner.consolidate(&raw))
    }

    /// Check the globally required fields
    ///
    /// @param raw - Form data object
    /// @returns `{ isValid, missingFields }`
    pub fn validate(&self, raw: JsValue) -> Result<JsValue, JsValue> {
        let raw: serde_json::Value = serde_wasm_bindgen::from_value(raw)?;
        to_js(&coc_record::validate(&self.inner.consolidate(&raw)))
    }

    /// Check the fields required by one page
    ///
    /// @param raw - Form data object
    /// @param page - "1" to "5" or "page1" to "page5"
    /// @returns `{ isValid, missingFields }`
    #[wasm_bindgen(js_name = validatePage)]
    pub fn validate_page(&self, raw: JsValue, page: &str) -> Result<JsValue, JsValue> {
        let page = PageId::from_str(page).map_err(to_js_error)?;
        let raw: serde_json::Value = serde_wasm_bindgen::from_value(raw)?;
        to_js(&coc_record::validate_page(
            &self.inner.consolidate(&raw),
            page,
        ))
    }

    fn run(&self, raw: JsValue) -> Result<GeneratedCoc, JsValue> {
        let raw: serde_json::Value = serde_wasm_bindgen::from_value(raw)?;
        let generated = self.inner.generate(&raw).map_err(to_js_error)?;

        warn_missing("application", &generated.validation);
        for (page, result) in &generated.page_validation {
            warn_missing(&page.to_string(), result);
        }
        Ok(generated)
    }

    /// Generate the certificate PDF
    ///
    /// Missing fields are reported as console warnings and do not fail
    /// generation.
    ///
    /// @param raw - Form data object
    /// @returns PDF bytes (Uint8Array)
    pub fn generate(&self, raw: JsValue) -> Result<Vec<u8>, JsValue> {
        Ok(self.run(raw)?.bytes)
    }

    /// Generate the certificate PDF together with its download name
    ///
    /// Both come from a single clock reading, so a generated application
    /// id matches the one embedded in the document.
    ///
    /// @param raw - Form data object
    /// @returns `{ bytes: Uint8Array, fileName: string }`
    #[wasm_bindgen(js_name = generateWithName)]
    pub fn generate_with_name(&self, raw: JsValue) -> Result<JsValue, JsValue> {
        let GeneratedCoc {
            bytes, file_name, ..
        } = self.run(raw)?;

        let result = js_sys::Object::new();
        js_sys::Reflect::set(
            &result,
            &JsValue::from_str("bytes"),
            &js_sys::Uint8Array::from(bytes.as_slice()),
        )?;
        js_sys::Reflect::set(
            &result,
            &JsValue::from_str("fileName"),
            &JsValue::from_str(&file_name),
        )?;
        Ok(result.into())
    }

    /// Suggested download name for the generated PDF
    ///
    /// Prefer `generateWithName` when the PDF is generated too; a separate
    /// call reads the clock again.
    ///
    /// @param raw - Form data object
    /// @returns e.g. "COC_Application_Maria_Santos_1724050800000.pdf"
    #[wasm_bindgen(js_name = fileName)]
    pub fn file_name(&self, raw: JsValue) -> Result<String, JsValue> {
        let raw: serde_json::Value = serde_wasm_bindgen::from_value(raw)?;
        let now = JsClock.now();
        let record = coc_record::consolidate(&raw, &FixedClock(now));
        Ok(pdf_file_name(&record, now))
    }
}

impl Default for CocGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn form() -> JsValue {
        serde_wasm_bindgen::to_value(&serde_json::json!({
            "firstName": "Maria",
            "lastName": "Santos",
            "applicationId": "APP-7"
        }))
        .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_file_name() {
        let generator = CocGenerator::new();
        assert_eq!(
            generator.file_name(form()).unwrap(),
            "COC_Application_Maria_Santos_APP-7.pdf"
        );
    }

    #[wasm_bindgen_test]
    fn test_generate_returns_pdf() {
        let bytes = CocGenerator::new().generate(form()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[wasm_bindgen_test]
    fn test_generate_with_name_pairs_bytes_and_name() {
        let result = CocGenerator::new().generate_with_name(form()).unwrap();

        let name = js_sys::Reflect::get(&result, &JsValue::from_str("fileName")).unwrap();
        assert_eq!(
            name.as_string().unwrap(),
            "COC_Application_Maria_Santos_APP-7.pdf"
        );

        let bytes = js_sys::Reflect::get(&result, &JsValue::from_str("bytes")).unwrap();
        let bytes = js_sys::Uint8Array::new(&bytes).to_vec();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[wasm_bindgen_test]
    fn test_file_name_without_id_uses_timestamp() {
        let raw = serde_wasm_bindgen::to_value(&serde_json::json!({
            "firstName": "Maria",
            "lastName": "Santos"
        }))
        .unwrap();
        let name = CocGenerator::new().file_name(raw).unwrap();

        let id = name
            .strip_prefix("COC_Application_Maria_Santos_")
            .and_then(|rest| rest.strip_suffix(".pdf"))
            .unwrap();
        assert!(id.parse::<i64>().unwrap() > 0, "{name}");
    }

    #[wasm_bindgen_test]
    fn test_validate_page_rejects_unknown_page() {
        assert!(CocGenerator::new().validate_page(form(), "page9").is_err());
    }

    #[wasm_bindgen_test]
    fn test_bad_logo_is_rejected() {
        let mut generator = CocGenerator::new();
        assert!(generator.load_logo(b"not an image").is_err());
    }
}
