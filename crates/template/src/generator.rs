//! End-to-end certificate generation
//!
//! Raw form input goes through consolidation, advisory validation, rendering
//! and serialization. Validation never blocks generation; missing fields are
//! logged and reported alongside the PDF.

use crate::logo::LogoAsset;
use crate::renderer::CocRenderer;
use crate::Result;
use chrono::NaiveDateTime;
use coc_record::{
    consolidate, validate, validate_page, CanonicalRecord, Clock, FixedClock, PageId,
    SystemClock, ValidationResult,
};
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Everything produced by one generation
#[derive(Debug, Clone)]
pub struct GeneratedCoc {
    pub record: CanonicalRecord,
    pub validation: ValidationResult,
    pub page_validation: Vec<(PageId, ValidationResult)>,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl GeneratedCoc {
    /// Whether every global and per-page requirement was met
    pub fn is_complete(&self) -> bool {
        self.validation.is_valid && self.page_validation.iter().all(|(_, v)| v.is_valid)
    }
}

/// Certificate generator with an injected logo and clock
pub struct CocGenerator {
    logo: Arc<LogoAsset>,
    clock: Box<dyn Clock + Send + Sync>,
}

impl CocGenerator {
    /// Generator using the wall clock
    pub fn new(logo: Arc<LogoAsset>) -> Self {
        Self {
            logo,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the source of "now"
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn logo(&self) -> &LogoAsset {
        &self.logo
    }

    /// Consolidate raw input using this generator's clock
    pub fn consolidate(&self, raw: &Value) -> CanonicalRecord {
        consolidate(raw, &FixedClock(self.clock.now()))
    }

    /// Run the full pipeline on one raw submission
    pub fn generate(&self, raw: &Value) -> Result<GeneratedCoc> {
        let now = self.clock.now();
        let record = consolidate(raw, &FixedClock(now));
        log::debug!("Consolidated record for {:?}", record.personal_info.full_name);

        let validation = validate(&record);
        for path in &validation.missing_fields {
            log::warn!("Missing required field: {path}");
        }

        let page_validation: Vec<(PageId, ValidationResult)> = PageId::ALL
            .iter()
            .map(|page| (*page, validate_page(&record, *page)))
            .collect();
        for (page, result) in &page_validation {
            for path in &result.missing_fields {
                log::warn!("Missing field for {page}: {path}");
            }
        }

        let bytes = CocRenderer::new(&self.logo).render(&record).to_pdf_bytes()?;
        let file_name = pdf_file_name(&record, now);
        log::info!("Generated {} ({} bytes)", file_name, bytes.len());

        Ok(GeneratedCoc {
            record,
            validation,
            page_validation,
            file_name,
            bytes,
        })
    }

    /// Run the pipeline on a submission still in its JSON text form
    pub fn generate_from_str(&self, json: &str) -> Result<GeneratedCoc> {
        let raw: Value = serde_json::from_str(json)?;
        self.generate(&raw)
    }

    /// Generate and write the PDF into `dir` under its conventional name
    pub fn generate_to_dir(&self, raw: &Value, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let generated = self.generate(raw)?;
        let path = dir.as_ref().join(&generated.file_name);
        std::fs::write(&path, &generated.bytes)?;
        Ok(path)
    }
}

/// Conventional download name of a certificate
///
/// `COC_Application_<name>_<id>.pdf`, where whitespace runs in the name
/// become `_` and a missing application id is replaced by the epoch
/// milliseconds of `now`.
pub fn pdf_file_name(record: &CanonicalRecord, now: NaiveDateTime) -> String {
    let name = record
        .personal_info
        .full_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .replace(['/', '\\'], "");
    let name = if name.is_empty() { "Applicant".to_string() } else { name };

    let id = record.metadata.application_id.trim();
    let id = if id.is_empty() {
        now.and_utc().timestamp_millis().to_string()
    } else {
        id.to_string()
    };

    format!("COC_Application_{name}_{id}.pdf")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 8, 19)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_file_name_with_id() {
        let mut record = CanonicalRecord::default();
        record.personal_info.full_name = "Maria  dela\tCruz".to_string();
        record.metadata.application_id = "APP-001".to_string();

        assert_eq!(
            pdf_file_name(&record, now()),
            "COC_Application_Maria_dela_Cruz_APP-001.pdf"
        );
    }

    #[test]
    fn test_file_name_fallbacks() {
        let record = CanonicalRecord::default();
        let millis = now().and_utc().timestamp_millis();

        assert_eq!(
            pdf_file_name(&record, now()),
            format!("COC_Application_Applicant_{millis}.pdf")
        );
    }

    #[test]
    fn test_file_name_strips_separators() {
        let mut record = CanonicalRecord::default();
        record.personal_info.full_name = "A/B C\\D".to_string();
        record.metadata.application_id = "7".to_string();

        assert_eq!(pdf_file_name(&record, now()), "COC_Application_AB_CD_7.pdf");
    }

    #[test]
    fn test_generate_reports_validation() {
        let generator =
            CocGenerator::new(Arc::new(LogoAsset::none())).with_clock(FixedClock(now()));
        let generated = generator
            .generate(&json!({"firstName": "Maria", "lastName": "Santos"}))
            .unwrap();

        assert_eq!(generated.record.personal_info.full_name, "Maria Santos");
        assert!(!generated.validation.is_valid);
        assert!(!generated.is_complete());
        assert_eq!(generated.page_validation.len(), 5);
        assert!(generated.bytes.starts_with(b"%PDF-"));
        assert!(generated.file_name.starts_with("COC_Application_Maria_Santos_"));
    }

    #[test]
    fn test_consolidate_uses_clock() {
        let generator =
            CocGenerator::new(Arc::new(LogoAsset::none())).with_clock(FixedClock(now()));
        let record = generator.consolidate(&json!({}));

        assert_eq!(record.barangay_certification.issuance_day, "19");
        assert_eq!(record.barangay_certification.issuance_month, "August");
    }
}
