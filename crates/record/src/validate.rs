//! Required-field checks
//!
//! Validation is advisory: it reports which required leaves are empty but
//! never blocks rendering. Global and per-page requirements live in one
//! table so the two views cannot drift apart.

use crate::field::FieldId;
use crate::record::CanonicalRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Page number was not one of 1..=5
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid page id: {0} (expected 1-5)")]
pub struct PageIdError(pub String);

/// One of the five pages of the certificate document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    /// Application form
    Page1,
    /// Barangay certification
    Page2,
    /// Certification of tribal membership
    Page3,
    /// Joint affidavit
    Page4,
    /// Genealogical tree
    Page5,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Page1,
        PageId::Page2,
        PageId::Page3,
        PageId::Page4,
        PageId::Page5,
    ];

    /// Page number (1-indexed)
    pub fn number(self) -> u8 {
        match self {
            PageId::Page1 => 1,
            PageId::Page2 => 2,
            PageId::Page3 => 3,
            PageId::Page4 => 4,
            PageId::Page5 => 5,
        }
    }
}

impl TryFrom<u8> for PageId {
    type Error = PageIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PageId::Page1),
            2 => Ok(PageId::Page2),
            3 => Ok(PageId::Page3),
            4 => Ok(PageId::Page4),
            5 => Ok(PageId::Page5),
            _ => Err(PageIdError(value.to_string())),
        }
    }
}

impl FromStr for PageId {
    type Err = PageIdError;

    /// Accepts `"3"` as well as `"page3"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("page").unwrap_or(trimmed);
        digits
            .parse::<u8>()
            .ok()
            .and_then(|n| PageId::try_from(n).ok())
            .ok_or_else(|| PageIdError(s.to_string()))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page{}", self.number())
    }
}

/// A required field: whether it is globally required, and on which pages
struct Requirement {
    field: FieldId,
    global: bool,
    pages: &'static [PageId],
}

const fn required(field: FieldId, global: bool, pages: &'static [PageId]) -> Requirement {
    Requirement {
        field,
        global,
        pages,
    }
}

/// Every requiredness rule, in reporting order
const REQUIREMENTS: &[Requirement] = &[
    required(FieldId::FullName, true, &[PageId::Page1]),
    required(FieldId::DateOfBirth, true, &[PageId::Page1]),
    required(FieldId::PlaceOfBirth, true, &[]),
    required(FieldId::CivilStatus, true, &[]),
    required(FieldId::Tribe, true, &[PageId::Page1]),
    required(FieldId::Address, true, &[]),
    required(FieldId::BarangayApplicantName, false, &[PageId::Page2]),
    required(FieldId::BarangayResidenceLocation, false, &[PageId::Page2]),
    required(FieldId::TribalApplicantName, false, &[PageId::Page3]),
    required(FieldId::IccGroup1, false, &[PageId::Page3]),
    required(FieldId::SubjectName, false, &[PageId::Page4]),
    required(FieldId::Affiant1Name, false, &[PageId::Page4]),
    required(FieldId::Affiant2Name, false, &[PageId::Page4]),
    required(FieldId::ApplicantName, false, &[PageId::Page5]),
    required(FieldId::FatherName, true, &[PageId::Page5]),
    required(FieldId::MotherName, true, &[PageId::Page5]),
];

/// Outcome of a validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Dot-paths of the required fields that are empty or whitespace-only
    pub missing_fields: Vec<String>,
}

impl ValidationResult {
    fn from_missing(missing_fields: Vec<String>) -> Self {
        Self {
            is_valid: missing_fields.is_empty(),
            missing_fields,
        }
    }
}

/// Globally required fields
pub fn required_fields() -> impl Iterator<Item = FieldId> {
    REQUIREMENTS.iter().filter(|r| r.global).map(|r| r.field)
}

/// Fields required to complete one page
pub fn page_required_fields(page: PageId) -> impl Iterator<Item = FieldId> {
    REQUIREMENTS
        .iter()
        .filter(move |r| r.pages.contains(&page))
        .map(|r| r.field)
}

fn missing(record: &CanonicalRecord, fields: impl Iterator<Item = FieldId>) -> Vec<String> {
    fields
        .filter(|f| f.value(record).trim().is_empty())
        .map(|f| f.path().to_string())
        .collect()
}

/// Check the globally required fields
pub fn validate(record: &CanonicalRecord) -> ValidationResult {
    ValidationResult::from_missing(missing(record, required_fields()))
}

/// Check the fields required by a single page
pub fn validate_page(record: &CanonicalRecord, page: PageId) -> ValidationResult {
    ValidationResult::from_missing(missing(record, page_required_fields(page)))
}
