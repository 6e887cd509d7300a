//! Certificate-of-Confirmation application records
//!
//! This crate provides:
//! - [`consolidate`]: raw, loosely keyed form input into a [`CanonicalRecord`]
//! - [`FieldId`]: typed identifiers for every canonical leaf, with dot-path
//!   lookup
//! - [`validate`] / [`validate_page`]: advisory required-field checks
//!
//! # Example
//!
//! ```
//! use coc_record::{consolidate, validate, SystemClock};
//! use serde_json::json;
//!
//! let raw = json!({"firstName": "Maria", "lastName": "Santos"});
//! let record = consolidate(&raw, &SystemClock);
//! assert_eq!(record.personal_info.full_name, "Maria Santos");
//! assert!(!validate(&record).is_valid);
//! ```

mod clock;
mod consolidate;
mod field;
mod raw;
mod record;
mod validate;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consolidate::{
    age_from_birth_date, consolidate, is_land_related, residence, DEFAULT_ISSUANCE_YEAR,
    DEFAULT_PROVINCE, DEFAULT_STATUS,
};
pub use field::{get_data_value, FieldId, FieldPathError, Lookup};
pub use raw::RawInput;
pub use record::{
    Affidavit, BarangayCertification, CanonicalRecord, Education, Genealogy, LandMatter, Metadata,
    Person, PersonalInfo, TribalCertification,
};
pub use validate::{
    page_required_fields, required_fields, validate, validate_page, PageId, PageIdError,
    ValidationResult,
};
