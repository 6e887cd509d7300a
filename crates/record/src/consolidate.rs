//! Normalization of raw form input into a [`CanonicalRecord`]
//!
//! Each canonical leaf is filled from a fixed priority list of sources; the
//! first non-empty candidate wins and the final fallback is `""`. Chains are
//! section-specific: the barangay certificate, the tribal certificate and
//! the affidavit each default from personal info in their own order.

use crate::clock::Clock;
use crate::raw::{first_non_empty, RawInput};
use crate::record::{
    Affidavit, BarangayCertification, CanonicalRecord, Education, Genealogy, LandMatter, Metadata,
    Person, PersonalInfo, TribalCertification,
};
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Issuance year used when a section supplies none
///
/// Kept as a fixed literal; it is not derived from the current date.
pub const DEFAULT_ISSUANCE_YEAR: &str = "2024";

/// Application status used when the input carries none
pub const DEFAULT_STATUS: &str = "pending";

/// Province appended to derived residences and issuance places
pub const DEFAULT_PROVINCE: &str = "Sarangani Province";

/// Purpose words that make the land-matter section relevant
///
/// Matched against whole words; a trailing plural `s` is accepted.
const LAND_KEYWORDS: [&str; 4] = ["land", "homestead", "lot", "title"];

/// Two-word purpose phrase that also makes the land-matter section relevant
const LAND_PHRASE: [&str; 2] = ["ancestral", "domain"];

/// Accepted date-of-birth layouts, tried in order
const BIRTH_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%m/%d/%Y", "%B %d, %Y", "%b %d, %Y"];

/// Build the canonical record from raw input
///
/// Total over all JSON values; never fails. "Now" is read from the clock
/// exactly once.
pub fn consolidate<C: Clock>(raw: &Value, clock: &C) -> CanonicalRecord {
    let now = clock.now();
    let raw = RawInput::new(raw);

    let personal_info = personal_info(raw, now);
    let metadata = metadata(raw, now);
    let issuance = IssuanceDefaults::from_now(now);

    let record = CanonicalRecord {
        education: education(raw),
        land_matter: land_matter(raw, &metadata.purpose),
        barangay_certification: barangay_certification(raw, &personal_info, &metadata, &issuance),
        tribal_certification: tribal_certification(raw, &personal_info, &metadata, &issuance),
        affidavit: Affidavit::default(),
        genealogy: genealogy(raw, &personal_info),
        personal_info,
        metadata,
    };

    let affidavit = affidavit(raw, &record, &issuance);
    let record = CanonicalRecord { affidavit, ..record };

    log::debug!(
        "Consolidated record for '{}' (application id '{}')",
        record.personal_info.full_name,
        record.metadata.application_id
    );

    record
}

/// `"{barangay}, {city}, Sarangani Province"` from the non-empty parts
///
/// Empty when neither barangay nor city is known.
pub fn residence(barangay: &str, city: &str) -> String {
    let parts: Vec<&str> = [barangay, city]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();

    if parts.is_empty() {
        return String::new();
    }

    format!("{}, {}", parts.join(", "), DEFAULT_PROVINCE)
}

/// Whole years between a date of birth and `today`
///
/// `None` when the date is unparseable or in the future.
pub fn age_from_birth_date(date_of_birth: &str, today: NaiveDate) -> Option<u32> {
    let trimmed = date_of_birth.trim();
    let birth = BIRTH_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })?;

    today.years_since(birth)
}

/// Whether the purpose mentions a land transaction
pub fn is_land_related(purpose: &str) -> bool {
    let purpose = purpose.to_lowercase();
    let words: Vec<&str> = purpose
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let keyword = |word: &str| {
        let singular = word.strip_suffix('s').unwrap_or(word);
        LAND_KEYWORDS.contains(&word) || LAND_KEYWORDS.contains(&singular)
    };

    words.iter().any(|w| keyword(*w)) || words.windows(2).any(|pair| pair == LAND_PHRASE)
}

/// Day, month and year used when a section has no explicit issuance date
struct IssuanceDefaults {
    day: String,
    month: String,
    year: String,
}

impl IssuanceDefaults {
    fn from_now(now: NaiveDateTime) -> Self {
        Self {
            day: now.day().to_string(),
            month: now.format("%B").to_string(),
            year: DEFAULT_ISSUANCE_YEAR.to_string(),
        }
    }

    /// (day, month, year) for one page section
    fn resolve(&self, page: RawInput) -> (String, String, String) {
        (
            first_non_empty([page.text("issuanceDay"), self.day.clone()]),
            first_non_empty([page.text("issuanceMonth"), self.month.clone()]),
            first_non_empty([page.text("issuanceYear"), self.year.clone()]),
        )
    }
}

fn join_name(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn personal_info(raw: RawInput, now: NaiveDateTime) -> PersonalInfo {
    let first_name = raw.first_of(&["firstName", "givenName"]);
    let middle_name = raw.text("middleName");
    let last_name = raw.first_of(&["lastName", "surname"]);

    let full_name = first_non_empty([
        raw.text("name"),
        join_name(&[&first_name, &middle_name, &last_name]),
    ]);

    let date_of_birth = raw.first_of(&["dateOfBirth", "birthDate", "birthday"]);
    let age = first_non_empty([
        raw.text("age"),
        age_from_birth_date(&date_of_birth, now.date())
            .map(|years| years.to_string())
            .unwrap_or_default(),
    ]);

    let barangay = raw.text("barangay");
    let city = raw.first_of(&["city", "municipality"]);
    let address = first_non_empty([
        raw.first_of(&["address", "residenceLocation"]),
        residence(&barangay, &city),
    ]);

    let signature = first_non_empty([raw.text("applicantSignature"), full_name.clone()]);

    PersonalInfo {
        first_name,
        middle_name,
        last_name,
        full_name,
        date_of_birth,
        place_of_birth: raw.first_of(&["placeOfBirth", "birthPlace"]),
        age,
        sex: raw.first_of(&["sex", "gender"]),
        civil_status: raw.first_of(&["civilStatus", "maritalStatus"]),
        religion: raw.text("religion"),
        tribe: raw.first_of(&["tribe", "iccs", "iccGroup1"]),
        place_of_origin: raw.first_of(&["placeOfOrigin", "origin"]),
        barangay,
        city,
        province: raw.text("province"),
        address,
        contact_number: raw.first_of(&["contactNumber", "mobileNumber", "phone"]),
        signature,
    }
}

fn education(raw: RawInput) -> Education {
    Education {
        educational_attainment: raw.first_of(&[
            "educationalAttainment",
            "education",
            "highestEducation",
        ]),
        degree: raw.first_of(&["degree", "course"]),
    }
}

fn land_matter(raw: RawInput, purpose: &str) -> LandMatter {
    if !is_land_related(purpose) {
        return LandMatter::default();
    }

    LandMatter {
        homestead_number: raw.first_of(&["homesteadNumber", "homesteadNo"]),
        lot_number: raw.first_of(&["lotNumber", "lotNo"]),
        issuance_date: raw.first_of(&["landIssuanceDate", "issuanceDate"]),
        area: raw.first_of(&["landArea", "area"]),
        location: raw.first_of(&["landLocation", "lotLocation"]),
    }
}

fn barangay_certification(
    raw: RawInput,
    personal: &PersonalInfo,
    metadata: &Metadata,
    issuance: &IssuanceDefaults,
) -> BarangayCertification {
    let page = raw.page("page2");
    let (issuance_day, issuance_month, issuance_year) = issuance.resolve(page);

    BarangayCertification {
        applicant_name: first_non_empty([
            page.text("applicantName"),
            raw.first_of(&["applicantSignature", "name"]),
            personal.full_name.clone(),
        ]),
        age: first_non_empty([page.text("age"), personal.age.clone()]),
        civil_status: first_non_empty([page.text("civilStatus"), personal.civil_status.clone()]),
        iccs: first_non_empty([page.first_of(&["iccs", "tribe"]), personal.tribe.clone()]),
        residence_location: first_non_empty([
            page.text("residenceLocation"),
            raw.text("residenceLocation"),
            residence(&personal.barangay, &personal.city),
        ]),
        barangay_name: first_non_empty([page.text("barangayName"), personal.barangay.clone()]),
        municipality: first_non_empty([page.text("municipality"), personal.city.clone()]),
        purpose: first_non_empty([page.text("purpose"), metadata.purpose.clone()]),
        punong_barangay: first_non_empty([
            page.text("punongBarangay"),
            raw.text("punongBarangay"),
        ]),
        issuance_day,
        issuance_month,
        issuance_year,
    }
}

fn tribal_certification(
    raw: RawInput,
    personal: &PersonalInfo,
    metadata: &Metadata,
    issuance: &IssuanceDefaults,
) -> TribalCertification {
    let page = raw.page("page3");
    let (issuance_day, issuance_month, issuance_year) = issuance.resolve(page);

    let issuance_place = first_non_empty([
        page.text("issuancePlace"),
        if personal.city.is_empty() {
            String::new()
        } else {
            format!("{}, {}", personal.city, DEFAULT_PROVINCE)
        },
    ]);

    TribalCertification {
        applicant_name: first_non_empty([
            page.text("applicantName"),
            raw.first_of(&["applicantSignature", "name"]),
            personal.full_name.clone(),
        ]),
        icc_group1: first_non_empty([
            page.text("iccGroup1"),
            raw.first_of(&["iccGroup1", "fatherTribe", "iccs"]),
            personal.tribe.clone(),
        ]),
        icc_group2: first_non_empty([
            page.text("iccGroup2"),
            raw.first_of(&["iccGroup2", "motherTribe", "iccs"]),
            personal.tribe.clone(),
        ]),
        residence_location: first_non_empty([
            page.text("residenceLocation"),
            raw.text("residenceLocation"),
            residence(&personal.barangay, &personal.city),
        ]),
        purpose: first_non_empty([page.text("purpose"), metadata.purpose.clone()]),
        tribal_chieftain: first_non_empty([
            page.text("tribalChieftain"),
            raw.first_of(&["tribalChieftain", "tribalLeader"]),
        ]),
        issuance_place,
        issuance_day,
        issuance_month,
        issuance_year,
    }
}

fn affidavit(raw: RawInput, record: &CanonicalRecord, issuance: &IssuanceDefaults) -> Affidavit {
    let page = raw.page("page4");
    let personal = &record.personal_info;
    let (issuance_day, issuance_month, issuance_year) = issuance.resolve(page);

    let explicit = |key: &str| first_non_empty([page.text(key), raw.text(key)]);
    let affiant_address = |key: &str| first_non_empty([explicit(key), personal.address.clone()]);

    Affidavit {
        affiant1_name: explicit("affiant1Name"),
        affiant1_age: explicit("affiant1Age"),
        affiant1_address: affiant_address("affiant1Address"),
        affiant2_name: explicit("affiant2Name"),
        affiant2_age: explicit("affiant2Age"),
        affiant2_address: affiant_address("affiant2Address"),
        subject_name: first_non_empty([
            page.text("subjectName"),
            raw.first_of(&["subjectName", "applicantSignature", "name"]),
            personal.full_name.clone(),
        ]),
        subject_age: first_non_empty([page.text("subjectAge"), personal.age.clone()]),
        subject_tribe: first_non_empty([page.text("subjectTribe"), personal.tribe.clone()]),
        subject_residence: first_non_empty([
            page.text("subjectResidence"),
            personal.address.clone(),
        ]),
        subject_date_of_birth: first_non_empty([
            page.text("subjectDateOfBirth"),
            personal.date_of_birth.clone(),
        ]),
        subject_place_of_birth: first_non_empty([
            page.text("subjectPlaceOfBirth"),
            personal.place_of_birth.clone(),
        ]),
        father_name: explicit("fatherName"),
        mother_name: explicit("motherName"),
        issuance_place: first_non_empty([
            page.text("issuancePlace"),
            record.tribal_certification.issuance_place.clone(),
        ]),
        issuance_day,
        issuance_month,
        issuance_year,
    }
}

fn genealogy(raw: RawInput, personal: &PersonalInfo) -> Genealogy {
    let person = |slot: &str| Person {
        name: raw.text(&format!("{slot}Name")),
        tribe: raw.text(&format!("{slot}Tribe")),
        address: raw.text(&format!("{slot}Address")),
    };

    Genealogy {
        applicant: Person {
            name: personal.full_name.clone(),
            tribe: personal.tribe.clone(),
            address: personal.address.clone(),
        },
        father: person("father"),
        mother: person("mother"),
        paternal_grandfather: person("paternalGrandfather"),
        paternal_grandmother: person("paternalGrandmother"),
        maternal_grandfather: person("maternalGrandfather"),
        maternal_grandmother: person("maternalGrandmother"),
    }
}

fn metadata(raw: RawInput, now: NaiveDateTime) -> Metadata {
    Metadata {
        application_date: now.format("%Y-%m-%dT%H:%M:%S").to_string(),
        purpose: first_non_empty([
            raw.text("purpose"),
            raw.page("page2").text("purpose"),
            raw.page("page3").text("purpose"),
        ]),
        application_id: raw.first_of(&["applicationId", "id"]),
        status: first_non_empty([raw.text("status"), DEFAULT_STATUS.to_string()]),
    }
}
