//! Canonical record types
//!
//! Every leaf is a `String`; a field with no data is the empty string,
//! never absent. Serde names are camelCase so dot-paths follow the JSON
//! shape (`personalInfo.fullName`, `genealogy.father.name`).

use serde::{Deserialize, Serialize};

/// The normalized application record produced by consolidation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalRecord {
    pub personal_info: PersonalInfo,
    pub education: Education,
    pub land_matter: LandMatter,
    pub barangay_certification: BarangayCertification,
    pub tribal_certification: TribalCertification,
    pub affidavit: Affidavit,
    pub genealogy: Genealogy,
    pub metadata: Metadata,
}

/// Applicant identity and contact data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub full_name: String,
    pub date_of_birth: String,
    pub place_of_birth: String,
    pub age: String,
    pub sex: String,
    pub civil_status: String,
    pub religion: String,
    pub tribe: String,
    pub place_of_origin: String,
    pub barangay: String,
    pub city: String,
    pub province: String,
    pub address: String,
    pub contact_number: String,
    pub signature: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub educational_attainment: String,
    pub degree: String,
}

/// Land details, filled only for land-related purposes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandMatter {
    pub homestead_number: String,
    pub lot_number: String,
    pub issuance_date: String,
    pub area: String,
    pub location: String,
}

/// Page 2: certification issued by the Punong Barangay
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarangayCertification {
    pub applicant_name: String,
    pub age: String,
    pub civil_status: String,
    pub iccs: String,
    pub residence_location: String,
    pub barangay_name: String,
    pub municipality: String,
    pub purpose: String,
    pub punong_barangay: String,
    pub issuance_day: String,
    pub issuance_month: String,
    pub issuance_year: String,
}

/// Page 3: certification of tribal membership
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TribalCertification {
    pub applicant_name: String,
    pub icc_group1: String,
    pub icc_group2: String,
    pub residence_location: String,
    pub purpose: String,
    pub tribal_chieftain: String,
    pub issuance_place: String,
    pub issuance_day: String,
    pub issuance_month: String,
    pub issuance_year: String,
}

/// Page 4: joint affidavit of two disinterested persons
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Affidavit {
    pub affiant1_name: String,
    pub affiant1_age: String,
    pub affiant1_address: String,
    pub affiant2_name: String,
    pub affiant2_age: String,
    pub affiant2_address: String,
    pub subject_name: String,
    pub subject_age: String,
    pub subject_tribe: String,
    pub subject_residence: String,
    pub subject_date_of_birth: String,
    pub subject_place_of_birth: String,
    pub father_name: String,
    pub mother_name: String,
    pub issuance_place: String,
    pub issuance_day: String,
    pub issuance_month: String,
    pub issuance_year: String,
}

/// One box of the genealogical tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub tribe: String,
    pub address: String,
}

/// Page 5: three generations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genealogy {
    pub applicant: Person,
    pub father: Person,
    pub mother: Person,
    pub paternal_grandfather: Person,
    pub paternal_grandmother: Person,
    pub maternal_grandfather: Person,
    pub maternal_grandmother: Person,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub application_date: String,
    pub purpose: String,
    pub application_id: String,
    pub status: String,
}
