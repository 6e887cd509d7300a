//! Typed field identifiers and dot-path lookup
//!
//! Every leaf of [`CanonicalRecord`] has a [`FieldId`]. Mapping tables and
//! the validator refer to fields by id so a misspelt path cannot compile;
//! string dot-paths are still accepted at the edges through [`FromStr`].

use crate::record::CanonicalRecord;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Dot-path did not name a leaf of the record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown field path: {0}")]
pub struct FieldPathError(pub String);

macro_rules! field_ids {
    ($($variant:ident => $path:literal => $($field:ident).+;)+) => {
        /// Identifier of one canonical leaf
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum FieldId {
            $($variant,)+
        }

        impl FieldId {
            /// Every leaf, in record order
            pub const ALL: &'static [FieldId] = &[$(FieldId::$variant,)+];

            /// Dot-path of the leaf (e.g. `personalInfo.fullName`)
            pub const fn path(self) -> &'static str {
                match self {
                    $(FieldId::$variant => $path,)+
                }
            }

            /// Value of the leaf in a record
            pub fn value(self, record: &CanonicalRecord) -> &str {
                match self {
                    $(FieldId::$variant => record.$($field).+.as_str(),)+
                }
            }
        }

        impl FromStr for FieldId {
            type Err = FieldPathError;

            fn from_str(path: &str) -> Result<Self, Self::Err> {
                match path {
                    $($path => Ok(FieldId::$variant),)+
                    _ => Err(FieldPathError(path.to_string())),
                }
            }
        }
    };
}

field_ids! {
    FirstName => "personalInfo.firstName" => personal_info.first_name;
    MiddleName => "personalInfo.middleName" => personal_info.middle_name;
    LastName => "personalInfo.lastName" => personal_info.last_name;
    FullName => "personalInfo.fullName" => personal_info.full_name;
    DateOfBirth => "personalInfo.dateOfBirth" => personal_info.date_of_birth;
    PlaceOfBirth => "personalInfo.placeOfBirth" => personal_info.place_of_birth;
    Age => "personalInfo.age" => personal_info.age;
    Sex => "personalInfo.sex" => personal_info.sex;
    CivilStatus => "personalInfo.civilStatus" => personal_info.civil_status;
    Religion => "personalInfo.religion" => personal_info.religion;
    Tribe => "personalInfo.tribe" => personal_info.tribe;
    PlaceOfOrigin => "personalInfo.placeOfOrigin" => personal_info.place_of_origin;
    Barangay => "personalInfo.barangay" => personal_info.barangay;
    City => "personalInfo.city" => personal_info.city;
    Province => "personalInfo.province" => personal_info.province;
    Address => "personalInfo.address" => personal_info.address;
    ContactNumber => "personalInfo.contactNumber" => personal_info.contact_number;
    Signature => "personalInfo.signature" => personal_info.signature;

    EducationalAttainment => "education.educationalAttainment" => education.educational_attainment;
    Degree => "education.degree" => education.degree;

    HomesteadNumber => "landMatter.homesteadNumber" => land_matter.homestead_number;
    LotNumber => "landMatter.lotNumber" => land_matter.lot_number;
    LandIssuanceDate => "landMatter.issuanceDate" => land_matter.issuance_date;
    LandArea => "landMatter.area" => land_matter.area;
    LandLocation => "landMatter.location" => land_matter.location;

    BarangayApplicantName => "barangayCertification.applicantName" => barangay_certification.applicant_name;
    BarangayAge => "barangayCertification.age" => barangay_certification.age;
    BarangayCivilStatus => "barangayCertification.civilStatus" => barangay_certification.civil_status;
    BarangayIccs => "barangayCertification.iccs" => barangay_certification.iccs;
    BarangayResidenceLocation => "barangayCertification.residenceLocation" => barangay_certification.residence_location;
    BarangayName => "barangayCertification.barangayName" => barangay_certification.barangay_name;
    BarangayMunicipality => "barangayCertification.municipality" => barangay_certification.municipality;
    BarangayPurpose => "barangayCertification.purpose" => barangay_certification.purpose;
    PunongBarangay => "barangayCertification.punongBarangay" => barangay_certification.punong_barangay;
    BarangayIssuanceDay => "barangayCertification.issuanceDay" => barangay_certification.issuance_day;
    BarangayIssuanceMonth => "barangayCertification.issuanceMonth" => barangay_certification.issuance_month;
    BarangayIssuanceYear => "barangayCertification.issuanceYear" => barangay_certification.issuance_year;

    TribalApplicantName => "tribalCertification.applicantName" => tribal_certification.applicant_name;
    IccGroup1 => "tribalCertification.iccGroup1" => tribal_certification.icc_group1;
    IccGroup2 => "tribalCertification.iccGroup2" => tribal_certification.icc_group2;
    TribalResidenceLocation => "tribalCertification.residenceLocation" => tribal_certification.residence_location;
    TribalPurpose => "tribalCertification.purpose" => tribal_certification.purpose;
    TribalChieftain => "tribalCertification.tribalChieftain" => tribal_certification.tribal_chieftain;
    TribalIssuancePlace => "tribalCertification.issuancePlace" => tribal_certification.issuance_place;
    TribalIssuanceDay => "tribalCertification.issuanceDay" => tribal_certification.issuance_day;
    TribalIssuanceMonth => "tribalCertification.issuanceMonth" => tribal_certification.issuance_month;
    TribalIssuanceYear => "tribalCertification.issuanceYear" => tribal_certification.issuance_year;

    Affiant1Name => "affidavit.affiant1Name" => affidavit.affiant1_name;
    Affiant1Age => "affidavit.affiant1Age" => affidavit.affiant1_age;
    Affiant1Address => "affidavit.affiant1Address" => affidavit.affiant1_address;
    Affiant2Name => "affidavit.affiant2Name" => affidavit.affiant2_name;
    Affiant2Age => "affidavit.affiant2Age" => affidavit.affiant2_age;
    Affiant2Address => "affidavit.affiant2Address" => affidavit.affiant2_address;
    SubjectName => "affidavit.subjectName" => affidavit.subject_name;
    SubjectAge => "affidavit.subjectAge" => affidavit.subject_age;
    SubjectTribe => "affidavit.subjectTribe" => affidavit.subject_tribe;
    SubjectResidence => "affidavit.subjectResidence" => affidavit.subject_residence;
    SubjectDateOfBirth => "affidavit.subjectDateOfBirth" => affidavit.subject_date_of_birth;
    SubjectPlaceOfBirth => "affidavit.subjectPlaceOfBirth" => affidavit.subject_place_of_birth;
    AffidavitFatherName => "affidavit.fatherName" => affidavit.father_name;
    AffidavitMotherName => "affidavit.motherName" => affidavit.mother_name;
    AffidavitIssuancePlace => "affidavit.issuancePlace" => affidavit.issuance_place;
    AffidavitIssuanceDay => "affidavit.issuanceDay" => affidavit.issuance_day;
    AffidavitIssuanceMonth => "affidavit.issuanceMonth" => affidavit.issuance_month;
    AffidavitIssuanceYear => "affidavit.issuanceYear" => affidavit.issuance_year;

    ApplicantName => "genealogy.applicant.name" => genealogy.applicant.name;
    ApplicantTribe => "genealogy.applicant.tribe" => genealogy.applicant.tribe;
    ApplicantAddress => "genealogy.applicant.address" => genealogy.applicant.address;
    FatherName => "genealogy.father.name" => genealogy.father.name;
    FatherTribe => "genealogy.father.tribe" => genealogy.father.tribe;
    FatherAddress => "genealogy.father.address" => genealogy.father.address;
    MotherName => "genealogy.mother.name" => genealogy.mother.name;
    MotherTribe => "genealogy.mother.tribe" => genealogy.mother.tribe;
    MotherAddress => "genealogy.mother.address" => genealogy.mother.address;
    PaternalGrandfatherName => "genealogy.paternalGrandfather.name" => genealogy.paternal_grandfather.name;
    PaternalGrandfatherTribe => "genealogy.paternalGrandfather.tribe" => genealogy.paternal_grandfather.tribe;
    PaternalGrandfatherAddress => "genealogy.paternalGrandfather.address" => genealogy.paternal_grandfather.address;
    PaternalGrandmotherName => "genealogy.paternalGrandmother.name" => genealogy.paternal_grandmother.name;
    PaternalGrandmotherTribe => "genealogy.paternalGrandmother.tribe" => genealogy.paternal_grandmother.tribe;
    PaternalGrandmotherAddress => "genealogy.paternalGrandmother.address" => genealogy.paternal_grandmother.address;
    MaternalGrandfatherName => "genealogy.maternalGrandfather.name" => genealogy.maternal_grandfather.name;
    MaternalGrandfatherTribe => "genealogy.maternalGrandfather.tribe" => genealogy.maternal_grandfather.tribe;
    MaternalGrandfatherAddress => "genealogy.maternalGrandfather.address" => genealogy.maternal_grandfather.address;
    MaternalGrandmotherName => "genealogy.maternalGrandmother.name" => genealogy.maternal_grandmother.name;
    MaternalGrandmotherTribe => "genealogy.maternalGrandmother.tribe" => genealogy.maternal_grandmother.tribe;
    MaternalGrandmotherAddress => "genealogy.maternalGrandmother.address" => genealogy.maternal_grandmother.address;

    ApplicationDate => "metadata.applicationDate" => metadata.application_date;
    MetadataPurpose => "metadata.purpose" => metadata.purpose;
    ApplicationId => "metadata.applicationId" => metadata.application_id;
    Status => "metadata.status" => metadata.status;
}

impl FieldId {
    /// Whether the value is a date to be reformatted for display
    ///
    /// Matches a case-sensitive `Date` in the path, so
    /// `personalInfo.dateOfBirth` is drawn verbatim while
    /// `affidavit.subjectDateOfBirth` is reformatted.
    pub fn is_date(self) -> bool {
        self.path().contains("Date")
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of a dot-path lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    /// The leaf holds a non-empty value
    Value(&'a str),
    /// The leaf exists but is empty
    Empty,
    /// The path names no leaf
    UnknownPath,
}

impl<'a> Lookup<'a> {
    /// The value, or `""` for empty and unknown paths
    pub fn as_str(self) -> &'a str {
        match self {
            Lookup::Value(v) => v,
            Lookup::Empty | Lookup::UnknownPath => "",
        }
    }
}

impl CanonicalRecord {
    /// Value of a leaf by id
    pub fn get(&self, field: FieldId) -> &str {
        field.value(self)
    }

    /// Resolve a dot-path
    pub fn lookup(&self, path: &str) -> Lookup<'_> {
        match path.parse::<FieldId>() {
            Ok(field) => match field.value(self) {
                "" => Lookup::Empty,
                value => Lookup::Value(value),
            },
            Err(_) => Lookup::UnknownPath,
        }
    }
}

/// Value at a dot-path as an owned string; `""` for unknown paths
pub fn get_data_value(record: &CanonicalRecord, path: &str) -> String {
    record.lookup(path).as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    /// Collect every string leaf path of a JSON value
    fn leaf_paths(value: &serde_json::Value, prefix: &str, out: &mut BTreeSet<String>) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, child) in map {
                    let path = if prefix.is_empty() {
                        key.clone()
                    } else {
                        format!("{prefix}.{key}")
                    };
                    leaf_paths(child, &path, out);
                }
            }
            _ => {
                out.insert(prefix.to_string());
            }
        }
    }

    #[test]
    fn test_ids_cover_every_leaf_exactly_once() {
        let value = serde_json::to_value(CanonicalRecord::default()).unwrap();
        let mut expected = BTreeSet::new();
        leaf_paths(&value, "", &mut expected);

        let ids: BTreeSet<String> = FieldId::ALL.iter().map(|f| f.path().to_string()).collect();

        assert_eq!(ids.len(), FieldId::ALL.len());
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_parse_roundtrip() {
        for field in FieldId::ALL {
            assert_eq!(field.path().parse::<FieldId>(), Ok(*field));
            assert_eq!(field.to_string(), field.path());
        }
    }

    #[test]
    fn test_value_reads_the_right_leaf() {
        let mut record = CanonicalRecord::default();
        record.tribal_certification.icc_group2 = "Manobo".to_string();
        record.genealogy.maternal_grandfather.address = "Glan".to_string();

        assert_eq!(FieldId::IccGroup2.value(&record), "Manobo");
        assert_eq!(record.get(FieldId::MaternalGrandfatherAddress), "Glan");
        assert_eq!(FieldId::IccGroup1.value(&record), "");
    }

    #[test]
    fn test_lookup_variants() {
        let mut record = CanonicalRecord::default();
        record.personal_info.full_name = "Maria Santos".to_string();

        assert_eq!(
            record.lookup("personalInfo.fullName"),
            Lookup::Value("Maria Santos")
        );
        assert_eq!(record.lookup("personalInfo.religion"), Lookup::Empty);
        assert_eq!(record.lookup("nonexistent.deep.path"), Lookup::UnknownPath);
        assert_eq!(record.lookup("personalInfo"), Lookup::UnknownPath);
        assert_eq!(record.lookup(""), Lookup::UnknownPath);
    }

    #[test]
    fn test_get_data_value_unknown_is_empty() {
        let record = CanonicalRecord::default();
        assert_eq!(get_data_value(&record, "nonexistent.deep.path"), "");
        assert_eq!(get_data_value(&record, "genealogy.father"), "");
    }

    #[test]
    fn test_is_date_is_case_sensitive() {
        assert!(!FieldId::DateOfBirth.is_date());
        assert!(FieldId::SubjectDateOfBirth.is_date());
        assert!(FieldId::LandIssuanceDate.is_date());
        assert!(FieldId::ApplicationDate.is_date());
        assert!(!FieldId::FullName.is_date());
    }

    #[test]
    fn test_unknown_path_error_message() {
        let err = "personalInfo.nickname".parse::<FieldId>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown field path: personalInfo.nickname");
    }
}
