//! Field mapping tables
//!
//! One static table per page. Each entry places a canonical field (or the
//! letterhead logo) at a fixed position. Coordinates are millimetres from
//! the top-left corner of a US Letter page; `y` is the text baseline.

use coc_record::{FieldId, PageId};
use pdf_core::{Align, FontStyle, FontWeight, StandardFont};

/// Typeface variant for mapped and static text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl TextStyle {
    pub fn weight(self) -> FontWeight {
        match self {
            TextStyle::Bold | TextStyle::BoldItalic => FontWeight::Bold,
            TextStyle::Regular | TextStyle::Italic => FontWeight::Regular,
        }
    }

    pub fn font_style(self) -> FontStyle {
        match self {
            TextStyle::Italic | TextStyle::BoldItalic => FontStyle::Italic,
            TextStyle::Regular | TextStyle::Bold => FontStyle::Normal,
        }
    }

    /// Helvetica face used to draw and measure this style
    pub fn font(self) -> StandardFont {
        StandardFont::from_variant(self.weight(), self.font_style())
    }
}

/// A canonical field drawn as text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextField {
    pub field: FieldId,
    pub x: f64,
    pub y: f64,
    /// Font size in points
    pub font_size: f32,
    /// Wrap width in millimetres; `None` draws a single line
    pub max_width: Option<f64>,
    /// Alignment relative to `x`
    pub align: Align,
    pub style: TextStyle,
}

/// Where the letterhead logo goes on a page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogoPlacement {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One entry of a page table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldMapping {
    Text(TextField),
    Logo(LogoPlacement),
}

impl FieldMapping {
    /// Wrap the text to `max_width` millimetres
    pub const fn wrap(self, max_width: f64) -> Self {
        match self {
            FieldMapping::Text(mut field) => {
                field.max_width = Some(max_width);
                FieldMapping::Text(field)
            }
            other => other,
        }
    }

    /// Center the text on `x`
    pub const fn center(self) -> Self {
        match self {
            FieldMapping::Text(mut field) => {
                field.align = Align::Center;
                FieldMapping::Text(field)
            }
            other => other,
        }
    }

    pub const fn bold(self) -> Self {
        match self {
            FieldMapping::Text(mut field) => {
                field.style = TextStyle::Bold;
                FieldMapping::Text(field)
            }
            other => other,
        }
    }

    /// The text field, if this entry is one
    pub fn as_text(&self) -> Option<&TextField> {
        match self {
            FieldMapping::Text(field) => Some(field),
            FieldMapping::Logo(_) => None,
        }
    }
}

/// Left-aligned, regular, single-line text field
pub const fn field(field: FieldId, x: f64, y: f64, font_size: f32) -> FieldMapping {
    FieldMapping::Text(TextField {
        field,
        x,
        y,
        font_size,
        max_width: None,
        align: Align::Left,
        style: TextStyle::Regular,
    })
}

/// Letterhead logo position, shared by every page
pub const LETTERHEAD_LOGO: LogoPlacement = LogoPlacement {
    x: 20.0,
    y: 10.0,
    width: 22.0,
    height: 22.0,
};

/// Table of `(identifier, mapping)` entries for one page
pub type PageMapping = &'static [(&'static str, FieldMapping)];

/// Application form
pub const PAGE_1: PageMapping = &[
    ("logo", FieldMapping::Logo(LETTERHEAD_LOGO)),
    // I. Personal information
    ("fullName", field(FieldId::FullName, 46.0, 63.0, 10.0).bold().wrap(148.0)),
    ("dateOfBirth", field(FieldId::DateOfBirth, 46.0, 71.0, 10.0).wrap(53.0)),
    ("placeOfBirth", field(FieldId::PlaceOfBirth, 131.0, 71.0, 10.0).wrap(63.0)),
    ("age", field(FieldId::Age, 46.0, 79.0, 10.0).wrap(13.0)),
    ("sex", field(FieldId::Sex, 75.0, 79.0, 10.0).wrap(24.0)),
    ("civilStatus", field(FieldId::CivilStatus, 131.0, 79.0, 10.0).wrap(63.0)),
    ("religion", field(FieldId::Religion, 46.0, 87.0, 10.0).wrap(53.0)),
    ("tribe", field(FieldId::Tribe, 131.0, 87.0, 10.0).wrap(63.0)),
    ("placeOfOrigin", field(FieldId::PlaceOfOrigin, 46.0, 95.0, 10.0).wrap(53.0)),
    ("contactNumber", field(FieldId::ContactNumber, 131.0, 95.0, 10.0).wrap(63.0)),
    ("barangay", field(FieldId::Barangay, 46.0, 103.0, 10.0).wrap(53.0)),
    ("city", field(FieldId::City, 132.0, 103.0, 10.0).wrap(62.0)),
    ("province", field(FieldId::Province, 46.0, 111.0, 10.0).wrap(53.0)),
    ("address", field(FieldId::Address, 46.0, 119.0, 10.0).wrap(148.0)),
    // II. Education
    ("educationalAttainment", field(FieldId::EducationalAttainment, 51.0, 139.0, 10.0).wrap(58.0)),
    ("degree", field(FieldId::Degree, 138.0, 139.0, 10.0).wrap(56.0)),
    // III. Purpose
    ("purpose", field(FieldId::MetadataPurpose, 21.0, 159.0, 10.0).wrap(173.0)),
    // IV. Land matter
    ("homesteadNumber", field(FieldId::HomesteadNumber, 46.0, 179.0, 10.0).wrap(53.0)),
    ("lotNumber", field(FieldId::LotNumber, 126.0, 179.0, 10.0).wrap(68.0)),
    ("landIssuanceDate", field(FieldId::LandIssuanceDate, 46.0, 187.0, 10.0).wrap(53.0)),
    ("landArea", field(FieldId::LandArea, 126.0, 187.0, 10.0).wrap(68.0)),
    ("landLocation", field(FieldId::LandLocation, 46.0, 195.0, 10.0).wrap(148.0)),
    // V. Application details
    ("applicationDate", field(FieldId::ApplicationDate, 51.0, 215.0, 10.0).wrap(48.0)),
    ("applicationId", field(FieldId::ApplicationId, 130.0, 215.0, 10.0).wrap(64.0)),
    ("status", field(FieldId::Status, 51.0, 223.0, 10.0).wrap(48.0)),
    ("signature", field(FieldId::Signature, 150.0, 258.0, 10.0).bold().center().wrap(68.0)),
];

/// Barangay certification
pub const PAGE_2: PageMapping = &[
    ("logo", FieldMapping::Logo(LETTERHEAD_LOGO)),
    ("applicantName", field(FieldId::BarangayApplicantName, 103.1, 86.0, 11.0).bold().center().wrap(73.0)),
    ("age", field(FieldId::BarangayAge, 27.0, 95.0, 11.0).center().wrap(12.0)),
    ("civilStatus", field(FieldId::BarangayCivilStatus, 73.6, 95.0, 11.0).center().wrap(28.0)),
    ("iccs", field(FieldId::BarangayIccs, 158.0, 95.0, 11.0).center().wrap(73.8)),
    ("residenceLocation", field(FieldId::BarangayResidenceLocation, 107.4, 113.0, 11.0).center().wrap(172.8)),
    ("barangayName", field(FieldId::BarangayName, 47.5, 131.0, 11.0).center().wrap(53.0)),
    ("municipality", field(FieldId::BarangayMunicipality, 148.8, 131.0, 11.0).center().wrap(90.0)),
    ("purpose", field(FieldId::BarangayPurpose, 98.9, 149.0, 11.0).center().wrap(155.8)),
    ("issuanceDay", field(FieldId::BarangayIssuanceDay, 56.6, 158.0, 11.0).center().wrap(12.0)),
    ("issuanceMonth", field(FieldId::BarangayIssuanceMonth, 93.9, 158.0, 11.0).center().wrap(33.0)),
    ("issuanceYear", field(FieldId::BarangayIssuanceYear, 122.5, 158.0, 11.0).center().wrap(16.0)),
    ("punongBarangay", field(FieldId::PunongBarangay, 150.0, 200.0, 11.0).bold().center().wrap(68.0)),
];

/// Certification of tribal membership
pub const PAGE_3: PageMapping = &[
    ("logo", FieldMapping::Logo(LETTERHEAD_LOGO)),
    ("applicantName", field(FieldId::TribalApplicantName, 103.1, 86.0, 11.0).bold().center().wrap(73.0)),
    ("iccGroup1", field(FieldId::IccGroup1, 92.8, 95.0, 11.0).center().wrap(43.0)),
    ("iccGroup2", field(FieldId::IccGroup2, 159.9, 95.0, 11.0).center().wrap(70.0)),
    ("residenceLocation", field(FieldId::TribalResidenceLocation, 107.4, 113.0, 11.0).center().wrap(172.8)),
    ("purpose", field(FieldId::TribalPurpose, 129.3, 149.0, 11.0).center().wrap(94.9)),
    ("issuanceDay", field(FieldId::TribalIssuanceDay, 56.6, 158.0, 11.0).center().wrap(12.0)),
    ("issuanceMonth", field(FieldId::TribalIssuanceMonth, 93.9, 158.0, 11.0).center().wrap(33.0)),
    ("issuanceYear", field(FieldId::TribalIssuanceYear, 122.5, 158.0, 11.0).center().wrap(16.0)),
    ("issuancePlace", field(FieldId::TribalIssuancePlace, 65.0, 167.0, 11.0).center().wrap(88.0)),
    ("tribalChieftain", field(FieldId::TribalChieftain, 150.0, 200.0, 11.0).bold().center().wrap(68.0)),
];

/// Joint affidavit of two disinterested persons
pub const PAGE_4: PageMapping = &[
    ("logo", FieldMapping::Logo(LETTERHEAD_LOGO)),
    ("affiant1Name", field(FieldId::Affiant1Name, 68.6, 72.0, 10.5).bold().center().wrap(60.0)),
    ("affiant1Age", field(FieldId::Affiant1Age, 107.7, 72.0, 10.5).center().wrap(10.0)),
    ("affiant1Address", field(FieldId::Affiant1Address, 70.0, 80.0, 10.5).center().wrap(98.0)),
    ("affiant2Name", field(FieldId::Affiant2Name, 162.1, 80.0, 10.5).bold().center().wrap(63.6)),
    ("affiant2Age", field(FieldId::Affiant2Age, 26.0, 88.0, 10.5).center().wrap(10.0)),
    ("affiant2Address", field(FieldId::Affiant2Address, 134.2, 88.0, 10.5).center().wrap(119.3)),
    ("subjectName", field(FieldId::SubjectName, 106.9, 104.0, 10.5).bold().center().wrap(60.0)),
    ("subjectAge", field(FieldId::SubjectAge, 146.0, 104.0, 10.5).center().wrap(10.0)),
    ("subjectTribe", field(FieldId::SubjectTribe, 68.0, 112.0, 10.5).center().wrap(38.0)),
    ("subjectResidence", field(FieldId::SubjectResidence, 155.6, 112.0, 10.5).center().wrap(76.5)),
    ("subjectDateOfBirth", field(FieldId::SubjectDateOfBirth, 91.9, 120.0, 10.5).center().wrap(30.0)),
    ("subjectPlaceOfBirth", field(FieldId::SubjectPlaceOfBirth, 154.0, 120.0, 10.5).center().wrap(79.8)),
    ("fatherName", field(FieldId::AffidavitFatherName, 99.9, 128.0, 10.5).center().wrap(60.0)),
    ("motherName", field(FieldId::AffidavitMotherName, 51.0, 136.0, 10.5).center().wrap(60.0)),
    ("issuanceDay", field(FieldId::AffidavitIssuanceDay, 125.7, 160.0, 10.5).center().wrap(12.0)),
    ("issuanceMonth", field(FieldId::AffidavitIssuanceMonth, 37.5, 168.0, 10.5).center().wrap(33.0)),
    ("issuanceYear", field(FieldId::AffidavitIssuanceYear, 66.1, 168.0, 10.5).center().wrap(16.0)),
    ("issuancePlace", field(FieldId::AffidavitIssuancePlace, 137.5, 168.0, 10.5).center().wrap(112.7)),
    ("affiant1Signature", field(FieldId::Affiant1Name, 62.0, 190.0, 10.0).bold().center().wrap(66.0)),
    ("affiant2Signature", field(FieldId::Affiant2Name, 154.0, 190.0, 10.0).bold().center().wrap(66.0)),
];

/// Genealogical tree
pub const PAGE_5: PageMapping = &[
    ("logo", FieldMapping::Logo(LETTERHEAD_LOGO)),
    // Grandparents
    ("paternalGrandfatherName", field(FieldId::PaternalGrandfatherName, 41.0, 73.0, 9.0).bold().center().wrap(38.0)),
    ("paternalGrandfatherTribe", field(FieldId::PaternalGrandfatherTribe, 41.0, 78.5, 8.0).center().wrap(38.0)),
    ("paternalGrandfatherAddress", field(FieldId::PaternalGrandfatherAddress, 41.0, 83.0, 7.5).center().wrap(38.0)),
    ("paternalGrandmotherName", field(FieldId::PaternalGrandmotherName, 85.6, 73.0, 9.0).bold().center().wrap(38.0)),
    ("paternalGrandmotherTribe", field(FieldId::PaternalGrandmotherTribe, 85.6, 78.5, 8.0).center().wrap(38.0)),
    ("paternalGrandmotherAddress", field(FieldId::PaternalGrandmotherAddress, 85.6, 83.0, 7.5).center().wrap(38.0)),
    ("maternalGrandfatherName", field(FieldId::MaternalGrandfatherName, 130.3, 73.0, 9.0).bold().center().wrap(38.0)),
    ("maternalGrandfatherTribe", field(FieldId::MaternalGrandfatherTribe, 130.3, 78.5, 8.0).center().wrap(38.0)),
    ("maternalGrandfatherAddress", field(FieldId::MaternalGrandfatherAddress, 130.3, 83.0, 7.5).center().wrap(38.0)),
    ("maternalGrandmotherName", field(FieldId::MaternalGrandmotherName, 174.9, 73.0, 9.0).bold().center().wrap(38.0)),
    ("maternalGrandmotherTribe", field(FieldId::MaternalGrandmotherTribe, 174.9, 78.5, 8.0).center().wrap(38.0)),
    ("maternalGrandmotherAddress", field(FieldId::MaternalGrandmotherAddress, 174.9, 83.0, 7.5).center().wrap(38.0)),
    // Parents
    ("fatherName", field(FieldId::FatherName, 63.3, 118.0, 9.5).bold().center().wrap(46.0)),
    ("fatherTribe", field(FieldId::FatherTribe, 63.3, 123.5, 8.0).center().wrap(46.0)),
    ("fatherAddress", field(FieldId::FatherAddress, 63.3, 128.0, 7.5).center().wrap(46.0)),
    ("motherName", field(FieldId::MotherName, 152.6, 118.0, 9.5).bold().center().wrap(46.0)),
    ("motherTribe", field(FieldId::MotherTribe, 152.6, 123.5, 8.0).center().wrap(46.0)),
    ("motherAddress", field(FieldId::MotherAddress, 152.6, 128.0, 7.5).center().wrap(46.0)),
    // Applicant
    ("applicantName", field(FieldId::ApplicantName, 107.95, 163.0, 10.0).bold().center().wrap(56.0)),
    ("applicantTribe", field(FieldId::ApplicantTribe, 107.95, 168.5, 8.0).center().wrap(56.0)),
    ("applicantAddress", field(FieldId::ApplicantAddress, 107.95, 173.0, 7.5).center().wrap(56.0)),
    ("signature", field(FieldId::Signature, 150.0, 213.5, 10.0).bold().center().wrap(68.0)),
];

/// Mapping table for a page
pub fn page_mapping(page: PageId) -> PageMapping {
    match page {
        PageId::Page1 => PAGE_1,
        PageId::Page2 => PAGE_2,
        PageId::Page3 => PAGE_3,
        PageId::Page4 => PAGE_4,
        PageId::Page5 => PAGE_5,
    }
}

/// First text entry for an identifier on a page
pub fn find_field(page: PageId, identifier: &str) -> Option<&'static TextField> {
    page_mapping(page)
        .iter()
        .find(|(id, _)| *id == identifier)
        .and_then(|(_, mapping)| mapping.as_text())
}
