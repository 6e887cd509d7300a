//! Integration tests for consolidation and validation

use chrono::NaiveDate;
use coc_record::{
    consolidate, get_data_value, validate, validate_page, CanonicalRecord, FieldId, FixedClock,
    PageId, DEFAULT_ISSUANCE_YEAR,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2025, 8, 19)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap(),
    )
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

/// Every leaf of the serialized record must be a string
fn assert_all_leaves_are_strings(value: &Value, path: &str) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                assert_all_leaves_are_strings(child, &format!("{path}.{key}"));
            }
        }
        Value::String(_) => {}
        other => panic!("{path} is not a string: {other:?}"),
    }
}

#[test]
fn test_consolidation_is_total() {
    let inputs = [
        json!(null),
        json!({}),
        json!([1, 2, 3]),
        json!("just a string"),
        json!(12.5),
        json!({"page2": [], "page3": null, "page4": 7, "name": {"nested": true}}),
        json!({"age": null, "dateOfBirth": ["1990"], "purpose": false}),
    ];

    for input in &inputs {
        let record = consolidate(input, &clock());
        let value = serde_json::to_value(&record).unwrap();
        assert_all_leaves_are_strings(&value, "");
        for field in FieldId::ALL {
            // every id resolves without panicking
            let _ = field.value(&record);
        }
    }
}

#[test]
fn test_empty_input_yields_defaults_only() {
    let record = consolidate(&json!({}), &clock());

    assert_eq!(record.personal_info.full_name, "");
    assert_eq!(record.barangay_certification.issuance_day, "19");
    assert_eq!(record.barangay_certification.issuance_month, "August");
    assert_eq!(record.metadata.status, "pending");
    assert_eq!(record.metadata.application_date, "2025-08-19T10:00:00");
}

#[test]
fn test_consolidation_is_deterministic() {
    let a = consolidate(&maria_santos(), &clock());
    let b = consolidate(&maria_santos(), &clock());
    assert_eq!(a, b);
}

#[test]
fn test_fallback_priority_for_applicant_name() {
    let raw = json!({"name": "Jane Doe", "fatherName": "John Doe"});
    let record = consolidate(&raw, &clock());

    assert_eq!(record.barangay_certification.applicant_name, "Jane Doe");
    assert_eq!(record.tribal_certification.applicant_name, "Jane Doe");
    assert_eq!(record.affidavit.subject_name, "Jane Doe");

    let raw = json!({"name": "Jane Doe", "applicantSignature": "J. Doe"});
    let record = consolidate(&raw, &clock());
    assert_eq!(record.barangay_certification.applicant_name, "J. Doe");
    assert_eq!(record.personal_info.full_name, "Jane Doe");
}

#[test]
fn test_default_issuance_date() {
    let record = consolidate(&json!({"name": "Jane Doe"}), &clock());

    for (day, month, year) in [
        (
            &record.barangay_certification.issuance_day,
            &record.barangay_certification.issuance_month,
            &record.barangay_certification.issuance_year,
        ),
        (
            &record.tribal_certification.issuance_day,
            &record.tribal_certification.issuance_month,
            &record.tribal_certification.issuance_year,
        ),
        (
            &record.affidavit.issuance_day,
            &record.affidavit.issuance_month,
            &record.affidavit.issuance_year,
        ),
    ] {
        assert_eq!(day, "19");
        assert_eq!(month, "August");
        assert_eq!(year, DEFAULT_ISSUANCE_YEAR);
    }
    assert_eq!(DEFAULT_ISSUANCE_YEAR, "2024");
}

#[test]
fn test_maria_santos_scenario() {
    let record = consolidate(&maria_santos(), &clock());

    assert_eq!(record.personal_info.full_name, "Maria Santos");
    assert_eq!(record.barangay_certification.applicant_name, "Maria Santos");
    assert_eq!(
        record.barangay_certification.residence_location,
        "Poblacion, Alabel, Sarangani Province"
    );
    assert_eq!(record.tribal_certification.icc_group1, "B'laan");
    assert_eq!(record.genealogy.father.name, "Pedro Santos");
    assert_eq!(record.affidavit.mother_name, "Ana Santos");

    let result = validate(&record);
    assert!(!result.is_valid);
    assert_eq!(
        result.missing_fields,
        vec![
            "personalInfo.dateOfBirth",
            "personalInfo.placeOfBirth",
            "personalInfo.civilStatus",
        ]
    );

    assert!(validate_page(&record, PageId::Page2).is_valid);
    assert!(validate_page(&record, PageId::Page3).is_valid);
    assert!(validate_page(&record, PageId::Page5).is_valid);
    assert_eq!(
        validate_page(&record, PageId::Page4).missing_fields,
        vec!["affidavit.affiant1Name", "affidavit.affiant2Name"]
    );
}

#[test]
fn test_empty_input_reports_every_global_field() {
    let record = consolidate(&json!({}), &clock());
    let result = validate(&record);

    assert!(!result.is_valid);
    assert_eq!(result.missing_fields.len(), 8);
}

#[test]
fn test_unknown_path_lookup() {
    let record: CanonicalRecord = consolidate(&maria_santos(), &clock());

    assert_eq!(get_data_value(&record, "nonexistent.deep.path"), "");
    assert_eq!(
        get_data_value(&record, "genealogy.mother.name"),
        "Ana Santos"
    );
}

#[test]
fn test_top_level_residence_location_beats_derived_residence() {
    let raw = json!({
        "residenceLocation": "Purok 1, Kawas",
        "barangay": "Poblacion",
        "city": "Alabel"
    });
    let record = consolidate(&raw, &clock());

    assert_eq!(
        record.barangay_certification.residence_location,
        "Purok 1, Kawas"
    );
    assert_eq!(record.tribal_certification.residence_location, "Purok 1, Kawas");

    let derived = consolidate(&json!({"barangay": "Poblacion", "city": "Alabel"}), &clock());
    assert_eq!(
        derived.barangay_certification.residence_location,
        "Poblacion, Alabel, Sarangani Province"
    );
}

#[test]
fn test_icc_group1_priority() {
    let raw = json!({"iccGroup1": "Manobo", "fatherTribe": "B'laan", "iccs": "T'boli"});
    let record = consolidate(&raw, &clock());
    assert_eq!(record.tribal_certification.icc_group1, "Manobo");

    let raw = json!({"fatherTribe": "B'laan", "iccs": "T'boli"});
    let record = consolidate(&raw, &clock());
    assert_eq!(record.tribal_certification.icc_group1, "B'laan");

    // iccs outranks the applicant's own tribe
    let raw = json!({"iccs": "T'boli", "tribe": "Tagakaulo"});
    let record = consolidate(&raw, &clock());
    assert_eq!(record.personal_info.tribe, "Tagakaulo");
    assert_eq!(record.tribal_certification.icc_group1, "T'boli");
}

#[test]
fn test_top_level_subject_name_beats_applicant_name() {
    let raw = json!({"subjectName": "S. Name", "applicantSignature": "J. Doe", "name": "Jane"});
    let record = consolidate(&raw, &clock());

    assert_eq!(record.affidavit.subject_name, "S. Name");
    assert_eq!(record.barangay_certification.applicant_name, "J. Doe");

    let page_wins = json!({"subjectName": "S. Name", "page4": {"subjectName": "Page Four"}});
    assert_eq!(
        consolidate(&page_wins, &clock()).affidavit.subject_name,
        "Page Four"
    );
}
