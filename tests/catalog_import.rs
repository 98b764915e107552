use chrono::NaiveDate;
use study_compass::advisor::StudyField;
use study_compass::directory::{import, Funding, ImportError, InstructionLanguage};

const HEADER: &str = "Id,Name,Country,City,Fields,Languages,Tuition EUR/Year,Living EUR/Month,Application Deadline,Funding\n";

#[test]
fn importer_reads_rows_into_a_catalog() {
    let csv = format!(
        "{HEADER}\
aalto,Aalto University,Finland,Espoo,Engineering & Technology; Sciences,English,12000,1100,2026-01-03,public\n\
tartu,University of Tartu,Estonia,Tartu,Sciences; Medicine & Health,English,4000,600,,public\n"
    );

    let catalog = import::load_catalog(csv.as_bytes()).expect("import succeeds");

    assert_eq!(catalog.len(), 2);
    let aalto = catalog
        .iter()
        .find(|university| university.id.0 == "aalto")
        .expect("aalto present");
    assert_eq!(aalto.country, "Finland");
    assert_eq!(
        aalto.fields,
        vec![StudyField::EngineeringTechnology, StudyField::Sciences]
    );
    assert_eq!(aalto.languages, vec![InstructionLanguage::English]);
    assert_eq!(
        aalto.application_deadline,
        NaiveDate::from_ymd_opt(2026, 1, 3)
    );
    assert_eq!(aalto.funding, Funding::Public);

    let tartu = catalog
        .iter()
        .find(|university| university.id.0 == "tartu")
        .expect("tartu present");
    assert!(tartu.application_deadline.is_none());
}

#[test]
fn importer_accepts_dotted_deadline_format() {
    let csv = format!(
        "{HEADER}\
aalto,Aalto University,Finland,Espoo,Sciences,English,12000,1100,03.01.2026,public\n"
    );

    let catalog = import::load_catalog(csv.as_bytes()).expect("import succeeds");
    let aalto = catalog.iter().next().expect("row present");
    assert_eq!(
        aalto.application_deadline,
        NaiveDate::from_ymd_opt(2026, 1, 3)
    );
}

#[test]
fn importer_rejects_unknown_field_labels() {
    let csv = format!(
        "{HEADER}\
x,Example,Finland,Espoo,Alchemy,English,1000,800,,public\n"
    );

    match import::load_catalog(csv.as_bytes()) {
        Err(ImportError::UnknownStudyField(label)) => assert_eq!(label, "Alchemy"),
        other => panic!("expected unknown study field error, got {other:?}"),
    }
}

#[test]
fn importer_rejects_unknown_language_labels() {
    let csv = format!(
        "{HEADER}\
x,Example,Finland,Espoo,Sciences,Klingon,1000,800,,public\n"
    );

    match import::load_catalog(csv.as_bytes()) {
        Err(ImportError::UnknownLanguage(label)) => assert_eq!(label, "Klingon"),
        other => panic!("expected unknown language error, got {other:?}"),
    }
}

#[test]
fn importer_rejects_malformed_deadlines() {
    let csv = format!(
        "{HEADER}\
x,Example,Finland,Espoo,Sciences,English,1000,800,next spring,public\n"
    );

    match import::load_catalog(csv.as_bytes()) {
        Err(ImportError::InvalidDeadline(value)) => assert_eq!(value, "next spring"),
        other => panic!("expected invalid deadline error, got {other:?}"),
    }
}

#[test]
fn importer_rejects_duplicate_ids() {
    let csv = format!(
        "{HEADER}\
dup,Example,Finland,Espoo,Sciences,English,1000,800,,public\n\
dup,Other,Estonia,Tartu,Sciences,English,1500,700,,public\n"
    );

    match import::load_catalog(csv.as_bytes()) {
        Err(ImportError::Catalog(error)) => {
            assert!(error.to_string().contains("duplicate"), "got: {error}")
        }
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}
