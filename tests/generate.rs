mod common;

use cert_gen::{
    generate_certificate, validate_certificate, CertificateError, CertificateRequest,
    ParticipantStore, RecordKind,
};
use common::{context, hex, pdf_files, store};

#[test]
fn generates_a_valid_pdf_without_the_logo() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let ctx = context(dir.path());
    let store = store();

    let certificate = generate_certificate(&ctx, &store, &CertificateRequest::new(100))
        .expect("certificate is generated");

    assert_eq!(certificate.participant_id, 100);
    assert!(certificate.filepath.starts_with(dir.path().join("certificados")));
    let name = certificate
        .filepath
        .file_name()
        .and_then(|n| n.to_str())
        .expect("file name is utf-8");
    assert!(name.starts_with("certificado_100_"));
    assert!(name.ends_with(".pdf"));

    let bytes = std::fs::read(&certificate.filepath).expect("can read certificate");
    let pdf = lopdf::Document::load_mem(&bytes).expect("certificate is a valid PDF");
    assert_eq!(pdf.get_pages().len(), 1);

    let raw = String::from_utf8_lossy(&bytes);
    assert!(raw.contains(&hex("Maria Silva,")));
    assert!(!raw.contains("/I0 Do"), "the missing logo is left out");
}

#[test]
fn does_not_record_anything_in_the_store() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let store = store();
    generate_certificate(&context(dir.path()), &store, &CertificateRequest::new(101))
        .expect("certificate is generated");

    assert!(!store.participant(101).expect("exists").certificate_generated);
    assert!(!validate_certificate(&store, 101).valid);
}

#[test]
fn repeated_generation_never_overwrites() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let ctx = context(dir.path());
    let store = store();

    let first = generate_certificate(&ctx, &store, &CertificateRequest::new(100))
        .expect("certificate is generated");
    let second = generate_certificate(&ctx, &store, &CertificateRequest::new(100))
        .expect("certificate is generated");

    assert_ne!(first.filepath, second.filepath);
    assert_eq!(pdf_files(&dir.path().join("certificados")).len(), 2);
}

#[test]
fn soft_deleted_participants_are_not_found() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let err = generate_certificate(&context(dir.path()), &store(), &CertificateRequest::new(103))
        .expect_err("participant is soft-deleted");

    assert!(matches!(
        err,
        CertificateError::NotFound {
            kind: RecordKind::Participant,
            id: 103
        }
    ));
    assert!(pdf_files(&dir.path().join("certificados")).is_empty());
}

#[test]
fn participants_of_deleted_events_are_not_found() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let err = generate_certificate(&context(dir.path()), &store(), &CertificateRequest::new(104))
        .expect_err("event is soft-deleted");

    assert!(matches!(
        err,
        CertificateError::NotFound {
            kind: RecordKind::Event,
            id: 11
        }
    ));
    assert!(pdf_files(&dir.path().join("certificados")).is_empty());
}

#[test]
fn missing_participants_are_not_found() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let err = generate_certificate(&context(dir.path()), &store(), &CertificateRequest::new(999))
        .expect_err("no such participant");
    assert!(err.is_not_found());
}

#[test]
fn events_without_a_start_date_are_rejected() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let err = generate_certificate(&context(dir.path()), &store(), &CertificateRequest::new(105))
        .expect_err("event has no start date");

    assert!(matches!(err, CertificateError::Validation(_)));
    assert!(pdf_files(&dir.path().join("certificados")).is_empty());
}

#[test]
fn unknown_templates_are_not_found() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let request = CertificateRequest::new(100).template(Some(42));
    let err = generate_certificate(&context(dir.path()), &store(), &request)
        .expect_err("no such template");

    assert!(matches!(
        err,
        CertificateError::NotFound {
            kind: RecordKind::Template,
            id: 42
        }
    ));
}

#[test]
fn validates_after_the_caller_records_the_certificate() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let mut store = store();
    let certificate = generate_certificate(&context(dir.path()), &store, &CertificateRequest::new(102))
        .expect("certificate is generated");
    store
        .record_certificate_generated(102, &certificate.filepath)
        .expect("participant exists");

    let validation = validate_certificate(&store, 102);
    assert!(validation.valid);
    assert_eq!(
        validation.participant.map(|p| p.name),
        Some("Joana Matos".to_string())
    );
    assert_eq!(validation.event.map(|e| e.id), Some(10));
}
