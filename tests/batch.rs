mod common;

use cert_gen::{
    batch_generate_certificates, BrandingStore, CertificateError, Event, EventId, FileStore,
    MemoryStore, Organization, Participant, ParticipantId, ParticipantStore, Template,
    TemplateId,
};
use common::{context, pdf_files, store};
use std::path::Path;

/// Lists every participant but loses one of them on lookup, so that generating
/// that participant's certificate fails mid-batch.
struct LossyStore {
    inner: MemoryStore,
    lost: ParticipantId,
}

impl ParticipantStore for LossyStore {
    fn participant(&self, id: ParticipantId) -> Option<Participant> {
        if id == self.lost {
            None
        } else {
            self.inner.participant(id)
        }
    }

    fn event(&self, id: EventId) -> Option<Event> {
        self.inner.event(id)
    }

    fn participants_of_event(&self, event_id: EventId) -> Vec<Participant> {
        self.inner.participants_of_event(event_id)
    }

    fn record_certificate_generated(
        &mut self,
        participant_id: ParticipantId,
        path: &Path,
    ) -> Result<(), CertificateError> {
        self.inner.record_certificate_generated(participant_id, path)
    }
}

impl BrandingStore for LossyStore {
    fn template(&self, id: TemplateId) -> Option<Template> {
        self.inner.template(id)
    }

    fn default_template(&self) -> Option<Template> {
        self.inner.default_template()
    }

    fn organization_for_event(&self, event_id: EventId) -> Option<Organization> {
        self.inner.organization_for_event(event_id)
    }
}

#[test]
fn generates_for_every_active_participant() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let mut store = store();

    let result = batch_generate_certificates(&context(dir.path()), &mut store, 10, None)
        .expect("event exists");

    assert_eq!(result.total, 3);
    assert_eq!(result.generated, 3);
    assert_eq!(result.errors, 0);
    assert!(result.error_details.is_empty());
    assert_eq!(pdf_files(&dir.path().join("certificados")).len(), 3);

    for id in [100, 101, 102] {
        let participant = store.participant(id).expect("participant exists");
        assert!(participant.certificate_generated);
        let path = participant.certificate_path.expect("path is recorded");
        lopdf::Document::load(&path).expect("certificate is a valid PDF");
    }
    assert!(!store.participant(103).expect("still stored").certificate_generated);
}

#[test]
fn one_failure_does_not_stop_the_batch() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let mut store = LossyStore {
        inner: store(),
        lost: 101,
    };

    let result = batch_generate_certificates(&context(dir.path()), &mut store, 10, None)
        .expect("event exists");

    assert_eq!(result.total, 3);
    assert_eq!(result.generated, 2);
    assert_eq!(result.errors, 1);
    assert_eq!(result.total, result.generated + result.errors);
    assert_eq!(result.error_details.len(), 1);
    assert_eq!(result.error_details[0].participant_id, 101);
    assert_eq!(result.error_details[0].participant_name, "Rui Costa");
    assert!(result.error_details[0].error.contains("not found"));

    assert_eq!(pdf_files(&dir.path().join("certificados")).len(), 2);
    assert!(store.inner.participant(100).expect("exists").certificate_generated);
    assert!(!store.inner.participant(101).expect("exists").certificate_generated);
    assert!(store.inner.participant(102).expect("exists").certificate_generated);
}

#[test]
fn deleted_events_abort_before_generating() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let mut store = store();

    let err = batch_generate_certificates(&context(dir.path()), &mut store, 11, None)
        .expect_err("event is soft-deleted");

    assert!(err.is_not_found());
    assert!(pdf_files(&dir.path().join("certificados")).is_empty());
}

#[test]
fn validation_errors_are_recorded_per_participant() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let mut store = store();

    let result = batch_generate_certificates(&context(dir.path()), &mut store, 12, None)
        .expect("event exists");

    assert_eq!(result.total, 1);
    assert_eq!(result.errors, 1);
    assert_eq!(result.error_details[0].participant_name, "Tiago Nunes");
    assert!(result.error_details[0].error.contains("start date"));
}

#[test]
fn file_backed_batches_record_every_certificate_on_disk() {
    let dir = tempfile::tempdir().expect("can create temp dir");
    let data = dir.path().join("data.json");
    store().save(&data).expect("can save fixture");

    let mut file_store = FileStore::open(&data).expect("can open data file");
    let result = batch_generate_certificates(&context(dir.path()), &mut file_store, 10, None)
        .expect("event exists");
    assert_eq!(result.generated, 3);

    let on_disk = MemoryStore::load(&data).expect("can reload data file");
    for certificate in result.certificates.iter() {
        let participant = on_disk
            .participant(certificate.participant_id)
            .expect("participant exists");
        assert!(participant.certificate_generated);
        assert_eq!(participant.certificate_path.as_ref(), Some(&certificate.filepath));
    }
}
