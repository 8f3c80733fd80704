//! Certificates for every participant of an event in one pass.

use crate::certificate::{
    generate_certificate, CertificateContext, CertificateRequest, GeneratedCertificate,
};
use crate::error::{CertificateError, RecordKind};
use crate::models::{EventId, ParticipantId, TemplateId};
use crate::store::{BrandingStore, ParticipantStore};

/// Why one participant's certificate could not be produced
#[derive(Debug, Clone, PartialEq)]
pub struct BatchError {
    pub participant_id: ParticipantId,
    pub participant_name: String,
    pub error: String,
}

/// Aggregate outcome of a batch. `total == generated + errors` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    pub total: usize,
    pub generated: usize,
    pub errors: usize,
    pub error_details: Vec<BatchError>,
    /// Every certificate written, in processing order
    pub certificates: Vec<GeneratedCertificate>,
}

impl BatchResult {
    fn record_success(&mut self, certificate: GeneratedCertificate) {
        self.generated += 1;
        self.certificates.push(certificate);
    }

    fn record_failure(&mut self, participant_id: ParticipantId, name: &str, error: &CertificateError) {
        self.errors += 1;
        self.error_details.push(BatchError {
            participant_id,
            participant_name: name.to_string(),
            error: error.to_string(),
        });
    }
}

/// Generate certificates for every active participant of an event.
///
/// Only a missing or soft-deleted event fails the whole batch. Every other failure is
/// recorded against its participant and the batch moves on. Each successful
/// certificate is recorded in the store straight away, so later failures never undo
/// earlier ones.
pub fn batch_generate_certificates<S>(
    ctx: &CertificateContext,
    store: &mut S,
    event_id: EventId,
    template_id: Option<TemplateId>,
) -> Result<BatchResult, CertificateError>
where
    S: ParticipantStore + BrandingStore + ?Sized,
{
    let event = store
        .event(event_id)
        .filter(|e| !e.is_deleted())
        .ok_or_else(|| CertificateError::not_found(RecordKind::Event, event_id))?;

    let participants = store.participants_of_event(event.id);
    let mut result = BatchResult {
        total: participants.len(),
        ..BatchResult::default()
    };
    log::info!(
        "Generating {} certificates for event {} ({})",
        result.total,
        event.name,
        event.id
    );

    for participant in participants.iter() {
        let request = CertificateRequest::new(participant.id)
            .event(event.id)
            .template(template_id);

        let outcome = generate_certificate(ctx, &*store, &request).and_then(|certificate| {
            store.record_certificate_generated(participant.id, &certificate.filepath)?;
            Ok(certificate)
        });

        match outcome {
            Ok(certificate) => result.record_success(certificate),
            Err(e) => {
                log::error!(
                    "Error generating certificate for participant {}: {e}",
                    participant.id
                );
                result.record_failure(participant.id, &participant.name, &e);
            }
        }
    }

    log::info!(
        "Batch for event {} finished: {} generated, {} errors",
        event.id,
        result.generated,
        result.errors
    );
    Ok(result)
}
