//! Building one certificate for one participant.

mod narrative;
mod output;

pub use narrative::*;
pub use output::*;

use crate::branding::BrandingConfig;
use crate::composer::{CertificateContent, Composer, QrBlock};
use crate::config::Settings;
use crate::error::{CertificateError, RecordKind};
use crate::font::FontLibrary;
use crate::info::Info;
use crate::models::*;
use crate::qr::{render_qr, validation_url};
use crate::store::{BrandingStore, ParticipantStore};
use crate::units::Pt;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Settings and fonts shared by every certificate of a request or batch
pub struct CertificateContext {
    pub settings: Settings,
    pub fonts: FontLibrary,
}

impl CertificateContext {
    /// Build a context, loading the faces listed in the settings
    pub fn new(settings: Settings) -> CertificateContext {
        let fonts = FontLibrary::load(&settings.fonts, &settings.assets_dir);
        CertificateContext { settings, fonts }
    }

    pub fn with_fonts(settings: Settings, fonts: FontLibrary) -> CertificateContext {
        CertificateContext { settings, fonts }
    }
}

/// What to generate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificateRequest {
    pub participant_id: ParticipantId,
    /// The event the participant is expected to belong to. A participant of another
    /// event is reported as not found.
    pub event_id: Option<EventId>,
    pub template_id: Option<TemplateId>,
    /// Overrides `validation_base_url` from the settings
    pub base_validation_url: Option<String>,
}

impl CertificateRequest {
    pub fn new(participant_id: ParticipantId) -> CertificateRequest {
        CertificateRequest {
            participant_id,
            ..CertificateRequest::default()
        }
    }

    pub fn event(mut self, event_id: EventId) -> Self {
        self.event_id = Some(event_id);
        self
    }

    pub fn template(mut self, template_id: Option<TemplateId>) -> Self {
        self.template_id = template_id;
        self
    }

    pub fn validation_url<S: Into<String>>(mut self, base: S) -> Self {
        self.base_validation_url = Some(base.into());
        self
    }
}

/// A certificate written to disk. The caller records the path against the participant.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCertificate {
    pub filepath: PathBuf,
    pub participant_id: ParticipantId,
    pub generated_at: DateTime<Local>,
}

/// Generate the certificate for one participant and write it to the output directory.
///
/// Fails with [`CertificateError::NotFound`] when the participant or its event is
/// missing or soft-deleted, or when an explicitly requested template is missing or
/// inactive. No file is written unless the whole certificate renders.
pub fn generate_certificate<S>(
    ctx: &CertificateContext,
    store: &S,
    request: &CertificateRequest,
) -> Result<GeneratedCertificate, CertificateError>
where
    S: ParticipantStore + BrandingStore + ?Sized,
{
    let settings = &ctx.settings;

    let participant = store
        .participant(request.participant_id)
        .filter(|p| !p.is_deleted())
        .filter(|p| request.event_id.map_or(true, |id| id == p.event_id))
        .ok_or_else(|| CertificateError::not_found(RecordKind::Participant, request.participant_id))?;
    let event = store
        .event(participant.event_id)
        .filter(|e| !e.is_deleted())
        .ok_or_else(|| CertificateError::not_found(RecordKind::Event, participant.event_id))?;

    let template = select_template(store, request.template_id, &event)?;
    let organization = store.organization_for_event(event.id);
    let branding = BrandingConfig::resolve(
        organization.as_ref(),
        template.as_ref().map(|t| &t.config),
        settings,
    );
    let fonts = ctx.fonts.font_set(&branding);

    let generated_at = Local::now();
    let locale = settings.locale;

    let style = NarrativeStyle {
        size: Pt(settings.layout.body_size_pt),
        text: branding.text_colour,
        emphasis: branding.primary_colour,
    };
    let body = body_runs(locale, &participant.name, &event, &style)?;

    let qr = if branding.include_qr {
        qr_block(request, settings, participant.id, generated_at)?
    } else {
        None
    };

    let content = CertificateContent {
        title: locale.title().to_string(),
        body,
        qr,
    };

    let title = match locale {
        Locale::Pt => format!("Certificado de {}", participant.name),
        Locale::En => format!("Certificate for {}", participant.name),
    };
    let mut info = Info::certificate(title, event.name.as_str(), generated_at);
    if let Some(organization) = organization.as_ref() {
        info.author(organization.name.as_str());
    }

    let bytes = Composer::new(settings, &fonts, &branding)
        .compose(&content, info)?
        .to_bytes()?;
    let filepath = write_certificate(&settings.output_dir, participant.id, generated_at, &bytes)?;

    log::info!(
        "Certificate generated for {} ({}) at {}",
        participant.name,
        participant.id,
        filepath.display()
    );

    Ok(GeneratedCertificate {
        filepath,
        participant_id: participant.id,
        generated_at,
    })
}

fn select_template<S>(
    store: &S,
    requested: Option<TemplateId>,
    event: &Event,
) -> Result<Option<Template>, CertificateError>
where
    S: BrandingStore + ?Sized,
{
    if let Some(id) = requested {
        return store
            .template(id)
            .filter(|t| t.active)
            .map(Some)
            .ok_or_else(|| CertificateError::not_found(RecordKind::Template, id));
    }

    let template = event
        .template_id
        .and_then(|id| store.template(id))
        .filter(|t| t.active)
        .or_else(|| store.default_template());
    if template.is_none() {
        log::debug!("No template found, using default design");
    }
    Ok(template)
}

fn qr_block(
    request: &CertificateRequest,
    settings: &Settings,
    participant_id: ParticipantId,
    generated_at: DateTime<Local>,
) -> Result<Option<QrBlock>, CertificateError> {
    let base = request
        .base_validation_url
        .as_deref()
        .or(settings.validation_base_url.as_deref())
        .filter(|base| !base.trim().is_empty());
    let Some(base) = base else {
        log::warn!("QR code requested but no validation URL is configured; leaving it out");
        return Ok(None);
    };

    let url = validation_url(base, participant_id);
    Ok(Some(QrBlock {
        image: render_qr(&url)?,
        caption: settings.locale.qr_caption().to_string(),
        identifier: format!(
            "ID {participant_id}-{}",
            generated_at.format("%Y%m%d%H%M%S")
        ),
    }))
}

/// Outcome of checking a participant's certificate
#[derive(Debug, Clone, PartialEq)]
pub struct CertificateValidation {
    pub valid: bool,
    pub participant: Option<Participant>,
    pub event: Option<Event>,
}

impl CertificateValidation {
    fn invalid() -> CertificateValidation {
        CertificateValidation {
            valid: false,
            participant: None,
            event: None,
        }
    }
}

/// Check whether a participant holds a valid certificate: the participant and its
/// event exist, neither is soft-deleted, and a certificate has been generated.
pub fn validate_certificate<S>(store: &S, participant_id: ParticipantId) -> CertificateValidation
where
    S: ParticipantStore + ?Sized,
{
    let Some(participant) = store.participant(participant_id).filter(|p| !p.is_deleted()) else {
        return CertificateValidation::invalid();
    };
    if !participant.certificate_generated {
        return CertificateValidation::invalid();
    }
    let Some(event) = store.event(participant.event_id).filter(|e| !e.is_deleted()) else {
        return CertificateValidation::invalid();
    };

    CertificateValidation {
        valid: true,
        participant: Some(participant),
        event: Some(event),
    }
}
