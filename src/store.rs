//! The storage certificates are generated from.
//!
//! The surrounding application owns persistence; certificate generation only sees it
//! through [`ParticipantStore`] and [`BrandingStore`]. [`MemoryStore`] implements both
//! over plain vectors loaded from a JSON file; [`FileStore`] writes every recorded
//! certificate back to that file straight away.

use crate::error::{CertificateError, RecordKind};
use crate::models::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub trait ParticipantStore {
    /// Look a participant up by id, whether or not it is soft-deleted
    fn participant(&self, id: ParticipantId) -> Option<Participant>;

    /// Look an event up by id, whether or not it is soft-deleted
    fn event(&self, id: EventId) -> Option<Event>;

    /// The participants of an event that are not soft-deleted, in a stable order
    fn participants_of_event(&self, event_id: EventId) -> Vec<Participant>;

    /// Remember that a certificate now exists for the participant
    fn record_certificate_generated(
        &mut self,
        participant_id: ParticipantId,
        path: &Path,
    ) -> Result<(), CertificateError>;
}

pub trait BrandingStore {
    fn template(&self, id: TemplateId) -> Option<Template>;

    /// The active template flagged as the default, if any
    fn default_template(&self) -> Option<Template>;

    /// The organisation running the event, if it has one
    fn organization_for_event(&self, event_id: EventId) -> Option<Organization>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryStore {
    pub organizations: Vec<Organization>,
    pub events: Vec<Event>,
    pub participants: Vec<Participant>,
    pub templates: Vec<Template>,
}

impl MemoryStore {
    pub fn from_json(contents: &str) -> Result<MemoryStore, CertificateError> {
        serde_json::from_str(contents).map_err(Into::into)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<MemoryStore, CertificateError> {
        let contents = std::fs::read_to_string(path)?;
        MemoryStore::from_json(&contents)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), CertificateError> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl ParticipantStore for MemoryStore {
    fn participant(&self, id: ParticipantId) -> Option<Participant> {
        self.participants.iter().find(|p| p.id == id).cloned()
    }

    fn event(&self, id: EventId) -> Option<Event> {
        self.events.iter().find(|e| e.id == id).cloned()
    }

    fn participants_of_event(&self, event_id: EventId) -> Vec<Participant> {
        self.participants
            .iter()
            .filter(|p| p.event_id == event_id && !p.is_deleted())
            .cloned()
            .collect()
    }

    fn record_certificate_generated(
        &mut self,
        participant_id: ParticipantId,
        path: &Path,
    ) -> Result<(), CertificateError> {
        let participant = self
            .participants
            .iter_mut()
            .find(|p| p.id == participant_id)
            .ok_or_else(|| CertificateError::not_found(RecordKind::Participant, participant_id))?;
        participant.certificate_generated = true;
        participant.certificate_path = Some(PathBuf::from(path));
        Ok(())
    }
}

impl BrandingStore for MemoryStore {
    fn template(&self, id: TemplateId) -> Option<Template> {
        self.templates.iter().find(|t| t.id == id).cloned()
    }

    fn default_template(&self) -> Option<Template> {
        self.templates
            .iter()
            .find(|t| t.is_default && t.active)
            .cloned()
    }

    fn organization_for_event(&self, event_id: EventId) -> Option<Organization> {
        let organization_id = self.event(event_id)?.organization_id?;
        self.organizations
            .iter()
            .find(|o| o.id == organization_id)
            .cloned()
    }
}

/// A [`MemoryStore`] tied to its JSON file. Recording a certificate saves the file
/// before returning, so an interrupted batch never loses certificates already written.
pub struct FileStore {
    store: MemoryStore,
    path: PathBuf,
}

impl FileStore {
    pub fn open<P: Into<PathBuf>>(path: P) -> Result<FileStore, CertificateError> {
        let path = path.into();
        let store = MemoryStore::load(&path)?;
        Ok(FileStore { store, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_inner(self) -> MemoryStore {
        self.store
    }
}

impl ParticipantStore for FileStore {
    fn participant(&self, id: ParticipantId) -> Option<Participant> {
        self.store.participant(id)
    }

    fn event(&self, id: EventId) -> Option<Event> {
        self.store.event(id)
    }

    fn participants_of_event(&self, event_id: EventId) -> Vec<Participant> {
        self.store.participants_of_event(event_id)
    }

    fn record_certificate_generated(
        &mut self,
        participant_id: ParticipantId,
        path: &Path,
    ) -> Result<(), CertificateError> {
        self.store.record_certificate_generated(participant_id, path)?;
        self.store.save(&self.path)
    }
}

impl BrandingStore for FileStore {
    fn template(&self, id: TemplateId) -> Option<Template> {
        self.store.template(id)
    }

    fn default_template(&self) -> Option<Template> {
        self.store.default_template()
    }

    fn organization_for_event(&self, event_id: EventId) -> Option<Organization> {
        self.store.organization_for_event(event_id)
    }
}
