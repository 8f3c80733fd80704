//! Records read from the surrounding application's storage.
//!
//! Only the fields certificates need are modelled. Records are soft-deleted by
//! setting `deleted_at`; a soft-deleted record is treated as if it did not exist.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub type ParticipantId = u64;
pub type EventId = u64;
pub type OrganizationId = u64;
pub type TemplateId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub event_id: EventId,
    #[serde(default)]
    pub certificate_generated: bool,
    #[serde(default)]
    pub certificate_path: Option<PathBuf>,
    #[serde(default)]
    pub deleted_at: Option<NaiveDateTime>,
}

impl Participant {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub name: String,
    #[serde(default)]
    pub organization_id: Option<OrganizationId>,
    /// Mandatory for certificates; stored data may still lack it
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub duration_minutes: u32,
    /// Who ran the event, printed in the certificate body when present
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub template_id: Option<TemplateId>,
    #[serde(default)]
    pub deleted_at: Option<NaiveDateTime>,
}

impl Event {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// The visual identity of the organisation running an event. Its colours and
/// artwork take precedence over any template.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub logo_path: Option<PathBuf>,
    pub seal_path: Option<PathBuf>,
    pub signature_name: Option<String>,
    pub signature_role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    #[serde(default)]
    pub config: TemplateConfig,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub is_default: bool,
}

fn default_true() -> bool {
    true
}

/// Design overrides carried by a template. Unset fields fall through to the
/// configured defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub text_color: Option<String>,
    pub logo_path: Option<PathBuf>,
    pub seal_path: Option<PathBuf>,
    pub include_logo: Option<bool>,
    pub include_qr: Option<bool>,
    pub font_title: Option<String>,
    pub font_body: Option<String>,
    pub font_body_bold: Option<String>,
    pub font_signature: Option<String>,
}
