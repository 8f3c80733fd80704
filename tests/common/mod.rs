#![allow(dead_code)]

use cert_gen::{CertificateContext, FontLibrary, MemoryStore, Settings};
use std::path::Path;

pub fn store() -> MemoryStore {
    MemoryStore::from_json(
        r##"{
            "organizations": [
                {"id": 1, "name": "Mindset & Wellness", "primary_color": "#9DB5A5",
                 "logo_path": "logos/does-not-exist.png"}
            ],
            "events": [
                {"id": 10, "name": "Respiração Consciente", "organization_id": 1,
                 "start_date": "2025-12-29", "end_date": "2025-12-30",
                 "duration_minutes": 120, "instructor": "Ana Rita Vieira"},
                {"id": 11, "name": "Cancelled", "start_date": "2025-11-02",
                 "duration_minutes": 60, "deleted_at": "2025-10-30T12:00:00"},
                {"id": 12, "name": "Undated", "duration_minutes": 60}
            ],
            "participants": [
                {"id": 100, "name": "Maria Silva", "email": "maria@example.org", "event_id": 10},
                {"id": 101, "name": "Rui Costa", "email": "rui@example.org", "event_id": 10},
                {"id": 102, "name": "Joana Matos", "email": "joana@example.org", "event_id": 10},
                {"id": 103, "name": "Pedro Reis", "email": "pedro@example.org", "event_id": 10,
                 "deleted_at": "2025-12-01T09:00:00"},
                {"id": 104, "name": "Sara Lopes", "email": "sara@example.org", "event_id": 11},
                {"id": 105, "name": "Tiago Nunes", "email": "tiago@example.org", "event_id": 12}
            ],
            "templates": [
                {"id": 1, "name": "Validation", "config": {"include_qr": true}}
            ]
        }"##,
    )
    .expect("fixture store parses")
}

pub fn context(dir: &Path) -> CertificateContext {
    CertificateContext::with_fonts(
        Settings {
            output_dir: dir.join("certificados"),
            assets_dir: dir.to_path_buf(),
            ..Settings::default()
        },
        FontLibrary::builtin(),
    )
}

pub fn pdf_files(dir: &Path) -> Vec<std::path::PathBuf> {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(|e| e.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "pdf"))
            .collect(),
        Err(_) => Vec::new(),
    }
}

pub fn hex(text: &str) -> String {
    text.bytes().map(|b| format!("{b:02x}")).collect()
}
