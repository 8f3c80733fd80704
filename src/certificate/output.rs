use crate::error::CertificateError;
use crate::models::ParticipantId;
use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// The file name a certificate generated at `at` is given, before any collision suffix
pub fn certificate_file_stem(participant_id: ParticipantId, at: DateTime<Local>) -> String {
    format!("certificado_{participant_id}_{}", at.format("%Y%m%d_%H%M%S"))
}

/// Write a rendered certificate into `dir`, creating the directory if needed.
///
/// Existing files are never overwritten: when the timestamped name is taken, `_1`,
/// `_2`, ... is appended until a free name is found.
pub fn write_certificate(
    dir: &Path,
    participant_id: ParticipantId,
    at: DateTime<Local>,
    bytes: &[u8],
) -> Result<PathBuf, CertificateError> {
    std::fs::create_dir_all(dir)?;
    let stem = certificate_file_stem(participant_id, at);

    let mut attempt = 0usize;
    loop {
        let name = match attempt {
            0 => format!("{stem}.pdf"),
            n => format!("{stem}_{n}.pdf"),
        };
        let path = dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                if let Err(e) = file.write_all(bytes).and_then(|_| file.sync_all()) {
                    drop(file);
                    let _ = std::fs::remove_file(&path);
                    return Err(e.into());
                }
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => attempt += 1,
            Err(e) => return Err(e.into()),
        }
    }
}
