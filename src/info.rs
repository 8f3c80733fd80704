use crate::refs::{ObjectReferences, RefType};
use chrono::{DateTime, Datelike, Local, Offset, Timelike};
use pdf_writer::{Date as PDate, Pdf, TextStr};

/// Document metadata written to the PDF's info dictionary
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Info {
    pub title: Option<String>,
    /// The issuing organisation, when the event has one
    pub author: Option<String>,
    /// The event the certificate was issued for
    pub subject: Option<String>,
    /// Pinned so that the metadata agrees with the file name. Defaults to the
    /// moment the document is written.
    pub created: Option<DateTime<Local>>,
}

impl Info {
    pub fn new() -> Info {
        Info::default()
    }

    /// Metadata for a single certificate
    pub fn certificate<T, S>(title: T, subject: S, created: DateTime<Local>) -> Info
    where
        T: Into<String>,
        S: Into<String>,
    {
        Info {
            title: Some(title.into()),
            subject: Some(subject.into()),
            created: Some(created),
            ..Info::default()
        }
    }

    /// Set the author, modifying `self`
    pub fn author<S: Into<String>>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.into());
        self
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, writer: &mut Pdf) {
        let id = refs.gen(RefType::Info);
        let mut info = writer.document_info(id);

        if let Some(title) = self.title.as_deref() {
            info.title(TextStr(title));
        }
        if let Some(author) = self.author.as_deref() {
            info.author(TextStr(author));
        }
        if let Some(subject) = self.subject.as_deref() {
            info.subject(TextStr(subject));
        }
        info.creator(TextStr(concat!(
            env!("CARGO_PKG_NAME"),
            " v",
            env!("CARGO_PKG_VERSION")
        )));
        info.creation_date(pdf_date(self.created.unwrap_or_else(Local::now)));
    }
}

fn pdf_date(at: DateTime<Local>) -> PDate {
    let offset_minutes = at.offset().fix().local_minus_utc() / 60;
    PDate::new(at.year() as u16)
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour((offset_minutes / 60) as i8)
        .utc_offset_minute((offset_minutes % 60).unsigned_abs() as u8)
}
