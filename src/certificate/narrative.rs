use crate::colour::Colour;
use crate::error::CertificateError;
use crate::layout::{FontRole, TextRun};
use crate::models::Event;
use crate::units::Pt;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Language certificates are worded in
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
}

const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
    "setembro", "outubro", "novembro", "dezembro",
];
const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August",
    "September", "October", "November", "December",
];

impl Locale {
    pub fn title(self) -> &'static str {
        match self {
            Locale::Pt => "CERTIFICADO DE PARTICIPAÇÃO",
            Locale::En => "CERTIFICATE OF PARTICIPATION",
        }
    }

    /// Caption printed under the QR code
    pub fn qr_caption(self) -> &'static str {
        match self {
            Locale::Pt => "Validar certificado",
            Locale::En => "Verify certificate",
        }
    }

    fn month(self, date: NaiveDate) -> &'static str {
        let months = match self {
            Locale::Pt => &MONTHS_PT,
            Locale::En => &MONTHS_EN,
        };
        months[date.month0() as usize]
    }

    /// Spell a date out: `29 de dezembro de 2025` or `29 December 2025`
    pub fn format_date(self, date: NaiveDate) -> String {
        match self {
            Locale::Pt => format!("{} de {} de {}", date.day(), self.month(date), date.year()),
            Locale::En => format!("{} {} {}", date.day(), self.month(date), date.year()),
        }
    }

    /// Spell out when an event took place. The end date is only mentioned when it
    /// differs from the start.
    pub fn format_date_range(self, start: NaiveDate, end: Option<NaiveDate>) -> String {
        let mut formatted = self.format_date(start);
        if let Some(end) = end.filter(|&end| end != start) {
            let joiner = match self {
                Locale::Pt => " a ",
                Locale::En => " to ",
            };
            formatted.push_str(joiner);
            formatted.push_str(&self.format_date(end));
        }
        formatted
    }
}

/// Sizes and colours the body is set in
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NarrativeStyle {
    pub size: Pt,
    /// Connective prose
    pub text: Colour,
    /// Names of the participant, event and instructor
    pub emphasis: Colour,
}

struct Wording {
    opening: &'static str,
    participated: &'static str,
    held: &'static str,
    duration: &'static str,
    minutes: &'static str,
    instructed_by: &'static str,
}

fn wording(locale: Locale) -> Wording {
    match locale {
        Locale::Pt => Wording {
            opening: "Certificamos que ",
            participated: " participou no evento ",
            held: " realizado a ",
            duration: " com a duração de ",
            minutes: " minutos",
            instructed_by: ", ministrado por ",
        },
        Locale::En => Wording {
            opening: "This certifies that ",
            participated: " participated in the event ",
            held: " held on ",
            duration: " with a duration of ",
            minutes: " minutes",
            instructed_by: ", instructed by ",
        },
    }
}

/// The certificate body as styled runs, ready for wrapping.
///
/// Punctuation is attached to the run before it so that wrapping can never leave
/// a comma or the final period at the start of a line.
pub fn body_runs(
    locale: Locale,
    participant_name: &str,
    event: &Event,
    style: &NarrativeStyle,
) -> Result<Vec<TextRun>, CertificateError> {
    let start = event.start_date.ok_or_else(|| {
        CertificateError::Validation(format!("event {} has no start date", event.id))
    })?;
    let words = wording(locale);
    let dates = locale.format_date_range(start, event.end_date);

    let plain = |text: String| TextRun::new(text, FontRole::Body, style.size, style.text);
    let bold = |text: String| TextRun::new(text, FontRole::BodyBold, style.size, style.emphasis);

    let mut runs = vec![
        plain(words.opening.to_string()),
        bold(format!("{},", participant_name.trim())),
        plain(words.participated.to_string()),
        bold(format!("{},", event.name.trim())),
        plain(format!("{}{dates},", words.held)),
        plain(format!(
            "{}{}{}",
            words.duration, event.duration_minutes, words.minutes
        )),
    ];

    let instructor = event
        .instructor
        .as_deref()
        .map(|name| name.trim().trim_end_matches('.').trim_end())
        .filter(|name| !name.is_empty());

    match instructor {
        Some(instructor) => {
            runs.push(plain(words.instructed_by.to_string()));
            runs.push(bold(format!("{instructor}.")));
        }
        None => {
            if let Some(last) = runs.last_mut() {
                last.text.push('.');
            }
        }
    }

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn event(instructor: Option<&str>) -> Event {
        Event {
            id: 1,
            name: "Respiração Consciente".to_string(),
            organization_id: None,
            start_date: Some(date(2025, 12, 29)),
            end_date: None,
            duration_minutes: 90,
            instructor: instructor.map(str::to_string),
            template_id: None,
            deleted_at: None,
        }
    }

    fn style() -> NarrativeStyle {
        NarrativeStyle {
            size: Pt(16.0),
            text: colours::BLACK,
            emphasis: Colour::new_rgb(0.6, 0.7, 0.6),
        }
    }

    fn sentence(runs: &[TextRun]) -> String {
        runs.iter().map(|r| r.text.as_str()).collect()
    }

    #[test]
    fn formats_portuguese_dates() {
        assert_eq!(Locale::Pt.format_date(date(2025, 12, 29)), "29 de dezembro de 2025");
        assert_eq!(Locale::Pt.format_date(date(2026, 3, 1)), "1 de março de 2026");
        assert_eq!(
            Locale::Pt.format_date_range(date(2025, 12, 29), Some(date(2025, 12, 30))),
            "29 de dezembro de 2025 a 30 de dezembro de 2025"
        );
        assert_eq!(
            Locale::Pt.format_date_range(date(2025, 12, 29), Some(date(2025, 12, 29))),
            "29 de dezembro de 2025"
        );
    }

    #[test]
    fn formats_english_dates() {
        assert_eq!(
            Locale::En.format_date_range(date(2025, 12, 29), Some(date(2026, 1, 2))),
            "29 December 2025 to 2 January 2026"
        );
    }

    #[test]
    fn ends_with_one_period_without_instructor() {
        let runs = body_runs(Locale::Pt, "Maria Silva", &event(None), &style()).expect("valid");
        let text = sentence(&runs);
        assert_eq!(
            text,
            "Certificamos que Maria Silva, participou no evento Respiração Consciente, \
             realizado a 29 de dezembro de 2025, com a duração de 90 minutos."
        );
        assert!(!text.contains(",."));
        assert_eq!(runs.len(), 6);
    }

    #[test]
    fn appends_instructor_clause() {
        let runs =
            body_runs(Locale::Pt, "Maria Silva", &event(Some("Ana Rita.")), &style()).expect("valid");
        let text = sentence(&runs);
        assert!(text.ends_with("com a duração de 90 minutos, ministrado por Ana Rita."));
        assert!(!text.contains(".."));

        let last = runs.last().expect("has runs");
        assert_eq!(last.font, FontRole::BodyBold);
        assert_eq!(last.colour, style().emphasis);
    }

    #[test]
    fn blank_instructor_counts_as_absent() {
        let runs = body_runs(Locale::En, "Maria", &event(Some("   ")), &style()).expect("valid");
        assert!(sentence(&runs).ends_with("with a duration of 90 minutes."));
    }

    #[test]
    fn names_are_emphasised() {
        let runs = body_runs(Locale::Pt, "Maria", &event(None), &style()).expect("valid");
        let emphasised: Vec<_> = runs
            .iter()
            .filter(|r| r.font == FontRole::BodyBold)
            .map(|r| r.text.as_str())
            .collect();
        assert_eq!(emphasised, vec!["Maria,", "Respiração Consciente,"]);
    }

    #[test]
    fn missing_start_date_is_a_validation_error() {
        let mut event = event(None);
        event.start_date = None;
        assert!(matches!(
            body_runs(Locale::Pt, "Maria", &event, &style()),
            Err(CertificateError::Validation(_))
        ));
    }
}
