use crate::colour::Colour;
use crate::units::Pt;

/// The typographic role of a run of text. Roles are mapped onto concrete faces by a
/// [`FontSet`](crate::FontSet), which lets branding swap faces without touching layout.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontRole {
    Title,
    Body,
    BodyBold,
    Signature,
}

/// A contiguous span of text sharing one font, size and colour
#[derive(Clone, PartialEq, Debug)]
pub struct TextRun {
    pub text: String,
    pub font: FontRole,
    pub size: Pt,
    pub colour: Colour,
}

impl TextRun {
    pub fn new<S: Into<String>>(text: S, font: FontRole, size: Pt, colour: Colour) -> TextRun {
        TextRun {
            text: text.into(),
            font,
            size,
            colour,
        }
    }
}

/// Measures rendered text widths.
///
/// Wrapping and drawing must measure with the same implementation, otherwise centred
/// lines drift by however much the two measurements disagree.
pub trait MeasureText {
    /// Width of `text` set in the face assigned to `font` at `size`
    fn text_width(&self, font: FontRole, size: Pt, text: &str) -> Pt;

    fn run_width(&self, run: &TextRun) -> Pt {
        self.text_width(run.font, run.size, &run.text)
    }
}

impl<M: MeasureText + ?Sized> MeasureText for &M {
    fn text_width(&self, font: FontRole, size: Pt, text: &str) -> Pt {
        (**self).text_width(font, size, text)
    }
}

/// One wrapped line of runs, with its total measured width
#[derive(Clone, PartialEq, Debug)]
pub struct Line {
    runs: Vec<TextRun>,
    width: Pt,
}

impl Line {
    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }

    /// Sum of the measured widths of the runs on this line
    pub fn width(&self) -> Pt {
        self.width
    }

    /// The x coordinate at which to start drawing so that the line is centred on a
    /// canvas `canvas_width` wide
    pub fn centred_start(&self, canvas_width: Pt) -> Pt {
        centred_start(self.width, canvas_width)
    }
}

/// The x coordinate that centres something `width` wide on a canvas `canvas_width` wide
pub fn centred_start(width: Pt, canvas_width: Pt) -> Pt {
    (canvas_width - width) / 2.0
}

/// Greedily packs runs into lines no wider than `max_width`.
///
/// Runs are appended to the current line while the line still fits. When the next run
/// would overflow and the line already holds something, the line is closed and the run
/// starts a new one. Runs are never split: a run wider than `max_width` ends up alone
/// on its own (overflowing) line. Zero-width runs are kept so that styling boundaries
/// survive. Concatenating the runs of the returned lines reproduces `runs` exactly.
pub fn wrap_runs<M: MeasureText + ?Sized>(
    runs: &[TextRun],
    max_width: Pt,
    measure: &M,
) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();
    let mut current: Vec<TextRun> = Vec::new();
    let mut current_width = Pt(0.0);

    for run in runs {
        let width = measure.run_width(run);

        if current_width + width > max_width && !current.is_empty() {
            lines.push(Line {
                runs: std::mem::take(&mut current),
                width: current_width,
            });
            current_width = Pt(0.0);
        }

        current.push(run.clone());
        current_width += width;
    }

    if !current.is_empty() {
        lines.push(Line {
            runs: current,
            width: current_width,
        });
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    /// Every character is half as wide as the font size
    struct Monospace;

    impl MeasureText for Monospace {
        fn text_width(&self, _font: FontRole, size: Pt, text: &str) -> Pt {
            size * 0.5 * text.chars().count() as f32
        }
    }

    fn run(text: &str) -> TextRun {
        TextRun::new(text, FontRole::Body, Pt(10.0), colours::BLACK)
    }

    fn flatten(lines: &[Line]) -> Vec<TextRun> {
        lines.iter().flat_map(|l| l.runs().iter().cloned()).collect()
    }

    /// deterministic pseudo-random run sequences
    fn sequences() -> Vec<Vec<TextRun>> {
        let mut state: u32 = 0x2545_f491;
        let mut next = move || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state
        };

        (0..64)
            .map(|_| {
                let count = 1 + (next() % 12) as usize;
                (0..count)
                    .map(|i| {
                        let len = (next() % 30) as usize;
                        let role = if i % 2 == 0 {
                            FontRole::Body
                        } else {
                            FontRole::BodyBold
                        };
                        TextRun::new("x".repeat(len), role, Pt(10.0), colours::BLACK)
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn empty_input_produces_no_lines() {
        assert!(wrap_runs(&[], Pt(100.0), &Monospace).is_empty());
    }

    #[test]
    fn short_runs_share_a_line() {
        let runs = vec![run("abc"), run("def"), run("gh")];
        let lines = wrap_runs(&runs, Pt(100.0), &Monospace);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width(), Pt(40.0));
        assert_eq!(lines[0].runs(), runs.as_slice());
    }

    #[test]
    fn wraps_when_the_next_run_would_overflow() {
        // 5pt per character, 50pt budget
        let runs = vec![run("aaaaaa"), run("bbbbb"), run("cc")];
        let lines = wrap_runs(&runs, Pt(50.0), &Monospace);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].runs(), &runs[0..1]);
        assert_eq!(lines[0].width(), Pt(30.0));
        assert_eq!(lines[1].runs(), &runs[1..3]);
        assert_eq!(lines[1].width(), Pt(35.0));
    }

    #[test]
    fn exact_fit_does_not_wrap() {
        let runs = vec![run("aaaaa"), run("bbbbb")];
        let lines = wrap_runs(&runs, Pt(50.0), &Monospace);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn oversized_run_sits_alone_unsplit() {
        let long = run(&"w".repeat(40));
        let runs = vec![run("ab"), long.clone(), run("cd")];
        let lines = wrap_runs(&runs, Pt(50.0), &Monospace);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].runs(), &[long]);
        assert!(lines[1].width() > Pt(50.0));
    }

    #[test]
    fn oversized_first_run_does_not_produce_an_empty_line() {
        let runs = vec![run(&"w".repeat(40)), run("a")];
        let lines = wrap_runs(&runs, Pt(50.0), &Monospace);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| !l.runs().is_empty()));
    }

    #[test]
    fn zero_width_runs_are_preserved() {
        let runs = vec![run("aaaa"), run(""), run("bbbb"), run("")];
        let lines = wrap_runs(&runs, Pt(40.0), &Monospace);
        assert_eq!(flatten(&lines), runs);
    }

    #[test]
    fn wrapping_preserves_run_order() {
        for runs in sequences() {
            for budget in [Pt(20.0), Pt(75.0), Pt(150.0), Pt(400.0)] {
                let lines = wrap_runs(&runs, budget, &Monospace);
                assert_eq!(flatten(&lines), runs);
            }
        }
    }

    #[test]
    fn lines_are_greedy_and_within_budget() {
        for runs in sequences() {
            for budget in [Pt(20.0), Pt(75.0), Pt(150.0), Pt(400.0)] {
                let lines = wrap_runs(&runs, budget, &Monospace);
                for (i, line) in lines.iter().enumerate() {
                    let measured: Pt = line.runs().iter().map(|r| Monospace.run_width(r)).sum();
                    assert_eq!(measured, line.width());

                    if line.runs().len() > 1 || line.width() <= budget {
                        assert!(line.width() <= budget);
                    }

                    if let Some(next) = lines.get(i + 1) {
                        let first = Monospace.run_width(&next.runs()[0]);
                        assert!(line.width() + first > budget);
                    }
                }
            }
        }
    }

    #[test]
    fn can_centre_lines() {
        let lines = wrap_runs(&[run("abcd")], Pt(100.0), &Monospace);
        assert_eq!(lines[0].width(), Pt(20.0));
        assert_eq!(lines[0].centred_start(Pt(100.0)), Pt(40.0));
        assert_eq!(centred_start(Pt(120.0), Pt(100.0)), Pt(-10.0));
    }
}
