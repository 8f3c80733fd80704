//! Content-stream rendering: turns page contents into low-level PDF operators.

use crate::colour::Colour;
use crate::font::Font;
use crate::page::{ImageLayout, PageContents, Shape, SpanFont, SpanLayout, StrokeLayout};
use id_arena::Arena;
use std::io::Write;
use std::sync::Arc;

/// Renders page contents to a PDF content stream, in order, so that later items are
/// painted over earlier ones.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Arc<Font>>,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();

    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => render_text_spans(&mut content, spans, fonts)?,
            PageContents::Image(image) => render_image(&mut content, image)?,
            PageContents::Stroke(stroke) => render_stroke(&mut content, stroke)?,
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_image(content: &mut Vec<u8>, image: &ImageLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write!(
        content,
        "{} 0 0 {} {} {} cm\n",
        image.position.width().0,
        image.position.height().0,
        image.position.x1.0,
        image.position.y1.0
    )?;
    write!(content, "/I{} Do\n", image.image_id.index())?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_stroke(content: &mut Vec<u8>, stroke: &StrokeLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write_stroke_colour(content, stroke.colour)?;
    write!(content, "{} w\n", stroke.line_width.0)?;
    match stroke.shape {
        Shape::Rect(rect) => write!(
            content,
            "{} {} {} {} re S\n",
            rect.x1.0,
            rect.y1.0,
            rect.width().0,
            rect.height().0
        )?,
        Shape::Line { from, to } => write!(
            content,
            "{} {} m {} {} l S\n",
            from.0 .0, from.1 .0, to.0 .0, to.1 .0
        )?,
    }
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    fonts: &Arena<Arc<Font>>,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;

    write_font(content, current_font)?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write_font(content, current_font)?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        let font = fonts.get(current_font.id).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, "span refers to unknown font")
        })?;

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0 .0, span.coords.1 .0)?;
        write!(content, "<")?;
        for byte in font.encode(&span.text) {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_font(content: &mut Vec<u8>, font: SpanFont) -> Result<(), std::io::Error> {
    write!(content, "/F{} {} Tf\n", font.id.index(), font.size.0)
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} K\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::font::BuiltinFont;
    use crate::rect::Rect;
    use crate::units::Pt;

    #[test]
    fn renders_in_insertion_order() {
        let mut fonts: Arena<Arc<Font>> = Arena::new();
        let helvetica = fonts.alloc(Arc::new(Font::Builtin(BuiltinFont::Helvetica)));

        let contents = vec![
            PageContents::Stroke(StrokeLayout {
                shape: Shape::Rect(Rect::from_origin(Pt(1.0), Pt(2.0), Pt(3.0), Pt(4.0))),
                colour: colours::BLACK,
                line_width: Pt(3.0),
            }),
            PageContents::Text(vec![SpanLayout {
                text: "Hi".to_string(),
                font: SpanFont {
                    id: helvetica,
                    size: Pt(12.0),
                },
                colour: Colour::new_rgb(1.0, 0.0, 0.0),
                coords: (Pt(10.0), Pt(20.0)),
            }]),
        ];

        let rendered = render_contents(&contents, &fonts).expect("can render");
        let rendered = String::from_utf8(rendered).expect("content is ascii");

        let rect = rendered.find("1 2 3 4 re S").expect("rect rendered");
        let text = rendered.find("<4869> Tj").expect("text rendered");
        assert!(rect < text);
        assert!(rendered.contains("/F0 12 Tf"));
        assert!(rendered.contains("1 0 0 rg"));
        assert!(rendered.contains("0 G"));
    }
}
