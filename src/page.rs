use crate::colour::Colour;
use crate::font::{encode_win_ansi_str, FontRef};
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::NoteError;
use pdf_writer::{Filter, Finish, Name, Pdf, Rect};
use std::io::Write;

/// A single line of text, drawn with its baseline starting at `coords`
#[derive(Clone, PartialEq, Debug)]
pub struct TextSpan {
    pub text: String,
    pub font: FontRef,
    pub size: Pt,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// A page of a [crate::Document], holding the text drawn on it in paint order
#[derive(Clone, Debug)]
pub struct Page {
    pub width: Pt,
    pub height: Pt,
    pub spans: Vec<TextSpan>,
}

/// The resource name a font reference is registered under on every page
pub(crate) fn font_resource_name(font: FontRef) -> &'static [u8] {
    match font {
        FontRef::Regular => b"F0",
        FontRef::Bold => b"F1",
    }
}

impl Page {
    pub fn new(width: Pt, height: Pt) -> Page {
        Page {
            width,
            height,
            spans: Vec::default(),
        }
    }

    pub fn add_span(&mut self, span: TextSpan) {
        self.spans.push(span);
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Render the page's spans into a raw (uncompressed) content stream.
    /// Font and colour operators are only emitted when they change.
    #[allow(clippy::write_with_newline)]
    pub(crate) fn render(&self) -> Result<Vec<u8>, std::io::Error> {
        let mut content: Vec<u8> = Vec::default();
        let Some(first) = self.spans.first() else {
            return Ok(content);
        };

        let mut current_font: (FontRef, Pt) = (first.font, first.size);
        let mut current_colour: Colour = first.colour;

        write!(&mut content, "q\n")?;
        write_font(&mut content, current_font)?;
        write_colour(&mut content, current_colour)?;

        for span in self.spans.iter() {
            if (span.font, span.size) != current_font {
                current_font = (span.font, span.size);
                write_font(&mut content, current_font)?;
            }
            if span.colour != current_colour {
                current_colour = span.colour;
                write_colour(&mut content, current_colour)?;
            }

            write!(&mut content, "BT\n")?;
            write!(&mut content, "{} {} Td\n", span.coords.0, span.coords.1)?;
            write!(&mut content, "<")?;
            for byte in encode_win_ansi_str(&span.text) {
                write!(&mut content, "{byte:02x}")?;
            }
            write!(&mut content, "> Tj\n")?;
            write!(&mut content, "ET\n")?;
        }

        write!(&mut content, "Q\n")?;
        Ok(content)
    }

    /// Write the page object and its compressed content stream. The page and
    /// font refs must already have been generated.
    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        writer: &mut Pdf,
    ) -> Result<(), NoteError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(NoteError::PageMissing)?;
        let page_tree = refs
            .get(RefType::PageTree)
            .ok_or(NoteError::PageMissing)?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(Rect::new(0.0, 0.0, self.width.0, self.height.0));
        page.parent(page_tree);
        page.contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        for font in [FontRef::Regular, FontRef::Bold] {
            if let Some(font_id) = refs.get(RefType::Font(font)) {
                fonts.pair(Name(font_resource_name(font)), font_id);
            }
        }
        fonts.finish();
        resources.finish();
        page.finish();

        let rendered = self.render()?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&rendered, 6);
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}

#[allow(clippy::write_with_newline)]
fn write_font(content: &mut Vec<u8>, (font, size): (FontRef, Pt)) -> Result<(), std::io::Error> {
    content.write_all(b"/")?;
    content.write_all(font_resource_name(font))?;
    write!(content, " {size} Tf\n")
}

#[allow(clippy::write_with_newline)]
fn write_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;

    fn span(text: &str, font: FontRef, colour: Colour, y: f32) -> TextSpan {
        TextSpan {
            text: text.into(),
            font,
            size: Pt(11.0),
            colour,
            coords: (Pt(54.0), Pt(y)),
        }
    }

    #[test]
    fn empty_page_renders_nothing() {
        let page = Page::new(Pt(612.0), Pt(792.0));
        assert!(page.render().unwrap().is_empty());
    }

    #[test]
    fn renders_text_as_win_ansi_hex() {
        let mut page = Page::new(Pt(612.0), Pt(792.0));
        page.add_span(span("Hi°", FontRef::Regular, colours::BLACK, 700.0));

        let rendered = String::from_utf8(page.render().unwrap()).unwrap();
        assert_eq!(
            rendered,
            "q\n/F0 11 Tf\n0 g\nBT\n54 700 Td\n<4869b0> Tj\nET\nQ\n"
        );
    }

    #[test]
    fn only_emits_font_and_colour_changes() {
        let mut page = Page::new(Pt(612.0), Pt(792.0));
        page.add_span(span("Plan", FontRef::Bold, colours::BLACK, 700.0));
        page.add_span(span("Rest", FontRef::Regular, colours::BLACK, 680.0));
        page.add_span(span("Fluids", FontRef::Regular, colours::BLACK, 660.0));
        page.add_span(span("Soon", FontRef::Regular, colours::ACCENT, 640.0));

        let rendered = String::from_utf8(page.render().unwrap()).unwrap();
        assert_eq!(rendered.matches(" Tf\n").count(), 2);
        assert_eq!(rendered.matches(" g\n").count(), 1);
        assert_eq!(rendered.matches(" rg\n").count(), 1);
        assert_eq!(rendered.matches("BT\n").count(), 4);
    }
}
