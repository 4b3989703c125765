use crate::colour::{colours, Colour};
use crate::error::NoteError;
use crate::geometry::PageGeometry;
use crate::units::Pt;

/// Typography of a rendered note: the fixed title block on the first page,
/// section headers, body text and the closing timestamp footer.
///
/// Line heights are derived from font sizes: `size * line_spacing`.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteStyle {
    /// Drawn in bold at the top of the first page only
    pub title: String,
    /// Drawn under the title; may be empty, in which case its space stays reserved
    pub subtitle: String,
    /// Text placed before the timestamp in the footer
    pub footer_label: String,

    pub title_size: Pt,
    pub subtitle_size: Pt,
    pub header_size: Pt,
    pub body_size: Pt,
    pub footer_size: Pt,

    /// Multiplier from font size to line height
    pub line_spacing: f32,
    /// Extra space after each section, and between the title block and the first section
    pub section_gap: Pt,

    pub title_colour: Colour,
    pub subtitle_colour: Colour,
    pub header_colour: Colour,
    pub body_colour: Colour,
    pub footer_colour: Colour,
}

impl Default for NoteStyle {
    fn default() -> Self {
        NoteStyle {
            title: "Symptom-iSense Summary".into(),
            subtitle: "AI-generated symptom summary. Not a medical diagnosis.".into(),
            footer_label: "Generated on".into(),
            title_size: Pt(18.0),
            subtitle_size: Pt(10.0),
            header_size: Pt(13.0),
            body_size: Pt(11.0),
            footer_size: Pt(8.0),
            line_spacing: 1.4,
            section_gap: Pt(10.0),
            title_colour: colours::ACCENT,
            subtitle_colour: colours::MID_GREY,
            header_colour: colours::BLACK,
            body_colour: colours::DARK_GREY,
            footer_colour: colours::MID_GREY,
        }
    }
}

impl NoteStyle {
    /// Create the default style
    pub fn new() -> NoteStyle {
        NoteStyle::default()
    }

    /// Set the title, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set the subtitle, modifying `self`
    pub fn subtitle<S: ToString>(&mut self, subtitle: S) -> &mut Self {
        self.subtitle = subtitle.to_string();
        self
    }

    /// Set the footer label, modifying `self`
    pub fn footer_label<S: ToString>(&mut self, label: S) -> &mut Self {
        self.footer_label = label.to_string();
        self
    }

    /// Set header and body font sizes together, modifying `self`
    pub fn text_sizes(&mut self, header: Pt, body: Pt) -> &mut Self {
        self.header_size = header;
        self.body_size = body;
        self
    }

    pub fn line_height(&self, size: Pt) -> Pt {
        size * self.line_spacing
    }

    pub fn title_line_height(&self) -> Pt {
        self.line_height(self.title_size)
    }

    pub fn subtitle_line_height(&self) -> Pt {
        self.line_height(self.subtitle_size)
    }

    pub fn header_line_height(&self) -> Pt {
        self.line_height(self.header_size)
    }

    pub fn body_line_height(&self) -> Pt {
        self.line_height(self.body_size)
    }

    /// Space reserved at the top of the first page for the title and subtitle
    pub fn title_block_height(&self) -> Pt {
        self.title_line_height() + self.subtitle_line_height() + self.section_gap
    }

    /// Checks the style can be laid out on pages of the given geometry: all
    /// sizes positive, and every line (and the title block) shorter than the
    /// printable height
    pub fn validate(&self, geometry: &PageGeometry) -> Result<(), NoteError> {
        for size in [
            self.title_size,
            self.subtitle_size,
            self.header_size,
            self.body_size,
            self.footer_size,
        ] {
            if !size.is_positive() {
                return Err(NoteError::InvalidFontSize(size));
            }
        }

        if !self.line_spacing.is_finite() || self.line_spacing <= 0.0 {
            return Err(NoteError::MalformedGeometry(format!(
                "line spacing must be positive, got {}",
                self.line_spacing
            )));
        }
        if !self.section_gap.0.is_finite() || self.section_gap.0 < 0.0 {
            return Err(NoteError::MalformedGeometry(format!(
                "section gap must be non-negative, got {}",
                self.section_gap
            )));
        }

        let printable = geometry.printable_height();
        let tallest = [
            self.header_line_height(),
            self.body_line_height(),
            self.title_block_height(),
        ]
        .into_iter()
        .fold(Pt(0.0), Pt::max);
        if tallest > printable {
            return Err(NoteError::MalformedGeometry(format!(
                "a {tallest}pt line cannot fit in {printable}pt of printable height"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Margins;

    #[test]
    fn line_heights_scale_with_spacing() {
        let mut style = NoteStyle::new();
        style.line_spacing = 1.5;
        style.text_sizes(Pt(12.0), Pt(10.0));
        assert_eq!(style.header_line_height(), Pt(18.0));
        assert_eq!(style.body_line_height(), Pt(15.0));
    }

    #[test]
    fn title_block_covers_title_subtitle_and_gap() {
        let mut style = NoteStyle::new();
        style.line_spacing = 2.0;
        style.title_size = Pt(20.0);
        style.subtitle_size = Pt(10.0);
        style.section_gap = Pt(5.0);
        assert_eq!(style.title_block_height(), Pt(65.0));
    }

    #[test]
    fn setters_chain() {
        let style = NoteStyle::new()
            .title("Visit summary")
            .subtitle("")
            .footer_label("Printed")
            .clone();
        assert_eq!(style.title, "Visit summary");
        assert!(style.subtitle.is_empty());
        assert_eq!(style.footer_label, "Printed");
    }

    #[test]
    fn default_style_fits_default_geometry() {
        assert!(NoteStyle::default().validate(&PageGeometry::default()).is_ok());
    }

    #[test]
    fn rejects_non_positive_sizes() {
        let mut style = NoteStyle::new();
        style.body_size = Pt(0.0);
        assert!(matches!(
            style.validate(&PageGeometry::default()),
            Err(NoteError::InvalidFontSize(_))
        ));
    }

    #[test]
    fn rejects_lines_taller_than_the_page() {
        let tiny = PageGeometry::new((Pt(200.0), Pt(60.0)), Margins::all(Pt(20.0)));
        assert!(matches!(
            NoteStyle::default().validate(&tiny),
            Err(NoteError::MalformedGeometry(_))
        ));
    }
}
