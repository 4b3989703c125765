use chrono::NaiveDateTime;
use tracing::debug;

use super::cursor::PageCursor;
use super::sections::{Section, SectionSplitter};
use super::style::NoteStyle;
use super::wrap::wrap_text;
use crate::colour::Colour;
use crate::error::NoteError;
use crate::font::{FontMetrics, FontPair, FontRef, StandardFont};
use crate::geometry::{PageGeometry, PageSize};
use crate::sink::PageSink;
use crate::units::Pt;

const FOOTER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A single line of text placed on a page
#[derive(Clone, PartialEq, Debug)]
pub struct DrawCommand {
    pub page_index: usize,
    pub x: Pt,
    /// Baseline, in PDF user space
    pub y: Pt,
    pub text: String,
    pub font: FontRef,
    pub size: Pt,
    pub colour: Colour,
}

/// A navigation entry for a titled section
#[derive(Clone, PartialEq, Debug)]
pub struct Bookmark {
    pub page_index: usize,
    pub title: String,
}

/// A fully laid out note: every draw in paint order, tagged with its page
#[derive(Clone, PartialEq, Debug)]
pub struct Layout {
    pub page_size: PageSize,
    pub page_count: usize,
    pub commands: Vec<DrawCommand>,
    pub bookmarks: Vec<Bookmark>,
}

impl Layout {
    /// The draws on one page, in paint order
    pub fn commands_on(&self, page_index: usize) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(move |command| command.page_index == page_index)
    }

    /// Replay the layout into a page sink. The first page is created up front;
    /// every later page is created just before its first draw. Returns the
    /// sink's handles for all pages, in order.
    pub fn emit<S: PageSink>(&self, sink: &mut S) -> Vec<S::Page> {
        let (width, height) = self.page_size;
        let mut pages: Vec<S::Page> = Vec::with_capacity(self.page_count);
        pages.push(sink.create_page(width, height));

        for command in self.commands.iter() {
            while pages.len() <= command.page_index {
                pages.push(sink.create_page(width, height));
            }
            sink.draw_text(
                pages[command.page_index],
                command.x,
                command.y,
                &command.text,
                command.font,
                command.size,
                command.colour,
            );
        }

        for bookmark in self.bookmarks.iter() {
            if let Some(&page) = pages.get(bookmark.page_index) {
                sink.add_bookmark(page, &bookmark.title);
            }
        }

        pages
    }
}

/// Lays notes out onto fixed-size pages.
///
/// The first page opens with the style's title block. Each section then gets
/// its header (bold) followed by its body wrapped to the printable width
/// (regular), with a gap after every section. Lines that would cross the
/// bottom margin move to a new page first. A timestamp footer closes the last
/// page.
///
/// Regular text is measured with `regular` metrics and headers and the title
/// with `bold`. The title block, headers and footer are drawn as single
/// lines, so each must be narrower than the printable width or layout fails
/// with [NoteError::LineTooWide]. When drawing into a [crate::Document], build
/// the paginator with [Paginator::for_fonts] from the document's [FontPair].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use note_pdf::{FontPair, NoteStyle, PageGeometry};
/// use note_pdf::layout::Paginator;
///
/// let paginator = Paginator::for_fonts(PageGeometry::default(), NoteStyle::default(), FontPair::default()).unwrap();
/// let generated_at = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// let layout = paginator
///     .layout_note("Subjective: Patient reports cough.\nPlan: Rest and fluids.", generated_at)
///     .unwrap();
///
/// assert_eq!(layout.page_count, 1);
/// assert_eq!(layout.bookmarks.len(), 2);
/// assert_eq!(layout.commands.last().unwrap().text, "Generated on 2025-03-14 09:30");
/// ```
#[derive(Clone, Debug)]
pub struct Paginator<M> {
    geometry: PageGeometry,
    style: NoteStyle,
    regular: M,
    bold: M,
    splitter: SectionSplitter,
}

impl<M: FontMetrics + Clone> Paginator<M> {
    /// Create a paginator measuring regular and bold text with the same metrics
    pub fn new(geometry: PageGeometry, style: NoteStyle, metrics: M) -> Result<Paginator<M>, NoteError> {
        Paginator::with_faces(geometry, style, metrics.clone(), metrics)
    }
}

impl Paginator<StandardFont> {
    /// Create a paginator measuring with the fonts a [crate::Document] built
    /// from `fonts` draws with
    pub fn for_fonts(geometry: PageGeometry, style: NoteStyle, fonts: FontPair) -> Result<Paginator<StandardFont>, NoteError> {
        Paginator::with_faces(geometry, style, fonts.regular, fonts.bold)
    }
}

impl<M: FontMetrics> Paginator<M> {
    /// Create a paginator, failing fast if the geometry or style can't hold
    /// text, or if the title, subtitle or default SOAP headers are too wide
    pub fn with_faces(geometry: PageGeometry, style: NoteStyle, regular: M, bold: M) -> Result<Paginator<M>, NoteError> {
        geometry.validate()?;
        style.validate(&geometry)?;
        let paginator = Paginator {
            geometry,
            style,
            regular,
            bold,
            splitter: SectionSplitter::default(),
        };

        let style = &paginator.style;
        paginator.check_single_line(&style.title, FontRef::Bold, style.title_size)?;
        paginator.check_single_line(&style.subtitle, FontRef::Regular, style.subtitle_size)?;
        paginator.check_labels(&paginator.splitter)?;
        Ok(paginator)
    }

    /// Use a different section splitter for [Paginator::layout_note] and
    /// [Paginator::paginate]. Fails if any of its labels is too wide to draw
    /// as a header.
    pub fn with_splitter(mut self, splitter: SectionSplitter) -> Result<Paginator<M>, NoteError> {
        self.check_labels(&splitter)?;
        self.splitter = splitter;
        Ok(self)
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn style(&self) -> &NoteStyle {
        &self.style
    }

    pub fn splitter(&self) -> &SectionSplitter {
        &self.splitter
    }

    /// Lay out already-split sections. Nothing is drawn; the result can be
    /// inspected or replayed into any [PageSink].
    pub fn layout(&self, sections: &[Section], generated_at: NaiveDateTime) -> Result<Layout, NoteError> {
        let style = &self.style;
        let footer = format!(
            "{} {}",
            style.footer_label,
            generated_at.format(FOOTER_TIMESTAMP_FORMAT)
        );
        let footer = footer.trim();
        self.check_single_line(footer, FontRef::Regular, style.footer_size)?;

        let mut setter = Typesetter::new(&self.geometry);
        setter.title_block(style);

        for section in sections.iter() {
            if let Some(header) = section.header() {
                self.check_single_line(header, FontRef::Bold, style.header_size)?;
                let page_index = setter.line(
                    header,
                    FontRef::Bold,
                    style.header_size,
                    style.header_colour,
                    style.header_line_height(),
                );
                setter.bookmarks.push(Bookmark {
                    page_index,
                    title: header.to_string(),
                });
            }

            let lines = wrap_text(
                section.body(),
                &self.regular,
                style.body_size,
                self.geometry.printable_width(),
            )?;
            for line in lines.iter() {
                setter.line(
                    line,
                    FontRef::Regular,
                    style.body_size,
                    style.body_colour,
                    style.body_line_height(),
                );
            }

            setter.cursor = setter.cursor.gap(style.section_gap);
        }

        setter.footer(footer, style);

        let layout = setter.finish(self.geometry.size);
        debug!(
            sections = sections.len(),
            pages = layout.page_count,
            draws = layout.commands.len(),
            "laid out note"
        );
        Ok(layout)
    }

    /// Split a raw note into sections and lay it out
    pub fn layout_note(&self, note: &str, generated_at: NaiveDateTime) -> Result<Layout, NoteError> {
        let sections = self.splitter.split(note);
        self.layout(&sections, generated_at)
    }

    /// Split, lay out and emit a note into `sink`. The sink is only touched
    /// once the whole layout has succeeded.
    pub fn paginate<S: PageSink>(
        &self,
        note: &str,
        generated_at: NaiveDateTime,
        sink: &mut S,
    ) -> Result<Vec<S::Page>, NoteError> {
        let layout = self.layout_note(note, generated_at)?;
        Ok(layout.emit(sink))
    }

    /// Lines that are never wrapped must be strictly narrower than the
    /// printable width
    fn check_single_line(&self, text: &str, font: FontRef, size: Pt) -> Result<(), NoteError> {
        let metrics = match font {
            FontRef::Regular => &self.regular,
            FontRef::Bold => &self.bold,
        };
        let width = metrics.width_of(text, size);
        let max_width = self.geometry.printable_width();
        if width < max_width {
            Ok(())
        } else {
            Err(NoteError::LineTooWide {
                text: text.to_string(),
                width,
                max_width,
            })
        }
    }

    fn check_labels(&self, splitter: &SectionSplitter) -> Result<(), NoteError> {
        for label in splitter.labels() {
            self.check_single_line(label, FontRef::Bold, self.style.header_size)?;
        }
        Ok(())
    }
}

/// Layout state for one run: the cursor plus everything placed so far
struct Typesetter<'g> {
    geometry: &'g PageGeometry,
    cursor: PageCursor,
    commands: Vec<DrawCommand>,
    bookmarks: Vec<Bookmark>,
}

impl<'g> Typesetter<'g> {
    fn new(geometry: &'g PageGeometry) -> Typesetter<'g> {
        Typesetter {
            geometry,
            cursor: PageCursor::first_page(geometry, Pt(0.0)),
            commands: Vec::new(),
            bookmarks: Vec::new(),
        }
    }

    /// Draw the title and subtitle on the first page and move the cursor below
    /// the space reserved for them
    fn title_block(&mut self, style: &NoteStyle) {
        let top = self.geometry.top();
        let x = self.geometry.left();
        if !style.title.is_empty() {
            self.push(0, x, top, &style.title, FontRef::Bold, style.title_size, style.title_colour);
        }
        if !style.subtitle.is_empty() {
            self.push(
                0,
                x,
                top - style.title_line_height(),
                &style.subtitle,
                FontRef::Regular,
                style.subtitle_size,
                style.subtitle_colour,
            );
        }
        self.cursor = PageCursor::first_page(self.geometry, style.title_block_height());
    }

    /// Place one line at the cursor, breaking pages as needed. Returns the page
    /// the line landed on.
    fn line(&mut self, text: &str, font: FontRef, size: Pt, colour: Colour, line_height: Pt) -> usize {
        let (placement, next) = self.cursor.place(line_height, self.geometry);
        if placement.new_page {
            debug!(page = placement.page_index, "page break");
        }
        self.push(
            placement.page_index,
            self.geometry.left(),
            placement.y,
            text,
            font,
            size,
            colour,
        );
        self.cursor = next;
        placement.page_index
    }

    /// The footer sits inside the bottom margin of whatever page is current
    fn footer(&mut self, text: &str, style: &NoteStyle) {
        let page_index = self.cursor.page_index;
        let y = self.geometry.bottom() / 2.0;
        self.push(
            page_index,
            self.geometry.left(),
            y,
            text,
            FontRef::Regular,
            style.footer_size,
            style.footer_colour,
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn push(&mut self, page_index: usize, x: Pt, y: Pt, text: &str, font: FontRef, size: Pt, colour: Colour) {
        self.commands.push(DrawCommand {
            page_index,
            x,
            y,
            text: text.to_string(),
            font,
            size,
            colour,
        });
    }

    fn finish(self, page_size: PageSize) -> Layout {
        Layout {
            page_size,
            page_count: self.cursor.page_index + 1,
            commands: self.commands,
            bookmarks: self.bookmarks,
        }
    }
}
