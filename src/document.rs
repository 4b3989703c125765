use crate::{
    colour::Colour,
    font::{FontPair, FontRef},
    geometry::PageGeometry,
    info::Info,
    layout::{NoteStyle, Paginator},
    outline::Outline,
    page::{Page, TextSpan},
    refs::{ObjectReferences, RefType},
    sink::PageSink,
    units::Pt,
    NoteError,
};
use chrono::NaiveDateTime;
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Name, Pdf, Ref};
use std::{fs::File, io::BufWriter, io::Write, path::Path};
use tracing::{info, warn};

#[derive(Default)]
/// A document stores every page drawn into it, then renders it out as a PDF
/// with a call to [Document::write] or [Document::save]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: FontPair,
    pub outline: Outline,
}

impl Document {
    /// Create an empty document drawing with the given fonts
    pub fn new(fonts: FontPair) -> Document {
        Document {
            fonts,
            ..Document::default()
        }
    }

    /// Split, lay out and draw a note into a fresh document using the
    /// default Helvetica pair, measuring text with the same pair. The
    /// document's info block takes its title from the style and its creation
    /// date from `generated_at`.
    pub fn from_note(
        note: &str,
        geometry: PageGeometry,
        style: NoteStyle,
        generated_at: NaiveDateTime,
    ) -> Result<Document, NoteError> {
        let fonts = FontPair::default();
        let mut info = Info::new();
        info.title(&style.title).created(generated_at);

        let paginator = Paginator::for_fonts(geometry, style, fonts)?;
        let mut doc = Document::new(fonts);
        doc.set_info(info);
        paginator.paginate(note, generated_at, &mut doc)?;
        Ok(doc)
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// The page at a 0-based position in the document
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.page_order
            .get(page_index)
            .and_then(|id| self.pages.get(*id))
    }

    /// Get the 0-based index of a page given its ID
    pub fn index_of_page(&self, page: Id<Page>) -> Option<usize> {
        self.page_order.iter().position(|p| *p == page)
    }

    /// Write the entire document to the writer. The whole document is rendered
    /// in memory first, then written out in one go.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), NoteError> {
        let Document {
            info,
            pages,
            page_order,
            fonts,
            outline,
        } = self;

        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for font in [FontRef::Regular, FontRef::Bold] {
            let id = refs.gen(RefType::Font(font));
            writer
                .type1_font(id)
                .base_font(Name(fonts.get(font).base_name().as_bytes()))
                .pair(Name(b"Encoding"), Name(b"WinAnsiEncoding"));
        }

        for (page_index, id) in page_order.iter().enumerate() {
            let page = pages.get(*id).ok_or(NoteError::PageMissing)?;
            page.write(&mut refs, page_index, &mut writer)?;
        }

        if !outline.is_empty() {
            outline.write(&mut refs, &mut writer);
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines) = refs.get(RefType::Outlines) {
            catalog.outlines(outlines);
        }
        catalog.finish();

        let bytes = writer.finish();
        info!(
            pages = page_order.len(),
            bookmarks = outline.entries.len(),
            bytes = bytes.len(),
            "wrote PDF document"
        );
        w.write_all(bytes.as_slice()).map_err(Into::into)
    }

    /// Write the document to a file at `path`, creating or truncating it
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<(), NoteError> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        self.write(&mut w)?;
        w.flush()?;
        Ok(())
    }
}

impl PageSink for Document {
    type Page = Id<Page>;

    fn create_page(&mut self, width: Pt, height: Pt) -> Id<Page> {
        let id = self.pages.alloc(Page::new(width, height));
        self.page_order.push(id);
        id
    }

    fn draw_text(
        &mut self,
        page: Id<Page>,
        x: Pt,
        y: Pt,
        text: &str,
        font: FontRef,
        size: Pt,
        colour: Colour,
    ) {
        let Some(target) = self.pages.get_mut(page) else {
            warn!(page = page.index(), text, "dropped draw on a page this document doesn't own");
            return;
        };
        target.add_span(TextSpan {
            text: text.to_string(),
            font,
            size,
            colour,
            coords: (x, y),
        });
    }

    fn add_bookmark(&mut self, page: Id<Page>, title: &str) {
        if let Some(page_index) = self.index_of_page(page) {
            self.outline.add_bookmark(page_index, title);
        }
    }
}
