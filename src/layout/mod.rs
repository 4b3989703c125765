//! Laying notes out onto pages.
//!
//! A note goes through three steps:
//!
//! 1. [`SectionSplitter`](crate::layout::SectionSplitter) partitions the raw
//!    text into labelled [`Section`](crate::layout::Section)s.
//! 2. [`wrap_line`](crate::layout::wrap_line) greedily breaks every body line
//!    so it stays narrower than the printable width.
//! 3. [`Paginator`](crate::layout::Paginator) walks the sections with a
//!    [`PageCursor`](crate::layout::PageCursor), breaking to a new page before
//!    any line that would cross the bottom margin, and produces a
//!    [`Layout`](crate::layout::Layout) that can be replayed into any
//!    [`PageSink`](crate::PageSink).
//!
//! # Example
//!
//! ```
//! use chrono::Local;
//! use note_pdf::{Document, FontPair, NoteStyle, PageGeometry};
//! use note_pdf::layout::Paginator;
//!
//! let fonts = FontPair::default();
//! let paginator = Paginator::for_fonts(PageGeometry::default(), NoteStyle::default(), fonts)
//!     .expect("default geometry is valid");
//!
//! let mut doc = Document::new(fonts);
//! paginator
//!     .paginate("Assessment: Likely viral.\nPlan: Rest and fluids.", Local::now().naive_local(), &mut doc)
//!     .expect("note fits");
//!
//! let mut pdf: Vec<u8> = Vec::new();
//! doc.write(&mut pdf).expect("can render PDF");
//! ```

mod cursor;
mod paginate;
mod sections;
mod style;
mod wrap;

pub use cursor::*;
pub use paginate::*;
pub use sections::*;
pub use style::*;
pub use wrap::*;
