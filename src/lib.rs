//! Lays plain-text clinical notes out onto fixed-size pages and renders them
//! as PDF documents.
//!
//! Notes are split into sections on their headers (SOAP headers by default),
//! body text is greedily word-wrapped to the printable width, and lines flow
//! across pages with a title block on the first page and a timestamp footer on
//! the last. Layout is independent of the output: anything implementing
//! [PageSink] can receive the pages, and [Document] renders them to PDF.
//!
//! ```
//! use chrono::NaiveDate;
//! use note_pdf::{Document, NoteStyle, PageGeometry};
//!
//! let generated_at = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap().and_hms_opt(9, 30, 0).unwrap();
//! let doc = Document::from_note(
//!     "Subjective: Cough for three days.\nAssessment: Likely viral.\nPlan: Rest and fluids.",
//!     PageGeometry::default(),
//!     NoteStyle::default(),
//!     generated_at,
//! )
//! .unwrap();
//! assert_eq!(doc.page_count(), 1);
//!
//! let mut pdf: Vec<u8> = Vec::new();
//! doc.write(&mut pdf).unwrap();
//! assert!(pdf.starts_with(b"%PDF-"));
//! ```

mod colour;
pub use colour::*;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod geometry;
pub use geometry::*;

mod info;
pub use info::*;

/// Splitting, wrapping and paginating notes
pub mod layout;
pub use layout::NoteStyle;

mod outline;
pub use outline::*;

mod page;
pub use page::*;

pub(crate) mod refs;

mod sink;
pub use sink::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
