use crate::units::Pt;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum NoteError {
    #[error(transparent)]
    /// An I/O error occurred while writing the document
    Io(#[from] std::io::Error),

    #[error("font size must be positive, got {0}pt")]
    /// A font size was zero, negative or not finite
    InvalidFontSize(Pt),

    #[error("maximum line width must be positive, got {0}pt")]
    /// The width available to a line was zero, negative or not finite
    InvalidWidth(Pt),

    #[error("malformed page geometry: {0}")]
    /// The page size, margins or line heights cannot hold any text
    MalformedGeometry(String),

    #[error("character {ch:?} is {width}pt wide and can never fit in {max_width}pt")]
    /// A single character is at least as wide as the line, so no wrapping can place it
    GlyphTooWide { ch: char, width: Pt, max_width: Pt },

    #[error("{text:?} is {width}pt wide and does not fit in {max_width}pt")]
    /// A line that is never wrapped (the title, subtitle, a header or the
    /// footer) is at least as wide as the printable width
    LineTooWide { text: String, width: Pt, max_width: Pt },

    #[error("invalid section header labels: {0}")]
    /// The header label list was empty or contained a blank label
    InvalidHeaderLabels(String),

    #[error(transparent)]
    /// [regex] rejected the pattern built from the header labels
    HeaderPattern(#[from] regex::Error),

    #[error("page is missing from the document")]
    /// A page id in the page order no longer resolves to a page
    PageMissing,
}
