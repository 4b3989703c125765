//! Page sizes, margins, and the validated geometry the paginator lays text into.
//!
//! All sizes are (width, height) in portrait orientation and expressed in
//! points. Coordinates follow PDF user space: the origin is the bottom-left
//! corner of the page and `y` grows upwards.
//!
//! # Example
//!
//! ```
//! use note_pdf::{In, Margins, PageGeometry, pagesize};
//!
//! let geometry = PageGeometry::new(pagesize::A4, Margins::all(In(1.0)));
//! assert!(geometry.validate().is_ok());
//! assert_eq!(geometry.top(), geometry.height() - geometry.margins.top);
//! ```

use crate::error::NoteError;
use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

/// Common paper formats
pub mod pagesize {
    use super::PageSize;
    use crate::units::Pt;

    pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
    pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
    pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
    pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));
}

/// Margins bound the printable area of a page. Text is placed at the left
/// margin and never below the bottom margin; the top margin is where the
/// first baseline of every page sits.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Pt, right: Pt, bottom: Pt, left: Pt) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Pt>>(value: D) -> Margins {
        let value: Pt = value.into();
        Margins::trbl(value, value, value, value)
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric<V: Into<Pt>, H: Into<Pt>>(vertical: V, horizontal: H) -> Margins {
        let (vertical, horizontal) = (vertical.into(), horizontal.into());
        Margins::trbl(vertical, horizontal, vertical, horizontal)
    }
}

/// A fixed page size together with its margins
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    pub size: PageSize,
    pub margins: Margins,
}

impl Default for PageGeometry {
    /// US letter with 3/4 inch margins all round
    fn default() -> Self {
        PageGeometry::new(pagesize::LETTER, Margins::all(In(0.75)))
    }
}

impl PageGeometry {
    pub fn new(size: PageSize, margins: Margins) -> PageGeometry {
        PageGeometry { size, margins }
    }

    pub fn width(&self) -> Pt {
        self.size.0
    }

    pub fn height(&self) -> Pt {
        self.size.1
    }

    /// Width available to a line of text between the left and right margins
    pub fn printable_width(&self) -> Pt {
        self.size.0 - self.margins.left - self.margins.right
    }

    /// Height between the top and bottom margins
    pub fn printable_height(&self) -> Pt {
        self.size.1 - self.margins.top - self.margins.bottom
    }

    /// The baseline of the first line on a fresh page
    pub fn top(&self) -> Pt {
        self.size.1 - self.margins.top
    }

    /// The lowest position any line may reach
    pub fn bottom(&self) -> Pt {
        self.margins.bottom
    }

    /// The x coordinate every line starts at
    pub fn left(&self) -> Pt {
        self.margins.left
    }

    /// Checks that the page has a positive size, non-negative margins and a
    /// non-empty printable area
    pub fn validate(&self) -> Result<(), NoteError> {
        if !self.width().is_positive() || !self.height().is_positive() {
            return Err(NoteError::MalformedGeometry(format!(
                "page size must be positive, got {}x{}",
                self.width(),
                self.height()
            )));
        }

        let Margins {
            top,
            right,
            bottom,
            left,
        } = self.margins;
        if [top, right, bottom, left]
            .iter()
            .any(|m| !m.0.is_finite() || m.0 < 0.0)
        {
            return Err(NoteError::MalformedGeometry(format!(
                "margins must be non-negative, got {:?}",
                self.margins
            )));
        }

        if !self.printable_width().is_positive() {
            return Err(NoteError::MalformedGeometry(format!(
                "margins leave no printable width on a {}pt wide page",
                self.width()
            )));
        }
        if !self.printable_height().is_positive() {
            return Err(NoteError::MalformedGeometry(format!(
                "margins leave no printable height on a {}pt tall page",
                self.height()
            )));
        }

        Ok(())
    }
}
