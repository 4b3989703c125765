use crate::geometry::PageGeometry;
use crate::units::Pt;

/// The paginator's position in the document: which page it is on, and the
/// baseline the next line will be drawn at. `y` is in PDF user space, so it
/// starts near the top of the page and decreases as lines are placed.
///
/// Every transition consumes the cursor and returns the next one; nothing is
/// drawn here, which keeps page-break decisions testable on their own.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PageCursor {
    pub page_index: usize,
    pub y: Pt,
}

/// Where a single line ended up
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Placement {
    pub page_index: usize,
    pub y: Pt,
    /// The line did not fit on the previous page and starts a new one
    pub new_page: bool,
}

impl PageCursor {
    /// The cursor on the first page, below a block of `reserved` height that
    /// is drawn separately (the title block)
    pub fn first_page(geometry: &PageGeometry, reserved: Pt) -> PageCursor {
        PageCursor {
            page_index: 0,
            y: geometry.top() - reserved,
        }
    }

    /// Whether a line of `line_height` can be placed without dropping below
    /// the bottom margin
    pub fn fits(&self, line_height: Pt, geometry: &PageGeometry) -> bool {
        self.y - line_height >= geometry.bottom()
    }

    /// Move to the top of the next page
    pub fn page_break(self, geometry: &PageGeometry) -> PageCursor {
        PageCursor {
            page_index: self.page_index + 1,
            y: geometry.top(),
        }
    }

    /// Leave vertical space without checking for overflow; the next placed
    /// line does its own check
    pub fn gap(self, gap: Pt) -> PageCursor {
        PageCursor {
            y: self.y - gap,
            ..self
        }
    }

    /// Place one line of `line_height`, breaking to a new page first if the
    /// line would cross the bottom margin. Returns where the line goes and the
    /// cursor for the line after it.
    pub fn place(self, line_height: Pt, geometry: &PageGeometry) -> (Placement, PageCursor) {
        let (cursor, new_page) = if self.fits(line_height, geometry) {
            (self, false)
        } else {
            (self.page_break(geometry), true)
        };

        let placement = Placement {
            page_index: cursor.page_index,
            y: cursor.y,
            new_page,
        };
        (placement, cursor.gap(line_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Margins;

    fn geometry() -> PageGeometry {
        // printable height 200pt, top baseline at 250pt, bottom at 50pt
        PageGeometry::new((Pt(300.0), Pt(300.0)), Margins::all(Pt(50.0)))
    }

    #[test]
    fn first_page_reserves_the_title_block() {
        let cursor = PageCursor::first_page(&geometry(), Pt(40.0));
        assert_eq!(cursor, PageCursor { page_index: 0, y: Pt(210.0) });
    }

    #[test]
    fn placing_a_line_moves_down_by_its_height() {
        let (placement, next) = PageCursor::first_page(&geometry(), Pt(0.0)).place(Pt(20.0), &geometry());
        assert_eq!(
            placement,
            Placement {
                page_index: 0,
                y: Pt(250.0),
                new_page: false
            }
        );
        assert_eq!(next, PageCursor { page_index: 0, y: Pt(230.0) });
    }

    #[test]
    fn a_line_ending_exactly_on_the_bottom_margin_fits() {
        let cursor = PageCursor { page_index: 0, y: Pt(70.0) };
        let (placement, next) = cursor.place(Pt(20.0), &geometry());
        assert!(!placement.new_page);
        assert_eq!(next.y, Pt(50.0));
    }

    #[test]
    fn overflowing_line_breaks_before_it_is_placed() {
        let cursor = PageCursor { page_index: 2, y: Pt(65.0) };
        let (placement, next) = cursor.place(Pt(20.0), &geometry());
        assert_eq!(
            placement,
            Placement {
                page_index: 3,
                y: Pt(250.0),
                new_page: true
            }
        );
        assert_eq!(next, PageCursor { page_index: 3, y: Pt(230.0) });
    }

    #[test]
    fn gaps_do_not_break_pages() {
        let cursor = PageCursor { page_index: 0, y: Pt(55.0) }.gap(Pt(30.0));
        assert_eq!(cursor, PageCursor { page_index: 0, y: Pt(25.0) });
        // the next line notices the overflow
        let (placement, _) = cursor.place(Pt(10.0), &geometry());
        assert!(placement.new_page);
    }
}
