use crate::colour::Colour;
use crate::font::FontRef;
use crate::units::Pt;

/// Receives the pages and text draws produced by the paginator.
///
/// Pages are requested one at a time, strictly in order, and only once the
/// first draw for that page is known; draws on the same page arrive in paint
/// order. Coordinates are PDF user space (origin bottom-left) and `y` is the
/// text baseline.
pub trait PageSink {
    /// A handle to a page created by this sink
    type Page: Copy;

    /// Append a new, empty page of the given size
    fn create_page(&mut self, width: Pt, height: Pt) -> Self::Page;

    /// Draw a single line of text on a page previously returned by [PageSink::create_page]
    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        page: Self::Page,
        x: Pt,
        y: Pt,
        text: &str,
        font: FontRef,
        size: Pt,
        colour: Colour,
    );

    /// Register a navigation entry (e.g. a PDF bookmark) pointing at a page.
    /// Sinks without a navigation structure can ignore these.
    fn add_bookmark(&mut self, _page: Self::Page, _title: &str) {}
}
