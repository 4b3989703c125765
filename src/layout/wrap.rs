use crate::error::NoteError;
use crate::font::FontMetrics;
use crate::units::Pt;
use tracing::trace;

/// Greedily wraps one logical line of text (no hard newlines) into lines that
/// are each strictly narrower than `max_width` at the given font size.
///
/// Words are the runs between single spaces; empty runs are dropped, so
/// repeated spaces collapse. Words are packed onto a line until the next one
/// would reach `max_width`. A word too wide for a line on its own is sliced
/// at character boundaries, and whatever is left after slicing starts the
/// next line so following words can join it.
///
/// An empty (or all-space) `text` produces no lines at all.
///
/// # Errors
///
/// Fails before measuring anything if `size` or `max_width` is not positive,
/// and fails with [NoteError::GlyphTooWide] if a single character is already
/// at least `max_width` wide.
///
/// # Example
///
/// ```
/// use note_pdf::{Pt, StandardFont};
/// use note_pdf::layout::wrap_line;
///
/// // Courier is 0.6em per character: 6pt at 10pt, so 9 characters fit in 60pt
/// let lines = wrap_line("take fluids and rest", &StandardFont::Courier, Pt(10.0), Pt(60.0)).unwrap();
/// assert_eq!(lines, vec!["take", "fluids", "and rest"]);
/// ```
pub fn wrap_line<M: FontMetrics + ?Sized>(
    text: &str,
    metrics: &M,
    size: Pt,
    max_width: Pt,
) -> Result<Vec<String>, NoteError> {
    check_line_preconditions(size, max_width)?;

    let fits = |candidate: &str| metrics.width_of(candidate, size) < max_width;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split(' ').filter(|word| !word.is_empty()) {
        let trial = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if fits(&trial) {
            current = trial;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        // slice words that can't fit even on their own line
        let mut rest = word;
        while !fits(rest) {
            let split = longest_fitting_prefix(rest, &fits);
            if split == 0 {
                let ch = rest.chars().next().unwrap_or(' ');
                return Err(NoteError::GlyphTooWide {
                    ch,
                    width: metrics.width_of(ch.encode_utf8(&mut [0; 4]), size),
                    max_width,
                });
            }
            lines.push(rest[..split].to_string());
            rest = &rest[split..];
        }
        current = rest.to_string();
    }

    if !current.is_empty() {
        lines.push(current);
    }

    trace!(lines = lines.len(), %max_width, "wrapped line");
    Ok(lines)
}

/// Wraps a block of text that may contain hard newlines. Each newline-separated
/// line is wrapped with [wrap_line] and the results are concatenated in order;
/// blank lines contribute nothing.
pub fn wrap_text<M: FontMetrics + ?Sized>(
    text: &str,
    metrics: &M,
    size: Pt,
    max_width: Pt,
) -> Result<Vec<String>, NoteError> {
    check_line_preconditions(size, max_width)?;

    let mut wrapped = Vec::new();
    for line in text.split('\n') {
        wrapped.extend(wrap_line(line, metrics, size, max_width)?);
    }
    Ok(wrapped)
}

pub(crate) fn check_line_preconditions(size: Pt, max_width: Pt) -> Result<(), NoteError> {
    if !size.is_positive() {
        return Err(NoteError::InvalidFontSize(size));
    }
    if !max_width.is_positive() {
        return Err(NoteError::InvalidWidth(max_width));
    }
    Ok(())
}

/// Byte length of the longest prefix of `word` that still fits, on a char boundary
fn longest_fitting_prefix(word: &str, fits: &impl Fn(&str) -> bool) -> usize {
    let mut best = 0;
    for (index, ch) in word.char_indices() {
        let end = index + ch.len_utf8();
        if !fits(&word[..end]) {
            break;
        }
        best = end;
    }
    best
}
