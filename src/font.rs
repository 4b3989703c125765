use crate::units::Pt;

/// Measures rendered text. Implementations must be deterministic and return a
/// finite, non-negative width in points; the layout functions rely on that
/// contract and do not re-check it.
pub trait FontMetrics {
    /// The horizontal advance of `text` when set at `size`
    fn width_of(&self, text: &str, size: Pt) -> Pt;
}

impl<M: FontMetrics + ?Sized> FontMetrics for &M {
    fn width_of(&self, text: &str, size: Pt) -> Pt {
        (**self).width_of(text, size)
    }
}

/// Which face of the document's font pair a piece of text is drawn with. Page
/// sinks decide what concrete font each reference maps to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum FontRef {
    Regular,
    Bold,
}

/// One of the PDF standard fonts. These are never embedded; every PDF reader
/// ships them, so documents stay small and metrics come from the published
/// AFM advance widths (in 1/1000 em).
///
/// Text is encoded with WinAnsiEncoding; characters it cannot represent are
/// measured and drawn as `?`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
    Courier,
    CourierBold,
}

impl StandardFont {
    /// The PostScript name used as the font's `BaseFont`
    pub fn base_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
            StandardFont::Courier => "Courier",
            StandardFont::CourierBold => "Courier-Bold",
        }
    }

    /// Advance width of a single WinAnsi code, in 1/1000 em
    fn advance(self, code: u8) -> u16 {
        let ascii = match self {
            StandardFont::Courier | StandardFont::CourierBold => return 600,
            StandardFont::Helvetica => &HELVETICA_ASCII,
            StandardFont::HelveticaBold => &HELVETICA_BOLD_ASCII,
        };
        let bold = self == StandardFont::HelveticaBold;

        match code {
            0x20..=0x7E => ascii[(code - 0x20) as usize],
            0x85 => 1000,                           // ellipsis
            0x91 | 0x92 => if bold { 278 } else { 222 }, // single quotes
            0x93 | 0x94 => if bold { 500 } else { 333 }, // double quotes
            0x95 => 350,                            // bullet
            0x96 => 556,                            // en dash
            0x97 => 1000,                           // em dash
            0xA0 => 278,                            // no-break space
            0xB0 => 400,                            // degree
            0xB1 | 0xD7 | 0xF7 => 584,              // plus-minus, multiply, divide
            0xB5 => if bold { 611 } else { 556 },   // micro
            // accented latin letters and the remaining symbols are close to a digit
            _ => 556,
        }
    }
}

impl FontMetrics for StandardFont {
    fn width_of(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| self.advance(encode_win_ansi(ch)) as u32)
            .sum();
        Pt(size.0 * units as f32 / 1000.0)
    }
}

/// The concrete fonts behind [FontRef::Regular] and [FontRef::Bold].
///
/// A [crate::Document] draws with its pair; lay text out for it with
/// [crate::layout::Paginator::for_fonts] and the same pair so lines are
/// measured with the faces they are drawn in.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FontPair {
    pub regular: StandardFont,
    pub bold: StandardFont,
}

impl Default for FontPair {
    fn default() -> Self {
        FontPair {
            regular: StandardFont::Helvetica,
            bold: StandardFont::HelveticaBold,
        }
    }
}

impl FontPair {
    pub fn courier() -> FontPair {
        FontPair {
            regular: StandardFont::Courier,
            bold: StandardFont::CourierBold,
        }
    }

    pub fn get(&self, font: FontRef) -> StandardFont {
        match font {
            FontRef::Regular => self.regular,
            FontRef::Bold => self.bold,
        }
    }
}

/// Map a character to its WinAnsiEncoding byte, substituting `?` for anything
/// the encoding cannot represent
pub fn encode_win_ansi(ch: char) -> u8 {
    match ch {
        ' '..='~' => ch as u8,
        '\u{A0}'..='\u{FF}' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8A,
        '‹' => 0x8B,
        'Œ' => 0x8C,
        'Ž' => 0x8E,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9A,
        '›' => 0x9B,
        'œ' => 0x9C,
        'ž' => 0x9E,
        'Ÿ' => 0x9F,
        _ => b'?',
    }
}

/// Encode a whole string for a WinAnsi-encoded standard font
pub fn encode_win_ansi_str(text: &str) -> Vec<u8> {
    text.chars().map(encode_win_ansi).collect()
}

#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    278, 278, 278, 469, 556, 333,                                                   // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n'..'z'
    334, 260, 334, 584,                                                             // '{'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0'..'9'
    333, 333, 584, 584, 584, 611, 975,                                              // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,                // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N'..'Z'
    333, 278, 333, 584, 556, 333,                                                   // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,                // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,                // 'n'..'z'
    389, 280, 389, 584,                                                             // '{'..'~'
];
