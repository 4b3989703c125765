/// A fill colour for drawn text, expressed in the RGB or grey device colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour in the grey space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

impl Default for Colour {
    fn default() -> Self {
        colours::BLACK
    }
}

/// Colours used by the default note style
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const DARK_GREY: Colour = Colour::Grey { g: 0.25 };
    pub const MID_GREY: Colour = Colour::Grey { g: 0.5 };
    /// The product's accent blue, used for the title block
    pub const ACCENT: Colour = Colour::RGB {
        r: 0.145,
        g: 0.388,
        b: 0.922,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_channels_scale_to_unit_range() {
        assert_eq!(
            Colour::new_rgb_bytes(255, 0, 51),
            Colour::RGB {
                r: 1.0,
                g: 0.0,
                b: 0.2
            }
        );
        assert_eq!(Colour::new_grey(0.5), colours::MID_GREY);
    }
}
