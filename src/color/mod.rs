mod hsv;

use smart_leds::RGB8;

pub use hsv::hsv_to_grb;

pub type Rgb = RGB8;

/// Packed 24-bit color word as the strip serializer consumes it
///
/// Layout, most significant byte first: green, red, blue, and a low byte
/// that is always zero. The serializer shifts the word out MSB first, so the
/// strip sees the 24 significant bits in GRB order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GrbWord(u32);

impl GrbWord {
    /// All channels dark
    pub const OFF: Self = Self(0);

    /// Pack 8-bit channels into a word
    #[allow(clippy::cast_lossless)]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((g as u32) << 24) | ((r as u32) << 16) | ((b as u32) << 8))
    }

    /// Wrap a raw word, clearing the unused low byte
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw & 0xFFFF_FF00)
    }

    /// Raw value handed to the serializer
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn green(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn blue(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Unpack into an RGB triple
    pub const fn to_rgb(self) -> Rgb {
        Rgb {
            r: self.red(),
            g: self.green(),
            b: self.blue(),
        }
    }
}

impl From<Rgb> for GrbWord {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<GrbWord> for Rgb {
    fn from(word: GrbWord) -> Self {
        word.to_rgb()
    }
}

impl From<GrbWord> for u32 {
    fn from(word: GrbWord) -> Self {
        word.raw()
    }
}
