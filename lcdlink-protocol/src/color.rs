//! Color encodings
//!
//! The shape profile carries 24-bit colors as three bytes; the panel profile
//! carries RGB565 in two bytes.

/// 24-bit RGB color (0xRRGGBB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb888(u32);

impl Rgb888 {
    pub const BLACK: Self = Self(0x000000);
    pub const BLUE: Self = Self(0x0000FF);
    pub const RED: Self = Self(0xFF0000);
    pub const GREEN: Self = Self(0x00FF00);
    pub const CYAN: Self = Self(0x00FFFF);
    pub const MAGENTA: Self = Self(0xFF00FF);
    pub const YELLOW: Self = Self(0xFFFF00);
    pub const WHITE: Self = Self(0xFFFFFF);
    pub const NAVY: Self = Self(0x000080);
    pub const DARK_GREEN: Self = Self(0x556B2F);
    pub const DARK_CYAN: Self = Self(0x008B8B);
    pub const MAROON: Self = Self(0x800000);
    pub const PURPLE: Self = Self(0x800080);
    pub const OLIVE: Self = Self(0x808000);
    pub const LIGHT_GREY: Self = Self(0xD3D3D3);
    pub const DARK_GREY: Self = Self(0xA9A9A9);
    pub const ORANGE: Self = Self(0xFFA500);
    pub const GREEN_YELLOW: Self = Self(0x9ACD32);

    /// Build from components
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Build from a packed 0xRRGGBB value; bits above 24 are dropped
    pub const fn from_u32(value: u32) -> Self {
        Self(value & 0xFF_FFFF)
    }

    /// Packed 0xRRGGBB value
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Wire bytes, most significant first
    pub const fn to_bytes(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    /// Truncate to RGB565
    pub const fn to_rgb565(self) -> Rgb565 {
        let [r, g, b] = self.to_bytes();
        Rgb565(((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3))
    }
}

impl From<u32> for Rgb888 {
    fn from(value: u32) -> Self {
        Self::from_u32(value)
    }
}

/// 16-bit RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb565(u16);

impl Rgb565 {
    pub const BLACK: Self = Self(0x0000);
    pub const WHITE: Self = Self(0xFFFF);

    /// Wrap a raw RGB565 value
    pub const fn from_raw(value: u16) -> Self {
        Self(value)
    }

    /// Raw RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Wire bytes, big-endian
    pub const fn to_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<Rgb888> for Rgb565 {
    fn from(color: Rgb888) -> Self {
        color.to_rgb565()
    }
}
