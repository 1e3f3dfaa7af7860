//! RGBA colors.

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black; the zero color.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: u8::MAX }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Unpack `0x00RRGGBB` as an opaque color. The high byte is ignored.
    #[inline]
    pub const fn from_packed_rgb(packed: u32) -> Self {
        let [_, r, g, b] = packed.to_be_bytes();
        Color::rgb(r, g, b)
    }

    /// Unpack `0xRRGGBBAA`.
    #[inline]
    pub const fn from_packed_rgba(packed: u32) -> Self {
        let [r, g, b, a] = packed.to_be_bytes();
        Color::rgba(r, g, b, a)
    }

    /// Decode the hex digits following `#`.
    ///
    /// Exactly eight digits read as `RRGGBBAA`. Any other length is masked to
    /// its low 24 bits and read as opaque `RRGGBB`. Text that is not
    /// hexadecimal, or does not fit in 32 bits, decodes to
    /// [`Color::TRANSPARENT`].
    pub fn from_hex_digits(digits: &str) -> Self {
        match u32::from_str_radix(digits, 16) {
            Ok(packed) if digits.len() == 8 => Color::from_packed_rgba(packed),
            Ok(packed) => Color::from_packed_rgb(packed),
            Err(_) => Color::TRANSPARENT,
        }
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// `#RRGGBB`, or `#RRGGBBAA` when `with_alpha` is set and the color is
    /// not opaque.
    pub fn to_hex(self, with_alpha: bool) -> String {
        if with_alpha && !self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        } else {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        }
    }
}
