use crate::error::{Error, Result};

pub const MAX_CODEPOINT: u32 = 0x10FFFF;
const SUPPLEMENTARY_OFFSET: u32 = 0x10000;
const HIGH_SURROGATE_BASE: u16 = 0xD800;
const LOW_SURROGATE_BASE: u16 = 0xDC00;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endianness {
    BigEndian,
    LittleEndian,
}

impl Endianness {
    #[inline]
    pub const fn unit_to_bytes(self, unit: u16) -> [u8; 2] {
        match self {
            Endianness::BigEndian => unit.to_be_bytes(),
            Endianness::LittleEndian => unit.to_le_bytes(),
        }
    }
}

/// The code units of a single encoded codepoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Utf16Type {
    Bmp(u16),
    Surrogate { high: u16, low: u16 },
}

impl Utf16Type {
    pub const fn high(self) -> u16 {
        match self {
            Utf16Type::Bmp(unit) => unit,
            Utf16Type::Surrogate { high, low: _ } => high,
        }
    }
    /// Zero for the single-unit form.
    pub const fn low(self) -> u16 {
        match self {
            Utf16Type::Bmp(_) => 0,
            Utf16Type::Surrogate { high: _, low } => low,
        }
    }
    pub const fn unit_count(self) -> usize {
        match self {
            Utf16Type::Bmp(_) => 1,
            Utf16Type::Surrogate { .. } => 2,
        }
    }
    pub fn iter(self) -> impl Iterator<Item = u16> {
        let units = match self {
            Utf16Type::Bmp(unit) => [Some(unit), None],
            Utf16Type::Surrogate { high, low } => [Some(high), Some(low)],
        };
        units.into_iter().flatten()
    }
}

/// Key of a codepoint in a membership set: the single unit for the BMP,
/// `high << 16 | low` for the supplementary planes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EncodedKey(u32);

impl EncodedKey {
    #[inline]
    pub const fn from_unit(unit: u16) -> Self {
        Self(unit as u32)
    }
    #[inline]
    pub const fn from_pair(high: u16, low: u16) -> Self {
        Self(((high as u32) << 16) | low as u32)
    }
    pub const fn value(self) -> u32 {
        self.0
    }
    pub const fn is_bmp(self) -> bool {
        self.0 & 0xFFFF0000 == 0
    }
    pub const fn units(self) -> Utf16Type {
        if self.is_bmp() {
            Utf16Type::Bmp(self.0 as u16)
        } else {
            Utf16Type::Surrogate {
                high: (self.0 >> 16) as u16,
                low: self.0 as u16,
            }
        }
    }
}

impl From<EncodedKey> for u32 {
    fn from(value: EncodedKey) -> Self {
        value.0
    }
}

#[inline]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

#[inline]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

#[inline]
pub const fn is_surrogate_pair(high: u16, low: u16) -> bool {
    is_high_surrogate(high) && is_low_surrogate(low)
}

pub fn encode(codepoint: u32) -> Result<EncodedKey> {
    if codepoint > MAX_CODEPOINT {
        return Err(Error::InvalidCodepoint(codepoint));
    }
    if codepoint & 0xFFFF0000 == 0 {
        return Ok(EncodedKey(codepoint));
    }
    let shifted = codepoint - SUPPLEMENTARY_OFFSET;
    let high = HIGH_SURROGATE_BASE + (shifted >> 10) as u16;
    let low = LOW_SURROGATE_BASE + (shifted & 0x3FF) as u16;
    Ok(EncodedKey::from_pair(high, low))
}

/// Decodes one or two code units. A zero `low` means a single unit. The
/// arguments are accepted in either order: a low surrogate followed by a
/// high surrogate, or a zero followed by a unit, are swapped first.
pub fn decode(high: u16, low: u16) -> Result<u32> {
    let (high, low) = if high == 0 || (is_low_surrogate(high) && is_high_surrogate(low)) {
        (low, high)
    } else {
        (high, low)
    };
    if low == 0 {
        return Ok(high as u32);
    }
    if !is_surrogate_pair(high, low) {
        return Err(Error::InvalidSurrogatePair { high, low });
    }
    Ok((((high - HIGH_SURROGATE_BASE) as u32) << 10)
        + (low - LOW_SURROGATE_BASE) as u32
        + SUPPLEMENTARY_OFFSET)
}

pub fn decode_key(key: EncodedKey) -> Result<u32> {
    let units = key.units();
    decode(units.high(), units.low())
}
