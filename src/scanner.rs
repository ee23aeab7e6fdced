use std::borrow::Cow;

use itertools::Itertools;

use crate::codec::{is_high_surrogate, is_surrogate_pair, EncodedKey, Utf16Type};
use crate::error::Result;
use crate::registry::{default_set, MembershipSet};

/// A flagged codepoint found in a unit sequence.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Match {
    /// Index of the first unit.
    pub offset: usize,
    pub codepoint: u32,
    pub units: Utf16Type,
}

#[derive(Copy, Clone, Debug)]
pub struct Scanner<'a> {
    set: &'a MembershipSet,
}

impl<'a> Scanner<'a> {
    pub const fn new(set: &'a MembershipSet) -> Self {
        Self { set }
    }

    /// Scanner over the lazily built emoji table.
    pub fn emoji() -> Result<Scanner<'static>> {
        default_set().map(Scanner::new)
    }

    pub const fn set(&self) -> &'a MembershipSet {
        self.set
    }

    /// Walks the units once. A unit is looked up on its own first; if it is
    /// a high surrogate it is then looked up together with the unit after
    /// it, which is left in place and examined on the next step. Lone and
    /// trailing surrogates never match.
    pub fn find_flagged_units<I>(&self, units: I) -> Option<Match>
    where
        I: IntoIterator<Item = u16>,
    {
        let mut units = units.into_iter().enumerate().peekable();
        while let Some((offset, unit)) = units.next() {
            let key = EncodedKey::from_unit(unit);
            if let Some(codepoint) = self.set.codepoint(key) {
                return Some(Match {
                    offset,
                    codepoint,
                    units: key.units(),
                });
            }
            if !is_high_surrogate(unit) {
                continue;
            }
            let Some(&(_, low)) = units.peek() else {
                continue;
            };
            let key = EncodedKey::from_pair(unit, low);
            if let Some(codepoint) = self.set.codepoint(key) {
                return Some(Match {
                    offset,
                    codepoint,
                    units: key.units(),
                });
            }
        }
        None
    }

    pub fn find_flagged(&self, units: &[u16]) -> Option<Match> {
        self.find_flagged_units(units.iter().copied())
    }

    pub fn contains_flagged(&self, units: &[u16]) -> bool {
        self.find_flagged(units).is_some()
    }

    pub fn contains_flagged_units<I>(&self, units: I) -> bool
    where
        I: IntoIterator<Item = u16>,
    {
        self.find_flagged_units(units).is_some()
    }

    pub fn contains_flagged_str(&self, text: &str) -> bool {
        self.contains_flagged_units(text.encode_utf16())
    }

    /// `text` without any flagged character.
    pub fn strip_flagged<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !self.contains_flagged_str(text) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(
            text.chars()
                .filter(|c| !self.set.contains_codepoint(*c as u32))
                .collect(),
        )
    }
}

/// Whether no two adjacent units form a surrogate pair, i.e. the text can be
/// stored where only the basic multilingual plane is supported.
pub fn fits_basic_plane_units<I>(units: I) -> bool
where
    I: IntoIterator<Item = u16>,
{
    !units
        .into_iter()
        .tuple_windows()
        .any(|(high, low)| is_surrogate_pair(high, low))
}

pub fn fits_basic_plane(units: &[u16]) -> bool {
    fits_basic_plane_units(units.iter().copied())
}

pub fn fits_basic_plane_str(text: &str) -> bool {
    fits_basic_plane_units(text.encode_utf16())
}

/// `text` without any supplementary-plane character.
pub fn strip_supplementary(text: &str) -> Cow<'_, str> {
    if fits_basic_plane_str(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.chars().filter(|c| c.len_utf16() == 1).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::CodepointRange;
    use crate::registry::RangeRegistry;

    const RANGES: [CodepointRange; 3] = [
        CodepointRange::single(0x00A9),
        CodepointRange::single(0x00AE),
        CodepointRange::new(0x1F300, 0x1F321),
    ];

    fn units(text: &str) -> Vec<u16> {
        text.encode_utf16().collect()
    }

    fn set() -> MembershipSet {
        RangeRegistry::new(&RANGES).build().unwrap()
    }

    #[test]
    fn flagged_bmp_singleton() {
        let set = set();
        let scanner = Scanner::new(&set);
        assert!(scanner.contains_flagged(&[0x00A9]));
        assert_eq!(
            scanner.find_flagged(&[0x41, 0x00AE]),
            Some(Match {
                offset: 1,
                codepoint: 0x00AE,
                units: Utf16Type::Bmp(0x00AE)
            })
        );
    }

    #[test]
    fn flagged_supplementary() {
        let set = set();
        let scanner = Scanner::new(&set);
        assert!(scanner.contains_flagged(&[0xD83C, 0xDF10]));
        assert!(scanner.contains_flagged_str("weather \u{1F310} today"));
        assert_eq!(
            scanner.find_flagged(&units("ab\u{1F321}")),
            Some(Match {
                offset: 2,
                codepoint: 0x1F321,
                units: Utf16Type::Surrogate {
                    high: 0xD83C,
                    low: 0xDF21
                }
            })
        );
        // outside the configured range
        assert!(!scanner.contains_flagged_str("\u{1F322}\u{1F600}"));
    }

    #[test]
    fn ascii_not_flagged() {
        let set = set();
        let scanner = Scanner::new(&set);
        assert!(!scanner.contains_flagged(&units("hello")));
        assert!(!scanner.contains_flagged(&[]));
    }

    #[test]
    fn malformed_surrogates() {
        let set = set();
        let scanner = Scanner::new(&set);
        assert!(!scanner.contains_flagged(&[0x41, 0xD800]));
        assert!(!scanner.contains_flagged(&[0xD83C]));
        assert!(!scanner.contains_flagged(&[0xDF10, 0xD83C]));
        assert!(!scanner.contains_flagged(&[0xD83C, 0xD83C]));
        assert!(scanner.contains_flagged(&[0xD83C, 0xD83C, 0xDF10]));
        assert!(fits_basic_plane(&[0x41, 0xD800]));
        assert!(fits_basic_plane(&[0xD800]));
        assert!(fits_basic_plane(&[0xDF10, 0xD83C]));
    }

    #[test]
    fn basic_plane() {
        assert!(!fits_basic_plane(&[0xD83C, 0xDF10]));
        assert!(!fits_basic_plane(&[0x41, 0xD83C, 0xDF10, 0x42]));
        assert!(fits_basic_plane(&units("hello")));
        assert!(fits_basic_plane(&[0x00A9]));
        assert!(fits_basic_plane(&[]));
        // fullwidth forms sit above the surrogate block
        assert!(fits_basic_plane_str("\u{FF01}\u{FF01}"));
        assert!(fits_basic_plane_str("\u{00A9} 2024"));
        assert!(!fits_basic_plane_str("\u{1F600}"));
        assert!(!fits_basic_plane_units("x\u{10FFFF}".encode_utf16()));
    }

    #[test]
    fn strip() {
        let set = set();
        let scanner = Scanner::new(&set);
        assert!(matches!(scanner.strip_flagged("plain"), Cow::Borrowed("plain")));
        assert_eq!(scanner.strip_flagged("a\u{00A9}b\u{1F310}c\u{1F600}"), "abc\u{1F600}");
        assert!(matches!(strip_supplementary("plain \u{00A9}"), Cow::Borrowed(_)));
        assert_eq!(strip_supplementary("a\u{1F600}b\u{00AE}"), "ab\u{00AE}");
    }

    #[test]
    fn emoji_scanner() {
        let scanner = Scanner::emoji().unwrap();
        assert!(scanner.contains_flagged_str("ok \u{1F600}"));
        assert!(scanner.contains_flagged_str("\u{2B50}"));
        assert!(!scanner.contains_flagged_str("hello, world"));
        assert!(!scanner.contains_flagged_str("\u{4F60}\u{597D}"));
    }
}
