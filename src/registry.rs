use std::collections::HashMap;

use itertools::Itertools;
use once_cell::sync::OnceCell;
use tracing::debug;

use crate::codec::{encode, EncodedKey, Endianness, MAX_CODEPOINT};
use crate::error::{Error, Result};
use crate::ranges::{CodepointRange, EMOJI};

const CRLF: [u16; 2] = [0x000D, 0x000A];

static DEFAULT_SET: OnceCell<MembershipSet> = OnceCell::new();

/// The membership set built from [`EMOJI`], initialized on first use.
pub fn default_set() -> Result<&'static MembershipSet> {
    DEFAULT_SET.get_or_try_init(|| RangeRegistry::emoji().build())
}

#[derive(Copy, Clone, Debug)]
pub struct RangeRegistry<'a> {
    ranges: &'a [CodepointRange],
}

impl Default for RangeRegistry<'static> {
    fn default() -> Self {
        Self::emoji()
    }
}

impl<'a> RangeRegistry<'a> {
    pub const fn new(ranges: &'a [CodepointRange]) -> Self {
        Self { ranges }
    }

    pub const fn emoji() -> RangeRegistry<'static> {
        RangeRegistry { ranges: EMOJI }
    }

    pub const fn ranges(&self) -> &'a [CodepointRange] {
        self.ranges
    }

    /// Expands every configured range into a set keyed by encoded form.
    /// Inverted ranges contribute nothing and repeated codepoints are
    /// inserted once.
    pub fn build(&self) -> Result<MembershipSet> {
        let capacity = self
            .ranges
            .iter()
            .map(CodepointRange::len)
            .sum::<usize>()
            .min(MAX_CODEPOINT as usize + 1);
        let mut entries = HashMap::with_capacity(capacity);
        for range in self.ranges {
            for codepoint in range.codepoints() {
                entries.insert(encode(codepoint)?, codepoint);
            }
        }
        debug!(
            ranges = self.ranges.len(),
            entries = entries.len(),
            "built membership set"
        );
        Ok(MembershipSet { entries })
    }

    /// Checks that every range is non-empty, within the codepoint space,
    /// and strictly after the one before it.
    pub fn validate(&self) -> Result<()> {
        if let Some(range) = self
            .ranges
            .iter()
            .find(|range| range.is_empty() || range.end > MAX_CODEPOINT)
        {
            return Err(Error::InvalidRange(*range));
        }
        match self
            .ranges
            .iter()
            .tuple_windows()
            .find(|(previous, next)| next.start <= previous.end)
        {
            Some((previous, next)) => Err(Error::OverlappingRanges {
                previous: *previous,
                next: *next,
            }),
            None => Ok(()),
        }
    }
}

/// Encoded key to source codepoint. Read-only once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MembershipSet {
    entries: HashMap<EncodedKey, u32>,
}

impl MembershipSet {
    #[inline]
    pub fn contains(&self, key: EncodedKey) -> bool {
        self.entries.contains_key(&key)
    }

    #[inline]
    pub fn codepoint(&self, key: EncodedKey) -> Option<u32> {
        self.entries.get(&key).copied()
    }

    pub fn contains_codepoint(&self, codepoint: u32) -> bool {
        encode(codepoint).is_ok_and(|key| self.contains(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EncodedKey, u32)> + '_ {
        self.entries.iter().map(|(key, codepoint)| (*key, *codepoint))
    }

    /// Dumps every key as UTF-16 text, one per CRLF terminated line, in
    /// ascending key order. Meant for eyeballing the table, not reloading.
    pub fn export(&self, endianness: Endianness) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.entries.len() * 8);
        for key in self.entries.keys().sorted() {
            for unit in key.units().iter().chain(CRLF) {
                bytes.extend_from_slice(&endianness.unit_to_bytes(unit));
            }
        }
        bytes
    }
}
