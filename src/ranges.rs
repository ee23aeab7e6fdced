use std::fmt;

/// An inclusive range of unicode codepoints. Singletons have `start == end`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CodepointRange {
    pub start: u32,
    pub end: u32,
}

impl CodepointRange {
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
    pub const fn single(codepoint: u32) -> Self {
        Self {
            start: codepoint,
            end: codepoint,
        }
    }
    pub const fn contains(&self, codepoint: u32) -> bool {
        self.start <= codepoint && codepoint <= self.end
    }
    /// Number of codepoints covered, zero when `start > end`.
    pub const fn len(&self) -> usize {
        if self.start > self.end {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn codepoints(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl fmt::Display for CodepointRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "U+{:04X}", self.start)
        } else {
            write!(f, "U+{:04X}..U+{:04X}", self.start, self.end)
        }
    }
}

/// Emoji and pictographic symbols as of Unicode 10.0, ascending and non-overlapping.
pub static EMOJI: &[CodepointRange] = &[
    CodepointRange::single(0x00A9),
    CodepointRange::single(0x00AE),
    CodepointRange::single(0x203C),
    CodepointRange::single(0x2049),
    CodepointRange::single(0x2122),
    CodepointRange::single(0x2139),
    CodepointRange::new(0x2194, 0x2199),
    CodepointRange::new(0x21A9, 0x21AA),
    CodepointRange::new(0x231A, 0x231B),
    CodepointRange::single(0x2328),
    CodepointRange::single(0x23CF),
    CodepointRange::new(0x23E9, 0x23F3),
    CodepointRange::new(0x23F8, 0x23FA),
    CodepointRange::single(0x24C2),
    CodepointRange::new(0x25AA, 0x25AB),
    CodepointRange::single(0x25B6),
    CodepointRange::single(0x25C0),
    CodepointRange::new(0x25FB, 0x25FE),
    CodepointRange::new(0x2600, 0x2604),
    CodepointRange::single(0x260E),
    CodepointRange::single(0x2611),
    CodepointRange::new(0x2614, 0x2615),
    CodepointRange::single(0x2618),
    CodepointRange::single(0x261D),
    CodepointRange::single(0x2620),
    CodepointRange::new(0x2622, 0x2623),
    CodepointRange::single(0x2626),
    CodepointRange::single(0x262A),
    CodepointRange::new(0x262E, 0x262F),
    CodepointRange::new(0x2638, 0x263A),
    CodepointRange::single(0x2640),
    CodepointRange::single(0x2642),
    CodepointRange::new(0x2648, 0x2653),
    CodepointRange::single(0x2660),
    CodepointRange::single(0x2663),
    CodepointRange::new(0x2665, 0x2666),
    CodepointRange::single(0x2668),
    CodepointRange::single(0x267B),
    CodepointRange::single(0x267F),
    CodepointRange::new(0x2692, 0x2697),
    CodepointRange::single(0x2699),
    CodepointRange::new(0x269B, 0x269C),
    CodepointRange::new(0x26A0, 0x26A1),
    CodepointRange::new(0x26AA, 0x26AB),
    CodepointRange::new(0x26B0, 0x26B1),
    CodepointRange::new(0x26BD, 0x26BE),
    CodepointRange::new(0x26C4, 0x26C5),
    CodepointRange::single(0x26C8),
    CodepointRange::new(0x26CE, 0x26CF),
    CodepointRange::single(0x26D1),
    CodepointRange::new(0x26D3, 0x26D4),
    CodepointRange::new(0x26E9, 0x26EA),
    CodepointRange::new(0x26F0, 0x26F5),
    CodepointRange::new(0x26F7, 0x26FA),
    CodepointRange::single(0x26FD),
    CodepointRange::single(0x2702),
    CodepointRange::single(0x2705),
    CodepointRange::new(0x2708, 0x270D),
    CodepointRange::single(0x270F),
    CodepointRange::single(0x2712),
    CodepointRange::single(0x2714),
    CodepointRange::single(0x2716),
    CodepointRange::single(0x271D),
    CodepointRange::single(0x2721),
    CodepointRange::single(0x2728),
    CodepointRange::new(0x2733, 0x2734),
    CodepointRange::single(0x2744),
    CodepointRange::single(0x2747),
    CodepointRange::single(0x274C),
    CodepointRange::single(0x274E),
    CodepointRange::new(0x2753, 0x2755),
    CodepointRange::single(0x2757),
    CodepointRange::new(0x2763, 0x2764),
    CodepointRange::new(0x2795, 0x2797),
    CodepointRange::single(0x27A1),
    CodepointRange::single(0x27B0),
    CodepointRange::single(0x27BF),
    CodepointRange::new(0x2934, 0x2935),
    CodepointRange::new(0x2B05, 0x2B07),
    CodepointRange::new(0x2B1B, 0x2B1C),
    CodepointRange::single(0x2B50),
    CodepointRange::single(0x2B55),
    CodepointRange::single(0x3030),
    CodepointRange::single(0x303D),
    CodepointRange::new(0x3297, 0x3299),
    CodepointRange::single(0x1F004),
    CodepointRange::single(0x1F0CF),
    CodepointRange::new(0x1F170, 0x1F171),
    CodepointRange::new(0x1F17E, 0x1F17F),
    CodepointRange::single(0x1F18E),
    CodepointRange::new(0x1F191, 0x1F19A),
    CodepointRange::new(0x1F201, 0x1F202),
    CodepointRange::single(0x1F21A),
    CodepointRange::single(0x1F22F),
    CodepointRange::new(0x1F232, 0x1F23A),
    CodepointRange::new(0x1F250, 0x1F251),
    CodepointRange::new(0x1F300, 0x1F321),
    CodepointRange::new(0x1F324, 0x1F393),
    CodepointRange::new(0x1F396, 0x1F397),
    CodepointRange::new(0x1F399, 0x1F39B),
    CodepointRange::new(0x1F39E, 0x1F3F0),
    CodepointRange::new(0x1F3F3, 0x1F3F5),
    CodepointRange::new(0x1F3F7, 0x1F53D),
    CodepointRange::new(0x1F549, 0x1F54E),
    CodepointRange::new(0x1F550, 0x1F567),
    CodepointRange::new(0x1F56F, 0x1F570),
    CodepointRange::new(0x1F573, 0x1F57A),
    CodepointRange::single(0x1F587),
    CodepointRange::new(0x1F58A, 0x1F58D),
    CodepointRange::single(0x1F590),
    CodepointRange::new(0x1F595, 0x1F596),
    CodepointRange::new(0x1F5A4, 0x1F5A5),
    CodepointRange::single(0x1F5A8),
    CodepointRange::new(0x1F5B1, 0x1F5B2),
    CodepointRange::single(0x1F5BC),
    CodepointRange::new(0x1F5C2, 0x1F5C4),
    CodepointRange::new(0x1F5D1, 0x1F5D3),
    CodepointRange::new(0x1F5DC, 0x1F5DE),
    CodepointRange::single(0x1F5E1),
    CodepointRange::single(0x1F5E3),
    CodepointRange::single(0x1F5E8),
    CodepointRange::single(0x1F5EF),
    CodepointRange::single(0x1F5F3),
    CodepointRange::new(0x1F5FA, 0x1F6C5),
    CodepointRange::new(0x1F6CB, 0x1F6D2),
    CodepointRange::new(0x1F6E0, 0x1F6E5),
    CodepointRange::single(0x1F6E8),
    CodepointRange::new(0x1F6EB, 0x1F6EC),
    CodepointRange::single(0x1F6F0),
    CodepointRange::new(0x1F6F3, 0x1F6F8),
    CodepointRange::new(0x1F910, 0x1F93A),
    CodepointRange::new(0x1F93B, 0x1F93E),
    CodepointRange::new(0x1F940, 0x1F945),
    CodepointRange::new(0x1F947, 0x1F94C),
    CodepointRange::new(0x1F950, 0x1F96B),
    CodepointRange::new(0x1F980, 0x1F997),
    CodepointRange::single(0x1F9C0),
    CodepointRange::new(0x1F9D0, 0x1F9E6),
];
