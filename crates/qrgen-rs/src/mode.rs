use crate::version::Version;

/// How a segment's payload bits are interpreted.
///
/// A closed set; each variant carries its own packing routine in
/// `segment.rs` rather than going through a trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    Numeric,
    Alphanumeric,
    Byte,
    /// Shift-JIS double-byte characters, 13 bits each. Present for capacity
    /// lookups and count-field widths; the generator never selects it and
    /// routes such content through Byte mode with ECI 26 instead.
    Kanji,
}

impl Mode {
    /// The 4-bit mode indicator emitted ahead of the count field.
    pub fn indicator(self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Bit width of the character-count indicator for this mode at `version`.
    pub fn char_count_bits(self, version: Version) -> usize {
        match version.value() {
            1..=9 => match self {
                Mode::Numeric => 10,
                Mode::Alphanumeric => 9,
                Mode::Byte => 8,
                Mode::Kanji => 8,
            },
            10..=26 => match self {
                Mode::Numeric => 12,
                Mode::Alphanumeric => 11,
                Mode::Byte => 16,
                Mode::Kanji => 10,
            },
            _ => match self {
                Mode::Numeric => 14,
                Mode::Alphanumeric => 13,
                Mode::Byte => 16,
                Mode::Kanji => 12,
            },
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn use_the_standard_mode_indicators() {
        assert_eq!(Mode::Numeric.indicator(), 0b0001);
        assert_eq!(Mode::Alphanumeric.indicator(), 0b0010);
        assert_eq!(Mode::Byte.indicator(), 0b0100);
        assert_eq!(Mode::Kanji.indicator(), 0b1000);
    }

    #[test]
    fn widen_count_fields_with_the_version_bands() {
        let v1 = Version::new(1).unwrap();
        let v10 = Version::new(10).unwrap();
        let v27 = Version::new(27).unwrap();
        assert_eq!(Mode::Numeric.char_count_bits(v1), 10);
        assert_eq!(Mode::Numeric.char_count_bits(v10), 12);
        assert_eq!(Mode::Numeric.char_count_bits(v27), 14);
        assert_eq!(Mode::Alphanumeric.char_count_bits(v1), 9);
        assert_eq!(Mode::Byte.char_count_bits(v1), 8);
        assert_eq!(Mode::Byte.char_count_bits(v27), 16);
        assert_eq!(Mode::Kanji.char_count_bits(v10), 10);
    }
}
