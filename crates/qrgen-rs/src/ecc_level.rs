/// The error correction level in a QR Code symbol.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EccLevel {
    /// Tolerates about  7% erroneous codewords.
    Low,
    /// Tolerates about 15% erroneous codewords.
    Medium,
    /// Tolerates about 25% erroneous codewords.
    Quartile,
    /// Tolerates about 30% erroneous codewords.
    High,
}

impl EccLevel {
    /// All four levels, weakest first.
    pub const ALL: [EccLevel; 4] = [
        EccLevel::Low,
        EccLevel::Medium,
        EccLevel::Quartile,
        EccLevel::High,
    ];

    // Row index into the capacity tables.
    pub(crate) fn ordinal(self) -> usize {
        match self {
            EccLevel::Low => 0,
            EccLevel::Medium => 1,
            EccLevel::Quartile => 2,
            EccLevel::High => 3,
        }
    }

    // The 2-bit value carried in the format information.
    pub(crate) fn format_bits(self) -> u32 {
        match self {
            EccLevel::Low => 1,
            EccLevel::Medium => 0,
            EccLevel::Quartile => 3,
            EccLevel::High => 2,
        }
    }

    pub(crate) fn from_format_bits(bits: u32) -> Self {
        match bits & 0b11 {
            1 => EccLevel::Low,
            0 => EccLevel::Medium,
            3 => EccLevel::Quartile,
            _ => EccLevel::High,
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn order_levels_by_strength() {
        assert!(EccLevel::Low < EccLevel::Medium);
        assert!(EccLevel::Medium < EccLevel::Quartile);
        assert!(EccLevel::Quartile < EccLevel::High);
    }

    #[test]
    fn round_trip_format_bits() {
        for level in EccLevel::ALL {
            assert_eq!(EccLevel::from_format_bits(level.format_bits()), level);
        }
    }
}
