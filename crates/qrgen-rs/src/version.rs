use crate::error::QrError;

/// A symbol version, between 1 and 40 (inclusive). Side length is 4v + 17.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Version(u8);

impl Version {
    /// The smallest version, a 21x21 symbol.
    pub const MIN: Version = Version(1);

    /// The largest version, a 177x177 symbol.
    pub const MAX: Version = Version(40);

    /// Creates a version from its number, rejecting anything outside 1..=40.
    pub fn new(number: u8) -> Result<Self, QrError> {
        if (1..=40).contains(&number) {
            Ok(Self(number))
        } else {
            Err(QrError::InvalidArgument(format!(
                "version {number} is outside 1..=40"
            )))
        }
    }

    // For iteration over the known-valid range.
    pub(crate) const fn new_unchecked(number: u8) -> Self {
        Self(number)
    }

    /// The version number, in 1..=40.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Modules per side: 4v + 17, in 21..=177.
    pub fn side(self) -> usize {
        usize::from(self.0) * 4 + 17
    }

    /// Recovers the version from a side length of the 4v + 17 shape.
    pub fn from_side(side: usize) -> Option<Self> {
        if (21..=177).contains(&side) && (side - 17) % 4 == 0 {
            Some(Self(((side - 17) / 4) as u8))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn reject_out_of_range_numbers() {
        assert!(Version::new(0).is_err());
        assert!(Version::new(41).is_err());
        assert!(Version::new(7).is_ok());
    }

    #[test]
    fn compute_the_side_length() {
        assert_eq!(Version::MIN.side(), 21);
        assert_eq!(Version::new(6).unwrap().side(), 41);
        assert_eq!(Version::MAX.side(), 177);
    }

    #[test]
    fn recover_version_from_side() {
        for v in 1..=40u8 {
            let version = Version::new(v).unwrap();
            assert_eq!(Version::from_side(version.side()), Some(version));
        }
        assert_eq!(Version::from_side(20), None);
        assert_eq!(Version::from_side(22), None);
        assert_eq!(Version::from_side(181), None);
    }
}
