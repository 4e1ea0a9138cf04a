//! Assembles the data codeword stream: optional ECI header, mode indicator,
//! character count, payload bits, terminator, byte alignment and pad bytes.

use crate::bit_stream::{BitReader, BitWriter};
use crate::ecc_level::EccLevel;
use crate::error::QrError;
use crate::segment::Segment;
use crate::tables;
use crate::version::Version;

const ECI_INDICATOR: u32 = 0b0111;
const PAD_CODEWORDS: [u32; 2] = [0xEC, 0x11];

/// Largest ECI assignment value the 24-bit header form can carry.
pub(crate) const MAX_ECI_DESIGNATOR: u32 = 999_999;

// Header size in bits for an ECI designator, indicator included.
fn eci_header_bits(designator: u32) -> usize {
    if designator < 1 << 7 {
        4 + 8
    } else if designator < 1 << 14 {
        4 + 16
    } else {
        4 + 24
    }
}

/// Bits the segment occupies at `version`, headers included.
///
/// `None` when the character count does not fit the count field at this
/// version, which rules the version out entirely.
pub(crate) fn required_bits(segment: &Segment, eci: Option<u32>, version: Version) -> Option<usize> {
    let cc_bits = segment.mode().char_count_bits(version);
    if cc_bits < usize::BITS as usize && segment.char_count() >= 1 << cc_bits {
        return None;
    }
    let eci_bits = eci.map_or(0, eci_header_bits);
    Some(eci_bits + 4 + cc_bits + segment.data_bits())
}

/// Packs the full data codeword sequence for `version`/`level`.
///
/// The caller has already sized the version; running out of room here is an
/// internal fault and surfaces as `BufferOverflow`.
pub(crate) fn encode_payload(
    segment: &Segment,
    eci: Option<u32>,
    version: Version,
    level: EccLevel,
) -> Result<Vec<u8>, QrError> {
    let capacity = tables::data_codewords(version, level);
    let capacity_bits = capacity * 8;
    match required_bits(segment, eci, version) {
        Some(needed) if needed <= capacity_bits => {}
        other => {
            return Err(QrError::CapacityExceeded {
                needed_bits: other.unwrap_or(usize::MAX),
                capacity_bits,
            })
        }
    }
    let mut w = BitWriter::new(capacity);

    if let Some(designator) = eci {
        w.write(ECI_INDICATOR, 4)?;
        if designator < 1 << 7 {
            w.write(designator, 8)?;
        } else if designator < 1 << 14 {
            w.write(0b10, 2)?;
            w.write(designator, 14)?;
        } else {
            w.write(0b110, 3)?;
            w.write(designator, 21)?;
        }
    }

    w.write(segment.mode().indicator(), 4)?;
    w.write(
        segment.char_count() as u32,
        segment.mode().char_count_bits(version),
    )?;
    let mut payload = BitReader::with_bit_len(segment.data(), segment.data_bits());
    while payload.remaining() >= 8 {
        w.write(payload.read_bits(8), 8)?;
    }
    let tail = payload.remaining();
    if tail > 0 {
        w.write(payload.read_bits(tail), tail)?;
    }

    // Terminator, truncated if the capacity is already exhausted.
    w.write(0, (capacity_bits - w.bit_len()).min(4))?;
    w.write(0, (8 - w.bit_len() % 8) % 8)?;
    for &pad in PAD_CODEWORDS.iter().cycle() {
        if w.bit_len() == capacity_bits {
            break;
        }
        w.write(pad, 8)?;
    }

    debug_assert_eq!(w.bit_len(), capacity_bits);
    Ok(w.into_bytes())
}

#[cfg(test)]
mod should {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn reproduce_the_annex_codewords_for_numeric_one_m() {
        let seg = Segment::numeric("01234567").unwrap();
        let codewords = encode_payload(&seg, None, v(1), EccLevel::Medium).unwrap();
        assert_eq!(
            codewords,
            vec![
                0x10, 0x20, 0x0C, 0x56, 0x61, 0x80, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11, 0xEC, 0x11,
                0xEC, 0x11
            ]
        );
    }

    #[test]
    fn reproduce_the_reference_codewords_for_hello_world_one_q() {
        let seg = Segment::alphanumeric("HELLO WORLD").unwrap();
        let codewords = encode_payload(&seg, None, v(1), EccLevel::Quartile).unwrap();
        assert_eq!(
            codewords,
            vec![32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236]
        );
    }

    #[test]
    fn prefix_an_eci_header() {
        let seg = Segment::bytes_utf8("A").unwrap();
        let codewords = encode_payload(&seg, Some(26), v(1), EccLevel::Low).unwrap();
        // 0111 00011010 0100 00000001 01000001 terminator/pad...
        assert_eq!(codewords[0], 0b0111_0001);
        assert_eq!(codewords[1], 0b1010_0100);
        assert_eq!(codewords[2], 0b0000_0001);
        assert_eq!(codewords[3], 0b0100_0001);
        assert_eq!(codewords.len(), 19);
    }

    #[test]
    fn size_eci_headers_by_designator_value() {
        let seg = Segment::bytes(b"").unwrap();
        assert_eq!(required_bits(&seg, None, v(1)), Some(12));
        assert_eq!(required_bits(&seg, Some(26), v(1)), Some(24));
        assert_eq!(required_bits(&seg, Some(200), v(1)), Some(32));
        assert_eq!(required_bits(&seg, Some(20_000), v(1)), Some(40));
    }

    #[test]
    fn rule_out_versions_whose_count_field_is_too_narrow() {
        let digits: String = std::iter::repeat('7').take(1024).collect();
        let seg = Segment::numeric(&digits).unwrap();
        // 10-bit count field at v1..=9 holds at most 1023 characters.
        assert_eq!(required_bits(&seg, None, v(9)), None);
        assert!(required_bits(&seg, None, v(10)).is_some());
    }

    #[test]
    fn truncate_the_terminator_at_exact_capacity() {
        // 34 digits fill 1-M to the bit: 4 + 10 + 11*10 + 4 = 128 bits,
        // leaving no room for any terminator or pad byte.
        let seg = Segment::numeric("0123456789012345678901234567890123").unwrap();
        let codewords = encode_payload(&seg, None, v(1), EccLevel::Medium).unwrap();
        assert_eq!(codewords.len(), 16);
        // The stream ends on the trailing single digit (3 -> 0011).
        assert_eq!(codewords[15] & 0x0F, 0b0011);
    }

    #[test]
    fn pad_with_alternating_bytes() {
        let seg = Segment::bytes(b"x").unwrap();
        let codewords = encode_payload(&seg, None, v(1), EccLevel::Low).unwrap();
        assert_eq!(codewords.len(), 19);
        assert_eq!(&codewords[3..], &[236, 17, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17, 236, 17]);
    }
}
