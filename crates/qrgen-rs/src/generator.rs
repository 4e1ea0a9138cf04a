//! The entry point: orchestrates encode, interleave, placement and masking.

use log::{debug, trace};

use crate::bit_stream::BitReader;
use crate::builder::MatrixBuilder;
use crate::ecc_level::EccLevel;
use crate::encoder;
use crate::error::QrError;
use crate::interleave;
use crate::mask::{self, Mask};
use crate::matrix::QrMatrix;
use crate::mode::Mode;
use crate::segment::Segment;
use crate::tables;
use crate::version::Version;

/// The default light margin, in modules, per the standard.
pub const DEFAULT_QUIET_ZONE: u32 = 4;

/// Knobs for [`create_qr_code_with`]. `Default` matches [`create_qr_code`]:
/// four-module quiet zone, automatic version and mask, no ECI.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorOptions {
    /// Quiet-zone size hint carried on the result; never drawn into the grid.
    pub quiet_zone: u32,
    /// Forces a version instead of picking the smallest that fits.
    pub version: Option<u8>,
    /// ECI designator to emit ahead of the data segment. 26 selects UTF-8
    /// for Byte payloads; without it Byte payloads are ISO-8859-1.
    pub eci: Option<u32>,
    /// Forces a mask pattern instead of evaluating all eight.
    pub mask: Option<u8>,
    /// Raises the ECC level as far as the chosen version allows for free.
    pub boost_ecc: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            quiet_zone: DEFAULT_QUIET_ZONE,
            version: None,
            eci: None,
            mask: None,
            boost_ecc: false,
        }
    }
}

/// Generates a symbol for `content` at `level` with default options.
pub fn create_qr_code(content: &str, level: EccLevel) -> Result<QrMatrix, QrError> {
    create_qr_code_with(content, level, &GeneratorOptions::default())
}

/// Generates a symbol for `content` at `level` under `options`.
pub fn create_qr_code_with(
    content: &str,
    level: EccLevel,
    options: &GeneratorOptions,
) -> Result<QrMatrix, QrError> {
    let segment = build_segment(content, options.eci)?;
    generate(segment, level, options)
}

/// Generates a symbol carrying `data` as an uninterpreted Byte segment.
pub fn create_qr_code_from_bytes(data: &[u8], level: EccLevel) -> Result<QrMatrix, QrError> {
    generate(Segment::bytes(data)?, level, &GeneratorOptions::default())
}

fn build_segment(content: &str, eci: Option<u32>) -> Result<Segment, QrError> {
    match Segment::detect_mode(content) {
        Mode::Numeric => Segment::numeric(content),
        Mode::Alphanumeric => Segment::alphanumeric(content),
        Mode::Byte | Mode::Kanji => {
            if eci == Some(26) {
                Segment::bytes_utf8(content)
            } else {
                Segment::bytes_latin1(content)
            }
        }
    }
}

fn fits(segment: &Segment, eci: Option<u32>, version: Version, level: EccLevel) -> bool {
    encoder::required_bits(segment, eci, version)
        .is_some_and(|needed| needed <= tables::data_codewords(version, level) * 8)
}

fn generate(
    segment: Segment,
    level: EccLevel,
    options: &GeneratorOptions,
) -> Result<QrMatrix, QrError> {
    if let Some(designator) = options.eci {
        if designator > encoder::MAX_ECI_DESIGNATOR {
            return Err(QrError::InvalidArgument(format!(
                "ECI designator {designator} is outside 0..=999999"
            )));
        }
    }
    let forced_mask = options.mask.map(Mask::new).transpose()?;

    let version = match options.version.map(Version::new).transpose()? {
        Some(forced) => {
            if !fits(&segment, options.eci, forced, level) {
                return Err(capacity_error(&segment, options.eci, forced, level));
            }
            forced
        }
        None => (1..=40u8)
            .map(Version::new_unchecked)
            .find(|&v| fits(&segment, options.eci, v, level))
            .ok_or_else(|| capacity_error(&segment, options.eci, Version::MAX, level))?,
    };

    let mut level = level;
    if options.boost_ecc {
        for higher in EccLevel::ALL {
            if higher > level && fits(&segment, options.eci, version, higher) {
                level = higher;
            }
        }
    }
    debug!(
        "encoding {} {:?} characters as version {} at {:?}",
        segment.char_count(),
        segment.mode(),
        version.value(),
        level
    );

    let data = encoder::encode_payload(&segment, options.eci, version, level)?;
    let stream = interleave::interleave(&data, version, level)?;
    trace!(
        "interleaved {} codewords into {} placement bits",
        data.len(),
        stream.bit_len()
    );

    let mut builder = MatrixBuilder::new(version);
    builder.place_function_patterns();
    let mut bits = BitReader::with_bit_len(stream.get_data(), stream.bit_len());
    let placed = builder.place_payload(&mut bits);
    debug_assert_eq!(placed, stream.bit_len());
    debug_assert!(!bits.has_bits());

    let (chosen, penalty) = mask::select_and_apply(&mut builder, level, forced_mask);
    builder.write_version_info();
    debug!("mask {} selected with penalty {}", chosen.value(), penalty);
    // Masking and configuration writes never touch the fixed dark module.
    debug_assert!(builder.module(builder.size() - 8, 8));

    let (version, size, modules) = builder.finish();
    QrMatrix::from_modules(size, &modules, version, level, chosen, options.quiet_zone)
}

fn capacity_error(
    segment: &Segment,
    eci: Option<u32>,
    version: Version,
    level: EccLevel,
) -> QrError {
    QrError::CapacityExceeded {
        needed_bits: encoder::required_bits(segment, eci, version).unwrap_or(usize::MAX),
        capacity_bits: tables::data_codewords(version, level) * 8,
    }
}
