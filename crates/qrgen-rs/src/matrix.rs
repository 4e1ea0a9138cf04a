use crate::bit_stream::{BitReader, BitWriter};
use crate::ecc_level::EccLevel;
use crate::error::QrError;
use crate::mask::Mask;
use crate::version::Version;

/// A finished QR symbol: the module grid plus generation metadata.
///
/// Modules are stored packed, 8 per byte, row-major, MSB leftmost — the same
/// layout the raw serialization uses. The quiet zone is a rendering hint
/// carried alongside the grid, never part of it.
///
/// Matrices rebuilt through [`from_raw_data`](Self::from_raw_data) lose the
/// metadata the raw form does not carry: `ecc_level()` and `mask_index()`
/// come back as `None`, and `version()` only survives because the side
/// length determines it.
#[derive(Debug, Clone)]
pub struct QrMatrix {
    size: usize,
    modules: Vec<u8>,
    version: Option<Version>,
    ecc_level: Option<EccLevel>,
    mask: Option<Mask>,
    quiet_zone: u32,
}

impl QrMatrix {
    pub(crate) fn from_modules(
        size: usize,
        modules: &[bool],
        version: Version,
        ecc_level: EccLevel,
        mask: Mask,
        quiet_zone: u32,
    ) -> Result<Self, QrError> {
        debug_assert_eq!(modules.len(), size * size);
        let mut w = BitWriter::new((size * size + 7) / 8);
        for &dark in modules {
            w.write(u32::from(dark), 1)?;
        }
        Ok(Self {
            size,
            modules: w.into_bytes(),
            version: Some(version),
            ecc_level: Some(ecc_level),
            mask: Some(mask),
            quiet_zone,
        })
    }

    /// Modules per side, quiet zone not included.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The module at (`row`, `col`); true is dark. Out-of-bounds reads are
    /// light, so renderers may overscan freely.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.size || col >= self.size {
            return false;
        }
        let bit = row * self.size + col;
        self.modules[bit / 8] & (0x80 >> (bit % 8)) != 0
    }

    /// The symbol version, when known.
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// The error correction level, when known.
    pub fn ecc_level(&self) -> Option<EccLevel> {
        self.ecc_level
    }

    /// The selected mask pattern index, when known.
    pub fn mask_index(&self) -> Option<u8> {
        self.mask.map(Mask::value)
    }

    /// The recommended light margin around the symbol, in modules.
    pub fn quiet_zone(&self) -> u32 {
        self.quiet_zone
    }

    /*---- Raw serialization ----*/

    /// The stable byte form: side length, then the packed modules.
    pub fn get_raw_data(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(1 + self.modules.len());
        raw.push(self.size as u8);
        raw.extend_from_slice(&self.modules);
        raw
    }

    /// Rebuilds a matrix from [`get_raw_data`](Self::get_raw_data) output.
    ///
    /// The body length must match the declared side. Version is re-derived
    /// from the side length; ECC level and mask are unknown from here on.
    pub fn from_raw_data(data: &[u8], quiet_zone: u32) -> Result<Self, QrError> {
        let (&side, body) = data
            .split_first()
            .ok_or_else(|| QrError::InvalidArgument("empty raw matrix data".into()))?;
        let size = usize::from(side);
        if body.len() != (size * size + 7) / 8 {
            return Err(QrError::InvalidArgument(format!(
                "raw matrix body is {} bytes, side {} needs {}",
                body.len(),
                size,
                (size * size + 7) / 8
            )));
        }
        // Re-pack through the bit stream so slack bits come out zero and
        // logically equal matrices stay byte-equal.
        let mut r = BitReader::new(body);
        let mut w = BitWriter::new(body.len());
        for _ in 0..size * size {
            w.write(u32::from(r.read_bit()), 1)?;
        }
        let modules = w.into_bytes();
        Ok(Self {
            size,
            modules,
            version: Version::from_side(size),
            ecc_level: None,
            mask: None,
            quiet_zone,
        })
    }

    /// Renders the grid one character per module, rows separated by newlines.
    /// A troubleshooting aid, not a rendering surface.
    pub fn to_debug_string(&self, dark: char, light: char) -> String {
        let mut out = String::with_capacity(self.size * (self.size + 1));
        for row in 0..self.size {
            if row > 0 {
                out.push('\n');
            }
            for col in 0..self.size {
                out.push(if self.get(row, col) { dark } else { light });
            }
        }
        out
    }
}
