use crate::bit_stream::BitWriter;
use crate::error::QrError;
use crate::mode::Mode;
use crate::ALPHANUMERIC_CHARSET;

/// One run of payload data in a single encoding mode.
///
/// The payload bits are packed at construction; the mode indicator and
/// character-count field are emitted later by the encoder, once the version
/// (and with it the count width) is known.
#[derive(Debug, Clone)]
pub struct Segment {
    mode: Mode,
    char_count: usize,
    data: Vec<u8>,
    data_bits: usize,
}

impl Segment {
    /// Picks the densest mode able to carry `content`.
    ///
    /// Empty content is a zero-length Byte segment so that an empty string
    /// still yields a valid symbol.
    pub fn detect_mode(content: &str) -> Mode {
        if content.is_empty() {
            Mode::Byte
        } else if content.bytes().all(|b| b.is_ascii_digit()) {
            Mode::Numeric
        } else if content.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c)) {
            Mode::Alphanumeric
        } else {
            Mode::Byte
        }
    }

    /// Packs decimal digits: 3 digits to 10 bits, then 2 to 7 or 1 to 4.
    pub fn numeric(text: &str) -> Result<Self, QrError> {
        let bits = text.len() / 3 * 10 + [0, 4, 7][text.len() % 3];
        let mut w = BitWriter::new((bits + 7) / 8);
        let mut group: u32 = 0;
        let mut group_len = 0usize;
        for (index, byte) in text.bytes().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(QrError::UnsupportedCharacter { index });
            }
            group = group * 10 + u32::from(byte - b'0');
            group_len += 1;
            if group_len == 3 {
                w.write(group, 10)?;
                group = 0;
                group_len = 0;
            }
        }
        match group_len {
            1 => w.write(group, 4)?,
            2 => w.write(group, 7)?,
            _ => {}
        }
        Ok(Self::from_writer(Mode::Numeric, text.len(), w))
    }

    /// Packs characters of the 45-symbol alphabet: pairs to 11 bits
    /// (a·45 + b), a trailing single to 6.
    pub fn alphanumeric(text: &str) -> Result<Self, QrError> {
        let count = text.chars().count();
        let bits = count / 2 * 11 + count % 2 * 6;
        let mut w = BitWriter::new((bits + 7) / 8);
        let mut pair: u32 = 0;
        let mut pair_len = 0usize;
        for (index, c) in text.chars().enumerate() {
            let value = ALPHANUMERIC_CHARSET
                .find(c)
                .ok_or(QrError::UnsupportedCharacter { index })? as u32;
            pair = pair * 45 + value;
            pair_len += 1;
            if pair_len == 2 {
                w.write(pair, 11)?;
                pair = 0;
                pair_len = 0;
            }
        }
        if pair_len == 1 {
            w.write(pair, 6)?;
        }
        Ok(Self::from_writer(Mode::Alphanumeric, count, w))
    }

    /// A Byte segment from raw bytes, no character-set interpretation.
    pub fn bytes(data: &[u8]) -> Result<Self, QrError> {
        let mut w = BitWriter::new(data.len());
        for &b in data {
            w.write(u32::from(b), 8)?;
        }
        Ok(Self::from_writer(Mode::Byte, data.len(), w))
    }

    /// A Byte segment holding `content` as ISO-8859-1.
    ///
    /// Characters above U+00FF have no Latin-1 byte and fail
    /// `UnsupportedCharacter`; switching to ECI 26 selects UTF-8 instead.
    pub fn bytes_latin1(content: &str) -> Result<Self, QrError> {
        let mut data = Vec::with_capacity(content.len());
        for (index, c) in content.chars().enumerate() {
            let cp = u32::from(c);
            if cp > 0xFF {
                return Err(QrError::UnsupportedCharacter { index });
            }
            data.push(cp as u8);
        }
        Self::bytes(&data)
    }

    /// A Byte segment holding `content` as UTF-8 (the ECI 26 interpretation).
    pub fn bytes_utf8(content: &str) -> Result<Self, QrError> {
        Self::bytes(content.as_bytes())
    }

    fn from_writer(mode: Mode, char_count: usize, w: BitWriter) -> Self {
        let data_bits = w.bit_len();
        Self {
            mode,
            char_count,
            data: w.into_bytes(),
            data_bits,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Characters for text modes, bytes for Byte mode.
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// The packed payload, MSB-first; only the first
    /// [`data_bits`](Self::data_bits) bits are meaningful.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_bits(&self) -> usize {
        self.data_bits
    }
}
