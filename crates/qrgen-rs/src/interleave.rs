//! Splits data codewords into EC blocks and interleaves the final stream.

use crate::bit_stream::BitWriter;
use crate::ecc_level::EccLevel;
use crate::error::QrError;
use crate::reed_solomon;
use crate::tables;
use crate::version::Version;

/// Produces the placement bit stream for `version`/`level`: data codewords
/// interleaved by column across blocks, then EC codewords likewise, then the
/// version's remainder zero-bits. The writer's bit length is exactly
/// `total_codewords * 8 + remainder_bits`.
pub(crate) fn interleave(
    data: &[u8],
    version: Version,
    level: EccLevel,
) -> Result<BitWriter, QrError> {
    let s = tables::block_structure(version, level);
    debug_assert_eq!(data.len(), tables::data_codewords(version, level));

    let mut blocks: Vec<&[u8]> = Vec::with_capacity(s.group1_blocks + s.group2_blocks);
    let mut offset = 0;
    for i in 0..s.group1_blocks + s.group2_blocks {
        let len = if i < s.group1_blocks {
            s.group1_data_len
        } else {
            s.group2_data_len
        };
        blocks.push(&data[offset..offset + len]);
        offset += len;
    }
    let ecc: Vec<Vec<u8>> = blocks
        .iter()
        .map(|block| reed_solomon::encode_block(block, s.ec_per_block))
        .collect();

    let remainder = tables::remainder_bits(version);
    let mut w = BitWriter::new(tables::total_codewords(version) + usize::from(remainder > 0));
    for i in 0..s.group2_data_len.max(s.group1_data_len) {
        for block in &blocks {
            if let Some(&codeword) = block.get(i) {
                w.write(u32::from(codeword), 8)?;
            }
        }
    }
    for i in 0..s.ec_per_block {
        for block_ecc in &ecc {
            w.write(u32::from(block_ecc[i]), 8)?;
        }
    }
    w.write(0, remainder)?;
    Ok(w)
}
