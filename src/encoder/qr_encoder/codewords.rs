use crate::encoder::bit_buffer::BitBuffer;
use crate::encoder::reed_solomon::ReedSolomonGenerator;
use crate::encoder::segment::Segment;
use crate::encoder::tables::{data_codewords, ec_block_info, raw_codewords};
use crate::error::Result;
use crate::models::{ECLevel, Version};

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Mode and count indicators plus payload for every segment, then terminator,
/// byte alignment and alternating pad bytes up to the data capacity.
///
/// The caller has already checked that the segments fit `version` at `ec_level`.
pub(super) fn assemble_data_codewords(
    segments: &[Segment],
    version: Version,
    ec_level: ECLevel,
) -> Result<Vec<u8>> {
    let capacity_bits = data_codewords(version, ec_level) * 8;
    let mut bits = BitBuffer::with_capacity(capacity_bits);

    for segment in segments {
        let mode = segment.mode();
        bits.append_bits(mode.mode_bits(), 4)?;
        bits.append_bits(
            segment.char_count() as u32,
            mode.char_count_bits(version.number()),
        )?;
        bits.append_segment(segment);
    }
    assert!(
        bits.bit_len() <= capacity_bits,
        "segments overflow the selected version"
    );

    // Terminator: up to four zero bits, as many as fit
    let terminator = (capacity_bits - bits.bit_len()).min(4);
    bits.append_bits(0, terminator as u8)?;
    let align = (8 - bits.bit_len() % 8) % 8;
    bits.append_bits(0, align as u8)?;
    assert_eq!(bits.bit_len() % 8, 0, "codeword stream not byte aligned");

    for &pad in PAD_BYTES.iter().cycle() {
        if bits.bit_len() >= capacity_bits {
            break;
        }
        bits.append_bits(pad as u32, 8)?;
    }
    assert_eq!(bits.bit_len(), capacity_bits, "padding overshot the data capacity");

    Ok(bits.into_bytes())
}

/// Split `data` into blocks (short ones first), append each block's ECC,
/// and interleave into the final codeword sequence.
///
/// Panics unless `data` holds exactly the data capacity for `version` and `ec_level`.
pub(crate) fn add_ecc_and_interleave(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<u8> {
    assert_eq!(
        data.len(),
        data_codewords(version, ec_level),
        "data codeword count does not match capacity"
    );

    let info = ec_block_info(version, ec_level);
    let raw = raw_codewords(version);
    let num_blocks = info.num_blocks;
    let ecc_len = info.ecc_per_block;
    let num_short = num_blocks - raw % num_blocks;
    let short_len = raw / num_blocks;

    let rs = match ReedSolomonGenerator::new(ecc_len) {
        Ok(rs) => rs,
        Err(err) => panic!("ECC table entry out of range: {}", err),
    };

    let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
    let mut offset = 0;
    for i in 0..num_blocks {
        let data_len = short_len - ecc_len + usize::from(i >= num_short);
        let chunk = &data[offset..offset + data_len];
        offset += data_len;

        let mut block = Vec::with_capacity(short_len + 1);
        block.extend_from_slice(chunk);
        if i < num_short {
            // placeholder so every block has the same length
            block.push(0);
        }
        block.extend_from_slice(&rs.remainder(chunk));
        blocks.push(block);
    }
    assert_eq!(offset, data.len(), "blocks do not cover the data codewords");

    let mut result = Vec::with_capacity(raw);
    for i in 0..=short_len {
        for (j, block) in blocks.iter().enumerate() {
            if i != short_len - ecc_len || j >= num_short {
                result.push(block[i]);
            }
        }
    }
    assert_eq!(result.len(), raw, "interleaved length does not match capacity");

    result
}
