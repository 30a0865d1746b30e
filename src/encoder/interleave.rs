/// Block splitting, ECC generation and codeword interleaving
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::EcBlockInfo;

/// One block: its data codewords followed by its ECC codewords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Data codewords
    pub data: Vec<u8>,
    /// ECC codewords
    pub ecc: Vec<u8>,
}

/// Split data codewords into blocks (short group first) and compute ECC
pub fn split_into_blocks(data: &[u8], info: &EcBlockInfo) -> Vec<Block> {
    debug_assert_eq!(data.len(), info.data_codewords());
    let rs = ReedSolomonEncoder::new(info.ecc_per_block);
    let mut rest = data;
    (0..info.num_blocks)
        .map(|i| {
            let (block, tail) = rest.split_at(info.block_data_len(i));
            rest = tail;
            Block {
                data: block.to_vec(),
                ecc: rs.encode(block),
            }
        })
        .collect()
}

/// Final codeword sequence: data read column-wise across blocks (short
/// blocks run out one column early), then ECC read the same way
pub fn interleave(blocks: &[Block]) -> Vec<u8> {
    let total: usize = blocks.iter().map(|b| b.data.len() + b.ecc.len()).sum();
    let mut result = Vec::with_capacity(total);

    let max_data = blocks.iter().map(|b| b.data.len()).max().unwrap_or(0);
    for i in 0..max_data {
        result.extend(blocks.iter().filter_map(|b| b.data.get(i)));
    }
    let max_ecc = blocks.iter().map(|b| b.ecc.len()).max().unwrap_or(0);
    for i in 0..max_ecc {
        result.extend(blocks.iter().filter_map(|b| b.ecc.get(i)));
    }
    result
}

/// Data codewords -> interleaved data + ECC for the given block layout
pub fn add_ecc_and_interleave(data: &[u8], info: &EcBlockInfo) -> Vec<u8> {
    interleave(&split_into_blocks(data, info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::tables::{ec_block_info, num_data_codewords, num_total_codewords};
    use crate::models::{ECLevel, Version};

    #[test]
    fn test_single_block_is_data_then_ecc() {
        let info = ec_block_info(Version::MIN, ECLevel::M);
        let data = [32, 91, 11, 120, 209, 114, 220, 77, 67, 64, 236, 17, 236, 17, 236, 17];
        let out = add_ecc_and_interleave(&data, &info);
        assert_eq!(&out[..16], &data);
        assert_eq!(&out[16..], &[196, 35, 39, 119, 235, 215, 231, 226, 93, 23]);
    }

    #[test]
    fn test_unequal_groups_order() {
        // 5-Q: blocks of 15, 15, 16, 16 data codewords
        let version = Version::new(5).unwrap();
        let info = ec_block_info(version, ECLevel::Q);
        let data: Vec<u8> = (0..num_data_codewords(version, ECLevel::Q) as u8).collect();
        let blocks = split_into_blocks(&data, &info);
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[0].data[0], 0);
        assert_eq!(blocks[1].data[0], 15);
        assert_eq!(blocks[2].data[0], 30);
        assert_eq!(blocks[3].data[0], 46);

        let out = interleave(&blocks);
        assert_eq!(out.len(), num_total_codewords(version));
        assert_eq!(&out[..4], &[0, 15, 30, 46]);
        // Column 14 is the last the short blocks contribute to
        assert_eq!(&out[56..60], &[14, 29, 44, 60]);
        // Column 15 exists only in the long blocks
        assert_eq!(&out[60..62], &[45, 61]);
        // ECC starts right after all 62 data codewords
        assert_eq!(out[62], blocks[0].ecc[0]);
        assert_eq!(out[63], blocks[1].ecc[0]);
    }
}
