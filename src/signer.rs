//! Signer: compute one G1 tag per block and emit the tag stream, per
//! spec.md §4.4.

use crate::chunker::SequentialReader;
use crate::codec::byte_to_fr;
use crate::curve::{hash_to_g1, G1};
use crate::error::{PorError, Result};
use crate::types::{FileName, GeneratorVector, SecretKey, TagStream};
use std::path::Path;

/// Signs `file` under `s`-byte blocks, producing one tag σ_i per whole
/// block. Reads the file sequentially in a single forward pass rather
/// than the source's per-(block, sub-block) reopen-and-seek pattern —
/// `u` is loaded once by the caller and held for the whole run, since
/// `|u| = s` is small relative to the file.
pub fn sign(
    path: impl AsRef<Path>,
    s: usize,
    sk: &SecretKey,
    name: &FileName,
    u: &GeneratorVector,
) -> Result<TagStream> {
    if u.len() != s {
        return Err(PorError::parameter(format!(
            "generator vector has length {} but s={}",
            u.len(),
            s
        )));
    }

    let mut reader = SequentialReader::open(path, s)?;
    let mut tags = Vec::with_capacity(reader.block_count() as usize);

    let mut index: u64 = 0;
    while let Some(block) = reader.next_block()? {
        let u_i = aggregate_block(&block, &u.0);
        let h_i = hash_to_g1(name.0, index);
        let sigma_i: G1 = sk.0 * (h_i + u_i);
        tags.push(sigma_i);
        index += 1;
    }

    Ok(TagStream(tags))
}

/// Computes U_i = Σ_j m_{i,j} · u_j for one block.
fn aggregate_block(block: &[u8], u: &[G1]) -> G1 {
    let mut acc = crate::curve::g1_zero();
    for (byte, u_j) in block.iter().zip(u.iter()) {
        acc += *u_j * byte_to_fr(*byte);
    }
    acc
}
