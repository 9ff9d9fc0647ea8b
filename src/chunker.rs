//! Deterministic partition of a file into `n` blocks of `s` bytes each.
//!
//! The source re-opens and seeks once per (block, sub-block) pair; this
//! module instead exposes two access patterns explicitly — sequential for
//! the Signer's single forward pass, and random-access-by-seek for the
//! Prover, which only ever touches the handful of blocks a challenge set
//! names. Both share the same block count so they can never disagree on
//! where the file ends.

use crate::error::{PorError, Result};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// A file viewed as `n` contiguous blocks of `s` bytes, with any trailing
/// `L mod s` bytes discarded (spec.md §4.2).
#[derive(Debug)]
pub struct Chunker {
    block_size: usize,
    block_count: u64,
}

impl Chunker {
    /// Derives the block count for a file of `file_len` bytes under block
    /// size `s`. Returns a [`PorError::Parameter`] if `s` is zero or
    /// exceeds the file length, matching the Chunker's precondition
    /// `1 ≤ s ≤ L`.
    pub fn new(file_len: u64, s: usize) -> Result<Self> {
        if s == 0 {
            return Err(PorError::parameter("block size s must be at least 1"));
        }
        if (s as u64) > file_len {
            return Err(PorError::parameter(format!(
                "block size s={} exceeds file length {}",
                s, file_len
            )));
        }
        let block_count = file_len / s as u64;
        Ok(Chunker {
            block_size: s,
            block_count,
        })
    }

    /// n = ⌊L / s⌋, the number of whole blocks.
    pub fn block_count(&self) -> u64 {
        self.block_count
    }

    /// s, the block size in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    fn check_index(&self, i: u64) -> Result<()> {
        if i >= self.block_count {
            return Err(PorError::parameter(format!(
                "block index {} out of range [0, {})",
                i, self.block_count
            )));
        }
        Ok(())
    }
}

/// Sequential reader the Signer uses: opens the file once and walks
/// blocks 0, 1, 2, ... in order without seeking, per the "stream the file
/// sequentially for Sign" design note.
pub struct SequentialReader {
    file: File,
    chunker: Chunker,
    next_index: u64,
}

impl SequentialReader {
    pub fn open(path: impl AsRef<Path>, s: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PorError::io(path, e))?;
        let file_len = file
            .metadata()
            .map_err(|e| PorError::io(path, e))?
            .len();
        let chunker = Chunker::new(file_len, s)?;
        Ok(SequentialReader {
            file,
            chunker,
            next_index: 0,
        })
    }

    pub fn block_count(&self) -> u64 {
        self.chunker.block_count()
    }

    pub fn block_size(&self) -> usize {
        self.chunker.block_size()
    }

    /// Reads the next block in order, or `None` once all `n` whole blocks
    /// have been consumed. Any trailing partial block is never returned.
    pub fn next_block(&mut self) -> Result<Option<Vec<u8>>> {
        if self.next_index >= self.chunker.block_count() {
            return Ok(None);
        }
        let mut buf = vec![0u8; self.chunker.block_size()];
        self.file
            .read_exact(&mut buf)
            .map_err(|e| PorError::io("<sequential file>", e))?;
        self.next_index += 1;
        Ok(Some(buf))
    }
}

/// Random-access reader the Prover uses: one open file handle, seeking
/// directly to `i * s` for each challenged block index.
pub struct RandomAccessReader {
    file: File,
    chunker: Chunker,
}

impl RandomAccessReader {
    pub fn open(path: impl AsRef<Path>, s: usize) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| PorError::io(path, e))?;
        let file_len = file
            .metadata()
            .map_err(|e| PorError::io(path, e))?
            .len();
        let chunker = Chunker::new(file_len, s)?;
        Ok(RandomAccessReader { file, chunker })
    }

    pub fn block_count(&self) -> u64 {
        self.chunker.block_count()
    }

    pub fn block_size(&self) -> usize {
        self.chunker.block_size()
    }

    /// Reads block `i` by seeking to `i * s` and reading `s` bytes.
    pub fn read_block(&mut self, i: u64) -> Result<Vec<u8>> {
        self.chunker.check_index(i)?;
        let offset = i * self.chunker.block_size() as u64;
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|e| PorError::io("<random access file>", e))?;
        let mut buf = vec![0u8; self.chunker.block_size()];
        self.file
            .read_exact(&mut buf)
            .map_err(|e| PorError::io("<random access file>", e))?;
        Ok(buf)
    }

    /// Reads a single byte `m_{i,j}` without materializing the whole
    /// block, for callers that only need one sub-block.
    pub fn read_byte(&mut self, i: u64, j: usize) -> Result<u8> {
        if j >= self.chunker.block_size() {
            return Err(PorError::parameter(format!(
                "sub-block index {} out of range [0, {})",
                j,
                self.chunker.block_size()
            )));
        }
        self.chunker.check_index(i)?;
        let offset = i * self.chunker.block_size() as u64 + j as u64;
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|e| PorError::io("<random access file>", e))?;
        let mut buf = [0u8; 1];
        self.file
            .read_exact(&mut buf)
            .map_err(|e| PorError::io("<random access file>", e))?;
        Ok(buf[0])
    }
}
