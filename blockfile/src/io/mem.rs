use std::sync::Mutex;

use crate::io::{BlockNumber, BlockStorage};
use crate::{DiskError, BLOCK_SIZE};

/// Block storage over a heap allocation, for exercising layers built on top
/// of a device without touching a real file. Transfer rules match
/// [`crate::FileDisk`] except that addressing past the last block is an error
/// rather than a short transfer, and durability barriers do nothing.
pub struct MemDisk {
    blocks: Mutex<Box<[u8]>>,
    nblocks: u64,
}

impl MemDisk {
    /// A zero-filled store of `nblocks` blocks.
    pub fn new(nblocks: u64) -> Self {
        MemDisk {
            blocks: Mutex::new(vec![0; nblocks as usize * BLOCK_SIZE].into_boxed_slice()),
            nblocks,
        }
    }

    fn block_range(
        &self,
        blocknr: BlockNumber,
        len: usize,
    ) -> Result<std::ops::Range<usize>, DiskError> {
        if len != BLOCK_SIZE {
            return Err(DiskError::UnalignedBuffer(len));
        }
        if blocknr >= self.nblocks {
            return Err(DiskError::OutOfRange(blocknr));
        }
        let start = blocknr as usize * BLOCK_SIZE;
        Ok(start..start + BLOCK_SIZE)
    }
}

impl BlockStorage for MemDisk {
    fn read_block(&self, blocknr: BlockNumber, buf: &mut [u8]) -> Result<(), DiskError> {
        let range = self.block_range(blocknr, buf.len())?;
        buf.copy_from_slice(&self.blocks.lock().unwrap()[range]);
        Ok(())
    }

    fn write_block(&self, blocknr: BlockNumber, buf: &[u8]) -> Result<(), DiskError> {
        let range = self.block_range(blocknr, buf.len())?;
        self.blocks.lock().unwrap()[range].copy_from_slice(buf);
        Ok(())
    }

    fn sync_disk(&self) -> Result<(), DiskError> {
        Ok(())
    }
}
