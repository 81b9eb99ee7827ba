use thiserror::Error;

use crate::io::BlockNumber;

/// Failure modes of a device operation.
///
/// `ShortRead`, `ShortWrite` and `Io` describe degraded transfers; a device
/// opened in lenient mode logs those and carries on. `UnalignedBuffer` and
/// `OutOfRange` reject the call before any I/O is attempted and are enforced
/// in every mode.
#[derive(Error, Debug)]
pub enum DiskError {
    #[error("buffer of {0} bytes does not span exactly one block")]
    UnalignedBuffer(usize),
    #[error("block {0} is outside the addressable range")]
    OutOfRange(BlockNumber),
    #[error("short read at block {block}: {transferred} of {expected} bytes")]
    ShortRead {
        block: BlockNumber,
        transferred: usize,
        expected: usize,
    },
    #[error("short write at block {block}: {transferred} of {expected} bytes")]
    ShortWrite {
        block: BlockNumber,
        transferred: usize,
        expected: usize,
    },
    #[error("backing store i/o error: {0}")]
    Io(#[from] std::io::Error),
}
