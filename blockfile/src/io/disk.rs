use std::fs::File;
use std::os::unix::fs::FileExt;
use std::path::Path;

use log::{error, trace};

use crate::io::{BlockNumber, BlockStorage};
use crate::stats::DiskStats;
use crate::{DiskError, BLOCK_SIZE};

/// A virtual disk over a single backing file, addressed by block number.
///
/// The file must already exist and be large enough for every address the
/// caller intends to use (block `n` needs the file to span at least
/// `(n + 1) * BLOCK_SIZE` bytes); opening neither creates nor resizes it.
/// A read past end-of-file comes back short rather than failing outright.
/// Blocks that were sized into the file but never written read as zeros.
///
/// Transfers go through positioned I/O on the descriptor, so a shared device
/// issues no seeks and keeps no cursor. Nothing is serialized here: callers
/// racing each other on the same block get whatever the operating system
/// gives concurrent positioned I/O on overlapping ranges.
pub struct FileDisk {
    fd: File,
    stats: DiskStats,
    /// Report degraded transfers to the log instead of the caller.
    lenient: bool,
}

impl FileDisk {
    /// Opens the backing file at `path` for read/write access. The device
    /// starts in strict mode; see [`FileDisk::options`] for the rest.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DiskError> {
        Self::options().open(path)
    }

    pub fn options() -> FileDiskBuilder {
        FileDiskBuilder { lenient: false }
    }

    /// Read-only view of the operation counters. Counters only grow for the
    /// life of the device; there is no reset.
    pub fn stats(&self) -> &DiskStats {
        &self.stats
    }

    /// Returns ownership of the underlying file descriptor to the caller.
    pub fn into_file(self) -> File {
        self.fd
    }

    fn byte_offset(blocknr: BlockNumber) -> Result<u64, DiskError> {
        blocknr
            .checked_mul(BLOCK_SIZE as u64)
            .ok_or(DiskError::OutOfRange(blocknr))
    }

    /// Applies the device failure policy to a degraded transfer outcome.
    fn degrade(&self, err: DiskError) -> Result<(), DiskError> {
        if self.lenient {
            error!("{}", err);
            return Ok(());
        }
        Err(err)
    }
}

impl From<File> for FileDisk {
    fn from(fd: File) -> Self {
        FileDisk::options().from_file(fd)
    }
}

impl BlockStorage for FileDisk {
    fn read_block(&self, blocknr: BlockNumber, buf: &mut [u8]) -> Result<(), DiskError> {
        if buf.len() != BLOCK_SIZE {
            return Err(DiskError::UnalignedBuffer(buf.len()));
        }
        let offset = Self::byte_offset(blocknr)?;
        trace!("read({})", blocknr);

        let outcome = self.fd.read_at(buf, offset);
        // The read counts whether or not the transfer went through.
        self.stats.record_read();

        match outcome {
            Ok(n) if n == BLOCK_SIZE => Ok(()),
            Ok(n) => self.degrade(DiskError::ShortRead {
                block: blocknr,
                transferred: n,
                expected: BLOCK_SIZE,
            }),
            Err(e) => self.degrade(DiskError::Io(e)),
        }
    }

    fn write_block(&self, blocknr: BlockNumber, buf: &[u8]) -> Result<(), DiskError> {
        if buf.len() != BLOCK_SIZE {
            return Err(DiskError::UnalignedBuffer(buf.len()));
        }
        let offset = Self::byte_offset(blocknr)?;
        trace!("write({})", blocknr);

        let outcome = self.fd.write_at(buf, offset);
        self.stats.record_write();

        match outcome {
            Ok(n) if n == BLOCK_SIZE => Ok(()),
            Ok(n) => self.degrade(DiskError::ShortWrite {
                block: blocknr,
                transferred: n,
                expected: BLOCK_SIZE,
            }),
            Err(e) => self.degrade(DiskError::Io(e)),
        }
    }

    fn sync_disk(&self) -> Result<(), DiskError> {
        trace!("sync()");
        self.stats.record_sync();

        // fdatasync semantics: block contents and the metadata needed to read
        // them back are made durable, not necessarily timestamps.
        match self.fd.sync_data() {
            Ok(()) => Ok(()),
            Err(e) => self.degrade(DiskError::Io(e)),
        }
    }
}

/// Builds a [`FileDisk`] with non-default options.
pub struct FileDiskBuilder {
    lenient: bool,
}

impl FileDiskBuilder {
    /// When set, short transfers and i/o failures on read, write and sync are
    /// logged and swallowed; the call returns `Ok` as if it had succeeded.
    /// This preserves the observable behavior of callers written against the
    /// device this one replaces, which only ever reported such conditions on
    /// its diagnostic stream. Misuse of the API (a buffer of the wrong
    /// length, an address whose offset is unrepresentable) is still an error.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Opens an existing backing file read/write. The file is never created
    /// or resized here; provisioning it belongs to the caller.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<FileDisk, DiskError> {
        let fd = File::options().read(true).write(true).open(path)?;
        Ok(self.from_file(fd))
    }

    /// Wraps an already opened file handle. The handle must be open for both
    /// reading and writing.
    pub fn from_file(self, fd: File) -> FileDisk {
        FileDisk {
            fd,
            stats: DiskStats::default(),
            lenient: self.lenient,
        }
    }
}
