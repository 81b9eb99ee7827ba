use crate::DiskError;

/// The block number to access ranging from 0 (the first block) to n - 1 (the
/// last block) where n is the number of blocks the backing store holds. Kept
/// at 64 bits rather than a machine word so the address space covers
/// multi-terabyte stores on every target.
pub type BlockNumber = u64;

/// Whole-block transfer and durability interface of a device.
///
/// Every operation moves exactly one block or reports why it could not; there
/// is no partial-block API, which keeps alignment and read-modify-write
/// hazards out of this layer. Receivers are shared references so one device
/// can be handed to several callers, but no ordering is promised between
/// concurrent transfers touching the same block.
pub trait BlockStorage {
    /// Reads disk block number into the provided buffer.
    ///
    /// # Errors
    ///
    /// The buffer must be exactly one block long. A transfer that moves the
    /// wrong number of bytes, or that the backing store rejects, is reported
    /// according to the implementation's failure policy.
    fn read_block(&self, blocknr: BlockNumber, buf: &mut [u8]) -> Result<(), DiskError>;

    /// Writes the provided buffer into the specified block number.
    ///
    /// # Errors
    ///
    /// Same rules as [`BlockStorage::read_block`].
    fn write_block(&self, blocknr: BlockNumber, buf: &[u8]) -> Result<(), DiskError>;

    /// Forces previously written blocks down to durable storage. Once this
    /// returns `Ok`, every write issued before the call survives a crash of
    /// the process or the machine; writes racing the call are not covered
    /// either way.
    fn sync_disk(&self) -> Result<(), DiskError>;
}
