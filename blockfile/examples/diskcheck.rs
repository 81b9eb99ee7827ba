use std::env;
use std::process;

use blockfile::{BlockStorage, Buffer, FileDisk, BLOCK_SIZE};

/// Round-trips the first block of an existing disk image and prints the
/// operation counters. Run with RUST_LOG=trace to watch per-operation traces.
pub fn main() {
    env_logger::init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: diskcheck <disk-image>");
            process::exit(2);
        }
    };

    let disk = match FileDisk::open(&path) {
        Ok(disk) => disk,
        Err(e) => {
            eprintln!("couldn't open disk file {}: {}", path, e);
            process::exit(1);
        }
    };

    let mut block = Buffer::zeroed(BLOCK_SIZE);
    if let Err(e) = disk.read_block(0, &mut block) {
        eprintln!("read error: {}", e);
        process::exit(1);
    }

    let scratch = block.duplicate();
    if let Err(e) = disk.write_block(0, &scratch) {
        eprintln!("write error: {}", e);
        process::exit(1);
    }

    if let Err(e) = disk.sync_disk() {
        eprintln!("sync error: {}", e);
        process::exit(1);
    }

    let stats = disk.stats();
    println!(
        "{}: {} reads, {} writes, {} syncs",
        path,
        stats.reads(),
        stats.writes(),
        stats.syncs()
    );
}
