use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::checksum::FirmwareSum;
use crate::error::FwsumError;

const BLOCK_LEN: usize = 8192;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksum {
    pub value: u32,
    pub len: u64,
}

/// Stream `reader` to EOF through the checksum.
///
/// Returns the checksum and the number of bytes consumed. A read error
/// aborts the whole computation; no value is produced for partial input.
pub fn checksum_reader<R: Read>(reader: &mut R) -> io::Result<(u32, u64)> {
    let mut buffer = [0u8; BLOCK_LEN];
    let mut sum = FirmwareSum::new();
    let mut len = 0u64;

    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        sum.update(&buffer[..read]);
        len += read as u64;
    }

    Ok((sum.value(), len))
}

pub fn checksum_file(path: &Path) -> crate::Result<Checksum> {
    let read_err = |source| FwsumError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_err)?;
    let (value, len) = checksum_reader(&mut file).map_err(read_err)?;
    debug!(path = %path.display(), len, value, "checksummed file");

    Ok(Checksum { value, len })
}
