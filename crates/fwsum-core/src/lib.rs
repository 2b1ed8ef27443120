#![deny(warnings)]
#![deny(clippy::all)]

pub mod checksum;
pub mod error;
pub mod io_ext;

pub use checksum::{checksum, FirmwareSum, INITIAL, POLYNOMIAL};
pub use error::FwsumError;
pub use io_ext::{checksum_file, checksum_reader, Checksum};

pub type Result<T> = std::result::Result<T, FwsumError>;
