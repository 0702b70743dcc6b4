//! Raw binary serialization of `Uint128`.
//!
//! A value is always exactly 16 bytes on the wire: the `hi` limb followed
//! by the `lo` limb, each little-endian. See [`Uint128::to_raw_bytes`].

use super::Uint128;
use std::io::{self, Read, Write};

/// Size of the raw encoding in bytes.
pub const RAW_SIZE: usize = 16;

/// Writes the 16-byte raw encoding of `value` to `stream`.
pub fn pack<W: Write + ?Sized>(stream: &mut W, value: &Uint128) -> io::Result<()> {
    stream.write_all(&value.to_raw_bytes())
}

/// Reads exactly 16 bytes from `stream` and decodes them.
///
/// # Errors
/// Returns [`io::ErrorKind::UnexpectedEof`] if fewer than 16 bytes are
/// available, or any error reported by the stream.
pub fn unpack<R: Read + ?Sized>(stream: &mut R) -> io::Result<Uint128> {
    let mut buf = [0u8; RAW_SIZE];
    stream.read_exact(&mut buf)?;

    Ok(Uint128::from_raw_bytes(buf))
}
