#![deny(warnings)]
#![deny(clippy::all)]

pub fn sample_bytes(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

pub fn flip_byte(buf: &mut [u8], index: usize) {
    if buf.is_empty() {
        return;
    }

    let idx = index % buf.len();
    buf[idx] ^= 0xFF;
}

/// `len` zero bytes. Thirty-one of them shift the initial register up to
/// exactly `0x8000_0000`.
pub fn zero_run(len: usize) -> Vec<u8> {
    vec![0u8; len]
}
