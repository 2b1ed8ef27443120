#![deny(warnings)]
#![deny(clippy::all)]

use std::env;
use std::io::Cursor;

use fwsum_core::{checksum, checksum_reader, FirmwareSum};
use fwsum_testkit::{sample_bytes, zero_run};

const DEFAULT_ITERS: u64 = 200;
const DEFAULT_MAX_LEN: usize = 65_536;
const DEFAULT_SEED: u64 = 0xA5A5_5A5A_1234_5678;

fn main() {
    let args: Vec<String> = env::args().collect();
    let iters = parse_arg(&args, "--iters")
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_ITERS);
    let max_len = parse_arg(&args, "--max-len")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_LEN);
    let seed = env::var("FWSUM_FUZZ_SEED")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(DEFAULT_SEED);

    let seeds = build_seeds();
    for (index, data) in seeds.iter().enumerate() {
        check_consistent(seed, index as u64, data, data.len() / 2);
    }

    let mut rng = XorShift64::new(seed);
    let mut bytes_checked = 0u64;

    for iter in 0..iters {
        let len = (rng.next_u64() % (max_len as u64 + 1)) as usize;
        let mut data = vec![0u8; len];
        rng.fill_bytes(&mut data);
        let split = (rng.next_u64() % (len as u64 + 1)) as usize;

        check_consistent(seed, iter, &data, split);
        bytes_checked += len as u64;
    }

    println!(
        "fuzz-lite completed: {} iterations, {} seeds, {} bytes checked",
        iters,
        seeds.len(),
        bytes_checked
    );
}

fn parse_arg<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|idx| args.get(idx + 1))
        .map(|s| s.as_str())
}

fn build_seeds() -> Vec<Vec<u8>> {
    vec![
        Vec::new(),
        vec![0x00],
        vec![0xFF],
        zero_run(31),
        zero_run(32),
        vec![0xFF; 64],
        sample_bytes(8191),
        sample_bytes(8192),
        sample_bytes(8193),
    ]
}

fn check_consistent(seed: u64, case: u64, data: &[u8], split: usize) {
    let expected = checksum(data);

    let mut sum = FirmwareSum::new();
    sum.update(&data[..split]);
    sum.update(&data[split..]);
    assert_eq!(
        sum.value(),
        expected,
        "incremental mismatch (seed {seed}, case {case}, len {}, split {split})",
        data.len()
    );

    let (streamed, len) = match checksum_reader(&mut Cursor::new(data)) {
        Ok(result) => result,
        Err(err) => panic!("cursor read failed (seed {seed}, case {case}): {err}"),
    };
    assert_eq!(
        streamed,
        expected,
        "reader mismatch (seed {seed}, case {case}, len {})",
        data.len()
    );
    assert_eq!(len, data.len() as u64, "reader length (seed {seed}, case {case})");
}

struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn fill_bytes(&mut self, buf: &mut [u8]) {
        let mut offset = 0;
        while offset < buf.len() {
            let next = self.next_u64().to_le_bytes();
            let to_copy = std::cmp::min(next.len(), buf.len() - offset);
            buf[offset..offset + to_copy].copy_from_slice(&next[..to_copy]);
            offset += to_copy;
        }
    }
}
