/// Feedback polynomial XORed into the register when bit 31 shifts out.
pub const POLYNOMIAL: u32 = 0x1D87_2B41;

/// Register value before any byte is folded in.
pub const INITIAL: u32 = 1;

const TOP_BIT: u32 = 0x8000_0000;

/// Incremental form of [`checksum`].
///
/// Feeding the input in several `update` calls gives the same value as one
/// call over the concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareSum {
    value: u32,
}

impl FirmwareSum {
    pub fn new() -> Self {
        Self::from_state(INITIAL)
    }

    /// Resume from a previously observed register value.
    pub fn from_state(value: u32) -> Self {
        Self { value }
    }

    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.value = step(self.value, byte);
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }
}

impl Default for FirmwareSum {
    fn default() -> Self {
        Self::new()
    }
}

pub fn checksum(data: &[u8]) -> u32 {
    let mut sum = FirmwareSum::new();
    sum.update(data);
    sum.value()
}

#[inline]
fn step(value: u32, byte: u8) -> u32 {
    let shifted = if value & TOP_BIT != 0 {
        (value << 1) ^ POLYNOMIAL
    } else {
        value << 1
    };
    shifted ^ u32::from(byte)
}
