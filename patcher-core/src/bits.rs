#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Half {
    High,
    Low,
}

pub fn set_high_nibble(byte: u8, value: i64) -> u8 {
    (byte & 0x0F) | (((value & 0x0F) as u8) << 4)
}

pub fn set_low_nibble(byte: u8, value: i64) -> u8 {
    (byte & 0xF0) | ((value & 0x0F) as u8)
}

pub fn set_full_byte(_byte: u8, value: i64) -> u8 {
    (value & 0xFF) as u8
}

/// Write `value` into one half of `byte`, or return `byte` unchanged when
/// there is no value.
pub fn merge_nibble(byte: u8, half: Half, value: Option<i64>) -> u8 {
    match (half, value) {
        (_, None) => byte,
        (Half::High, Some(v)) => set_high_nibble(byte, v),
        (Half::Low, Some(v)) => set_low_nibble(byte, v),
    }
}

/// Merge a high/low nibble pair; each half is kept independently when absent.
pub fn merge_pair(byte: u8, high: Option<i64>, low: Option<i64>) -> u8 {
    let byte = merge_nibble(byte, Half::High, high);
    merge_nibble(byte, Half::Low, low)
}
