pub const AVERAGE_SCALE: u32 = 1000;
pub const ERA_SCALE: u32 = 100;

/// Largest scaled value that still fits in three hex digits.
pub const MAX_THREE_DIGITS: u32 = 0xFFF;

/// Scale and round half to even. Negative and NaN inputs become 0.
pub fn scale_decimal(value: f64, scale: u32) -> u32 {
    // float -> int casts saturate, so this cannot wrap.
    (value * f64::from(scale)).round_ties_even() as u32
}

/// Split an already-scaled value into `(low_byte, high_nibble)`.
pub fn split_hex_digits(scaled: u32) -> (u8, u8) {
    let low_byte = (scaled & 0xFF) as u8;
    let high_nibble = if scaled <= MAX_THREE_DIGITS {
        ((scaled >> 8) & 0x0F) as u8
    } else {
        0
    };
    (low_byte, high_nibble)
}

/// Last two hex digits of the scaled value as a byte, the third-from-last as
/// a nibble. Values needing a fourth digit get a zero nibble.
pub fn encode_scaled_decimal(value: f64, scale: u32) -> (u8, u8) {
    split_hex_digits(scale_decimal(value, scale))
}

/// True when the value needs more than three hex digits once scaled.
pub fn overflows_three_digits(value: f64, scale: u32) -> bool {
    scale_decimal(value, scale) > MAX_THREE_DIGITS
}
