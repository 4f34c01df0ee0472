/// Length of an encoded name: one initial glyph plus eight last-name glyphs.
pub const NAME_LEN: usize = 9;

const LAST_NAME_LEN: usize = 8;

pub const SPACE_GLYPH: u8 = 0x00;

/// Lowercase "c" used for names like "McCall".
pub const SMALL_C_GLYPH: u8 = 0x36;

/// Glyph code for an uppercase letter, digit or space.
pub fn glyph_for(ch: char) -> Option<u8> {
    match ch {
        ' ' => Some(SPACE_GLYPH),
        '0'..='9' => Some(0x01 + (ch as u8 - b'0')),
        'A'..='Z' => Some(0x0B + (ch as u8 - b'A')),
        _ => None,
    }
}

fn single_uppercase(ch: char) -> Option<char> {
    let mut upper = ch.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Encode a player's name into the 9-byte record field.
///
/// Byte 0 is the first initial (space glyph when the first name is empty,
/// 0 when the letter has no glyph). Bytes 1..9 hold the first eight
/// characters of the last name. Characters without a glyph are dropped and
/// the field is padded back to eight bytes with spaces.
pub fn encode_name(first_name: &str, last_name: &str) -> [u8; NAME_LEN] {
    let initial = match first_name.chars().next() {
        Some(ch) => single_uppercase(ch).and_then(glyph_for).unwrap_or(0),
        None => SPACE_GLYPH,
    };

    let mut chars: Vec<char> = last_name.chars().collect();
    while chars.len() < 3 {
        chars.push(' ');
    }

    let mut glyphs = Vec::with_capacity(LAST_NAME_LEN);
    for (i, &ch) in chars.iter().take(LAST_NAME_LEN).enumerate() {
        let code = if ch == ' ' {
            Some(SPACE_GLYPH)
        } else if i == 1 && ch == 'c' && chars[2].is_uppercase() {
            Some(SMALL_C_GLYPH)
        } else {
            single_uppercase(ch).and_then(glyph_for)
        };
        if let Some(code) = code {
            glyphs.push(code);
        }
    }
    glyphs.resize(LAST_NAME_LEN, SPACE_GLYPH);

    let mut out = [SPACE_GLYPH; NAME_LEN];
    out[0] = initial;
    out[1..].copy_from_slice(&glyphs);
    out
}
