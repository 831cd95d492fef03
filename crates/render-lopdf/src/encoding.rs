/// Encodes a string for a font using `WinAnsiEncoding`.
///
/// Latin-1 characters map to themselves and the typographic characters of the
/// 0x80-0x9F block get their Windows-1252 codes. Anything else becomes `?`.
pub fn to_win_ansi(s: &str) -> Vec<u8> {
    let mut unmapped = 0usize;
    let bytes: Vec<u8> = s
        .chars()
        .map(|c| {
            encode_char(c).unwrap_or_else(|| {
                unmapped += 1;
                b'?'
            })
        })
        .collect();
    if unmapped > 0 {
        log::warn!(
            "{} character(s) in {:?} have no WinAnsi code and were replaced with '?'",
            unmapped,
            s
        );
    }
    bytes
}

fn encode_char(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7e | 0xa0..=0xff => Some(code as u8),
        _ => windows_1252_extra(c),
    }
}

fn windows_1252_extra(c: char) -> Option<u8> {
    let byte = match c {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201c}' => 0x93,
        '\u{201d}' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => return None,
    };
    Some(byte)
}
