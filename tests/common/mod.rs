#[allow(dead_code)]
pub const BAD_UTF8: [u8; 4] = [0xFF, 0xFE, 0xC3, 0x28];
