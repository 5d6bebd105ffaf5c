use std::{fs::File, io::{Read, Write}};

use regex::{Regex, RegexBuilder};

/// Compile one pattern source as a case-insensitive regex
pub fn compile_pattern(source: &str) -> Result<Regex, regex::Error>
{
    RegexBuilder::new(source).case_insensitive(true).build()
}

/// True if text matches at least one of the patterns, anywhere
/// in the text (unanchored)
pub fn matches_one(text: &str, patterns: &[Regex]) -> bool
{
    patterns.iter().any(|pattern| pattern.is_match(text))
}

pub fn write_file_bytes(path: &str, data: &[u8])
{
    let mut file = File::create(path).unwrap();
    file.write_all(data).unwrap();
}

pub fn read_file_utf8(path: &str) -> Option<String>
{
    let mut file = match File::open(path) {
        Err(why) =>
        {
            crate::debug(format!("error reading file to utf8, {}", why), None);
            return None
        },
        Ok(file) => file,
    };

    let mut s = String::new();
    match file.read_to_string(&mut s) {
        Err(why) =>
        {
            crate::debug(format!("error reading file to utf8, {}", why), None);
            None
        },
        Ok(_) => Some(s)
    }
}
