use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::util::read_file_utf8;

pub const CONFIG_PATH: &str = "config.json";

/// Configure the ignore filter
/// - ```ignore_file```: path to the newline-delimited ignore pattern file,
///   see [crate::filter::IgnoreFilter::load_patterns_from_file] for the line format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config
{
    pub ignore_file: String
}

impl Config
{
    pub fn default() -> Config
    {
        Config
        {
            ignore_file: "ignore.txt".to_string()
        }
    }

    pub fn load_or_default(path: &str) -> Config
    {
        match read_config(path)
        {
            Some(c) => c,
            None =>
            {
                Config::default()
            }
        }
    }
}

pub fn read_config(path: &str) -> Option<Config>
{
    if Path::new(&path).exists()
    {
        let data = match read_file_utf8(&path)
        {
            Some(d) => d,
            None =>
            {
                crate::debug(format!("Error reading configuration file {} no data", path), None);
                return None
            }
        };

        let config: Config = match serde_json::from_str(&data)
        {
            Ok(data) => {data},
            Err(why) =>
            {
                crate::debug(format!("Error reading configuration file {}\n{}", path, why), None);
                return None
            }
        };

        Some(config)
    }
    else
    {
        crate::debug(format!("Error configuration file {} does not exist", path), None);
        None
    }
}
