use std::path::PathBuf;

use crate::domain::registry::DEFAULT_CAPACITY;

/// How account listings are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFormat {
    /// Name / number / balance blocks.
    #[default]
    Text,
    /// `number,name,kind,rate,tier,balance` rows with a header.
    Csv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of accounts; `None` means unbounded.
    pub capacity: Option<usize>,
    pub list_format: ListFormat,
    /// Read commands from this CSV script instead of the interactive menu.
    pub batch: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: Some(DEFAULT_CAPACITY),
            list_format: ListFormat::default(),
            batch: None,
        }
    }
}
