use std::fmt;
use std::str::FromStr;

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{Error, Result};

const MIN_LEN: usize = 4;
const MAX_LEN: usize = 256;

/// Short human readable label, used for trip destinations, links and activities
#[derive(Debug, Clone, PartialEq)]
pub struct Title(String);

impl AsRef<str> for Title {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for Title {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let value = value.trim();
        let len = value.graphemes(true).count();

        if len < MIN_LEN {
            return Err(Error::Validation(format!(
                "Must be at least {} characters long",
                MIN_LEN
            )));
        }
        if len > MAX_LEN {
            return Err(Error::Validation("Too long".into()));
        }
        Ok(Self(value.to_string()))
    }
}

/// Trip destination, held to the same rules as a title
pub type Destination = Title;
