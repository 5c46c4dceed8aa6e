use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::{Error, Result};

/// Absolute http(s) URL attached to a trip
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceUrl(Url);

impl FromStr for ResourceUrl {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let url = Url::parse(value.trim())
            .map_err(|e| Error::Validation(format!("Invalid URL: {}", e)))?;

        match url.scheme() {
            "http" | "https" if url.has_host() => Ok(Self(url)),
            _ => Err(Error::Validation(format!("Unsupported URL: {}", url))),
        }
    }
}

impl AsRef<str> for ResourceUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ResourceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
