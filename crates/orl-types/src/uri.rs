//! Strict URI handling for off-chain references.
//!
//! Every off-chain record is addressed as `schema://rest`. The schema token
//! selects a backend adapter, so parsing is deliberately strict: split once
//! on the first `://`, require a non-empty token drawn from ASCII
//! alphanumerics plus `-`, and a non-empty remainder. Tokens are matched
//! case-sensitively by the registry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// The separator between the schema token and the backend-specific rest.
pub const SEPARATOR: &str = "://";

/// A validated off-chain reference of the form `schema://rest`.
///
/// Construction goes through [`Uri::parse`]; a `Uri` value is always
/// well-formed. The inner string is kept verbatim, so `as_str()` returns
/// exactly what was parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uri {
    raw: String,
    schema_len: usize,
}

impl Uri {
    /// Parse and validate an off-chain URI.
    pub fn parse(input: &str) -> TypeResult<Self> {
        if input.is_empty() {
            return Err(TypeError::Empty);
        }
        let Some((schema, rest)) = input.split_once(SEPARATOR) else {
            return Err(TypeError::MissingSeparator {
                uri: input.to_string(),
            });
        };
        if !is_valid_schema_token(schema) {
            return Err(TypeError::InvalidSchema {
                token: schema.to_string(),
            });
        }
        if rest.is_empty() {
            return Err(TypeError::EmptyTarget {
                uri: input.to_string(),
            });
        }
        Ok(Self {
            raw: input.to_string(),
            schema_len: schema.len(),
        })
    }

    /// The schema token preceding `://`.
    pub fn schema(&self) -> &str {
        &self.raw[..self.schema_len]
    }

    /// Everything after `://`. Its meaning is backend-specific.
    pub fn rest(&self) -> &str {
        &self.raw[self.schema_len + SEPARATOR.len()..]
    }

    /// The full URI string, verbatim.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

/// Whether `token` is a usable schema token: non-empty, ASCII alphanumeric
/// plus `-` only.
pub fn is_valid_schema_token(token: &str) -> bool {
    !token.is_empty()
        && token
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Uri {
    type Err = TypeError;

    fn from_str(s: &str) -> TypeResult<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Uri {
    type Error = TypeError;

    fn try_from(value: String) -> TypeResult<Self> {
        Self::parse(&value)
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.raw
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
