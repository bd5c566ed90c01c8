use std::fmt;

use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// base64url, padded or not.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Segment of a compact token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSegment {
    #[allow(missing_docs)]
    Header,
    #[allow(missing_docs)]
    Payload,
}

impl TokenSegment {
    fn index(self) -> usize {
        match self {
            TokenSegment::Header => 0,
            TokenSegment::Payload => 1,
        }
    }
}

impl fmt::Display for TokenSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenSegment::Header => write!(f, "header"),
            TokenSegment::Payload => write!(f, "payload"),
        }
    }
}

/// The token could not be decoded.
#[derive(Debug, Error)]
pub enum MalformedTokenError {
    #[allow(missing_docs)]
    #[error("Token must have 3 dot-separated segments, found {count}")]
    InvalidParts { count: usize },

    #[allow(missing_docs)]
    #[error("Token {segment} is not valid base64url")]
    InvalidBase64 {
        segment: TokenSegment,
        #[source]
        source: base64::DecodeError,
    },

    #[allow(missing_docs)]
    #[error("Token {segment} is not a JSON object")]
    InvalidJson {
        segment: TokenSegment,
        #[source]
        source: serde_json::Error,
    },
}

/// Claims read from a token segment.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Claims(serde_json::Map<String, serde_json::Value>);

impl Claims {
    /// Value of the claim `name`, if present.
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.0.get(name)
    }

    /// The `sub` claim.
    pub fn subject(&self) -> Option<&str> {
        self.get("sub").and_then(serde_json::Value::as_str)
    }

    /// The `exp` claim as a timestamp. This is informational only, nothing here checks it.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("exp")
    }

    /// The `iat` claim as a timestamp.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("iat")
    }

    #[allow(missing_docs)]
    pub fn as_map(&self) -> &serde_json::Map<String, serde_json::Value> {
        &self.0
    }

    #[allow(missing_docs)]
    pub fn into_inner(self) -> serde_json::Map<String, serde_json::Value> {
        self.0
    }

    fn timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        let seconds = self.get(name)?.as_i64()?;
        DateTime::from_timestamp(seconds, 0)
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Claims {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(map)
    }
}

/// Decode the payload claims of a compact token.
///
/// The signature is neither read nor verified and expiry is not checked. Never treat the result
/// as proof of identity.
pub fn decode_claims(token: &str) -> Result<Claims, MalformedTokenError> {
    decode_segment(token, TokenSegment::Payload)
}

/// Decode the header claims of a compact token.
///
/// Same caveats as [`decode_claims`].
pub fn decode_header(token: &str) -> Result<Claims, MalformedTokenError> {
    decode_segment(token, TokenSegment::Header)
}

fn decode_segment(token: &str, segment: TokenSegment) -> Result<Claims, MalformedTokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(MalformedTokenError::InvalidParts { count: parts.len() });
    }

    let bytes = URL_SAFE_LENIENT
        .decode(parts[segment.index()])
        .map_err(|source| MalformedTokenError::InvalidBase64 { segment, source })?;

    serde_json::from_slice(&bytes)
        .map_err(|source| MalformedTokenError::InvalidJson { segment, source })
}
