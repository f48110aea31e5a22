//! Serde codec for URIs (feature-gated)
//!
//! Encodes a [`Url`] as its canonical string and decodes it by parsing that
//! string back. Use it on fields with `#[serde(with = ...)]`; [`option`]
//! handles `Option<Url>`.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use url::Url;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Endpoint {
//!     #[serde(with = "expectant::uri")]
//!     base: Url,
//!     #[serde(with = "expectant::uri::option", default)]
//!     fallback: Option<Url>,
//! }
//!
//! let json = r#"{"base":"https://example.com/api"}"#;
//! let endpoint: Endpoint = serde_json::from_str(json).unwrap();
//! assert_eq!(endpoint.base.host_str(), Some("example.com"));
//! ```

use serde::{Deserialize, Deserializer, Serializer};
use url::Url;

/// Serialize a URL as its canonical string.
pub fn serialize<S: Serializer>(url: &Url, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(url.as_str())
}

/// Deserialize a URL from a string.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Url, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Url::parse(&raw).map_err(|e| serde::de::Error::custom(format!("invalid URI {:?}: {}", raw, e)))
}

/// Codec for optional URLs; `null` maps to `None`.
pub mod option {
    use serde::{Deserialize, Deserializer, Serializer};
    use url::Url;

    /// Serialize an optional URL.
    pub fn serialize<S: Serializer>(url: &Option<Url>, serializer: S) -> Result<S::Ok, S::Error> {
        match url {
            Some(url) => super::serialize(url, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional URL.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Url>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| {
                Url::parse(&raw).map_err(|e| {
                    serde::de::Error::custom(format!("invalid URI {:?}: {}", raw, e))
                })
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Endpoint {
        #[serde(with = "crate::uri")]
        base: Url,
        #[serde(with = "crate::uri::option", default)]
        fallback: Option<Url>,
    }

    #[test]
    fn test_serialize() {
        let endpoint = Endpoint {
            base: Url::parse("https://example.com/api").unwrap(),
            fallback: None,
        };

        let json = serde_json::to_string(&endpoint).unwrap();
        assert_eq!(json, r#"{"base":"https://example.com/api","fallback":null}"#);
    }

    #[test]
    fn test_deserialize_success() {
        let json = r#"{"base":"https://example.com/api","fallback":"http://backup.test/"}"#;
        let endpoint: Endpoint = serde_json::from_str(json).unwrap();
        assert_eq!(endpoint.base.host_str(), Some("example.com"));
        assert_eq!(
            endpoint.fallback.as_ref().map(Url::as_str),
            Some("http://backup.test/")
        );
    }

    #[test]
    fn test_deserialize_missing_optional() {
        let endpoint: Endpoint = serde_json::from_str(r#"{"base":"file:///tmp/x"}"#).unwrap();
        assert_eq!(endpoint.fallback, None);
    }

    #[test]
    fn test_deserialize_invalid_fails() {
        let result: Result<Endpoint, _> = serde_json::from_str(r#"{"base":"not a uri"}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid URI"));
    }

    #[test]
    fn test_roundtrip_is_canonical() {
        let json = r#"{"base":"HTTPS://Example.COM","fallback":null}"#;
        let endpoint: Endpoint = serde_json::from_str(json).unwrap();
        let back = serde_json::to_string(&endpoint).unwrap();
        assert_eq!(back, r#"{"base":"https://example.com/","fallback":null}"#);
    }
}
