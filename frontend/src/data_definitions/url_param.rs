//! URL parameter helpers and types.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};


// Route segments can carry any serializable value as long as the wrapper
// implements Display, FromStr and Default. The value is CBOR-encoded and
// then base64url-encoded so filters survive being pasted as links.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

// Display the value in a way that can be parsed back by FromStr
impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

/// A route segment that is neither valid base64url nor a CBOR value of the
/// expected shape. The router treats it as a non-matching route.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlParamParseError(String);

impl std::fmt::Display for UrlParamParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid url parameter: {}", self.0)
    }
}

// Parse the value from a string that was created by Display
impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = UrlParamParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(|e| UrlParamParseError(e.to_string()))?;
        let parsed = ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(|e: ciborium::de::Error<std::io::Error>| UrlParamParseError(e.to_string()))?;
        Ok(parsed)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use common::catalog_filter::{CatalogFilter, DurationBucket, SortOrder};

    #[test]
    fn catalog_filter_survives_the_url_round_trip() {
        let filter = CatalogFilter {
            search: "noronha".to_string(),
            region: Some("Natal".to_string()),
            duration: Some(DurationBucket::FourToSevenDays),
            min_rating: Some(4),
            only_favorites: true,
            sort_order: SortOrder::PriceAsc,
            ..Default::default()
        };
        let segment = UrlParam(filter.clone()).to_string();
        let parsed = segment.parse::<UrlParam<CatalogFilter>>().unwrap();
        assert_eq!(parsed.0, filter);
    }

    #[test]
    fn garbage_segments_fail_to_parse() {
        assert!("!!not-base64!!".parse::<UrlParam<CatalogFilter>>().is_err());
        // valid base64 but not CBOR of the right shape
        let segment = URL_SAFE.encode(b"plain text");
        assert!(segment.parse::<UrlParam<CatalogFilter>>().is_err());
    }
}
