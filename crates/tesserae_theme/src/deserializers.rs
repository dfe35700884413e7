use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, de::Error};

use crate::{Dimension, TokenEntry, TokenValue};

impl<'de> Deserialize<'de> for TokenValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match StringOrFloat::deserialize(deserializer)? {
            StringOrFloat::String(string) => string.parse().map_err(D::Error::custom),

            // Bare numbers are pixel lengths.
            StringOrFloat::Float(pixels) => Ok(TokenValue::Dimension(Dimension::px(pixels))),
        }
    }
}

pub fn de_token_entries<'de, D>(deserializer: D) -> Result<IndexMap<String, TokenEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = IndexMap::<String, TokenEntry>::deserialize(deserializer)?;

    if value.is_empty() {
        return Err(D::Error::custom("at least one token needs to be provided."));
    }

    if let Some(name) = value.keys().find(|name| !crate::is_valid_name(name)) {
        return Err(D::Error::custom(format!(
            "`{name}` is not a valid token name."
        )));
    }

    Ok(value)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Tokens {
        #[serde(deserialize_with = "de_token_entries")]
        tokens: IndexMap<String, TokenEntry>,
    }

    #[test]
    fn float_is_pixels() {
        let value: TokenValue = serde_json::from_str("4").unwrap();
        assert_eq!(value, TokenValue::Dimension(Dimension::px(4.)));
    }

    #[test]
    fn string_is_parsed() {
        let value: TokenValue = serde_json::from_str(r#""0 0% 100%""#).unwrap();
        assert!(value.is_color());
    }

    #[test]
    fn invalid_string_is_an_error() {
        assert!(serde_json::from_str::<TokenValue>(r#""blue""#).is_err());
    }

    #[test]
    fn empty_token_map_is_rejected() {
        let err = serde_json::from_str::<Tokens>(r#"{ "tokens": {} }"#)
            .err()
            .unwrap();
        assert!(err.to_string().contains("at least one token"));
    }

    #[test]
    fn invalid_token_name_is_rejected() {
        let err = serde_json::from_str::<Tokens>(r#"{ "tokens": { "Border": "0 0% 0%" } }"#)
            .err()
            .unwrap();
        assert!(err.to_string().contains("not a valid token name"));
    }

    #[test]
    fn token_order_is_kept() {
        let tokens: Tokens = serde_json::from_str(
            r#"{ "tokens": { "ring": "0 0% 0%", "border": "0 0% 0%", "input": "0 0% 0%" } }"#,
        )
        .unwrap();
        let names: Vec<_> = tokens.tokens.keys().map(String::as_str).collect();
        assert_eq!(names, ["ring", "border", "input"]);
    }
}
