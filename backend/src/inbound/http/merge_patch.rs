//! Field presence for JSON merge-patch bodies.
//!
//! Pair [`present`] with `#[serde(default)]` on an `Option<Option<T>>` field:
//! an absent key stays `None`, an explicit `null` becomes `Some(None)`, and a
//! value becomes `Some(Some(value))`.

use serde::{Deserialize, Deserializer};

/// Deserialise a field that was present in the body, keeping `null` distinct.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "present")]
        name: Option<Option<String>>,
    }

    #[rstest]
    #[case(json!({}), None)]
    #[case(json!({ "name": null }), Some(None))]
    #[case(json!({ "name": "Ada" }), Some(Some("Ada".to_owned())))]
    fn distinguishes_absent_null_and_value(
        #[case] input: serde_json::Value,
        #[case] expected: Option<Option<String>>,
    ) {
        let body: Body = serde_json::from_value(input).expect("valid body");
        assert_eq!(body.name, expected);
    }
}
