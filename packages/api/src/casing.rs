//! # Key-casing normalisation for API payloads
//!
//! The remote API speaks lower/underscore keys (`first_name`, `user_id`) plus a
//! few Go-style names (`ID`, `CreatedAt`). The client model uses capitalised
//! words with no separator (`FirstName`, `UserId`, `Id`), which is what the
//! `#[serde(rename_all = "PascalCase")]` models in [`crate::models`] expect.
//!
//! [`to_client_case`] rewrites every object key in a JSON value, recursing
//! through nested objects and arrays. Scalars pass through untouched and
//! array order/length is preserved. Keys that are already in client casing
//! map to themselves, so normalising twice is the same as normalising once.
//!
//! ## Word splitting
//!
//! A key is split into words on:
//!
//! | Boundary | Example |
//! |----------|---------|
//! | any non-alphanumeric character | `first_name` → `first`, `name` |
//! | lower → upper | `userId` → `user`, `Id` |
//! | end of an acronym | `HTMLParser` → `HTML`, `Parser` |
//! | letter ↔ digit | `line2` → `line`, `2` |
//!
//! Each word is then emitted with its first character upper-cased and the
//! rest lower-cased.
//!
//! ## Depth bound
//!
//! Recursion stops at [`MAX_DEPTH`] nested containers; deeper input is
//! rejected with [`CasingError::TooDeep`] rather than walked.

use serde_json::{Map, Value};

/// Maximum number of nested objects/arrays accepted.
pub const MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CasingError {
    #[error("payload nested deeper than {limit} levels")]
    TooDeep { limit: usize },
}

/// Rewrite every object key in `value` into client casing.
pub fn to_client_case(value: Value) -> Result<Value, CasingError> {
    convert(value, 0)
}

fn convert(value: Value, depth: usize) -> Result<Value, CasingError> {
    match value {
        Value::Array(items) => {
            let depth = descend(depth)?;
            items
                .into_iter()
                .map(|item| convert(item, depth))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::Array)
        }
        Value::Object(entries) => {
            let depth = descend(depth)?;
            let mut out = Map::with_capacity(entries.len());
            for (key, item) in entries {
                out.insert(pascal_case(&key), convert(item, depth)?);
            }
            Ok(Value::Object(out))
        }
        scalar => Ok(scalar),
    }
}

fn descend(depth: usize) -> Result<usize, CasingError> {
    if depth >= MAX_DEPTH {
        return Err(CasingError::TooDeep { limit: MAX_DEPTH });
    }
    Ok(depth + 1)
}

/// Convert a single key into client casing.
pub fn pascal_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for word in words(key) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            for c in chars {
                out.extend(c.to_lowercase());
            }
        }
    }
    out
}

fn words(key: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = key.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if let Some(s) = start.take() {
                words.push(&key[s..pos]);
            }
            continue;
        }
        match start {
            None => start = Some(pos),
            Some(s) => {
                // `start` is set, so the previous char belongs to this word.
                let prev = chars[i - 1].1;
                let next = chars.get(i + 1).map(|&(_, n)| n);
                if is_boundary(prev, c, next) {
                    words.push(&key[s..pos]);
                    start = Some(pos);
                }
            }
        }
    }
    if let Some(s) = start {
        words.push(&key[s..]);
    }
    words
}

fn is_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    let digit_edge = prev.is_numeric() != cur.is_numeric();
    let lower_to_upper = !prev.is_uppercase() && !prev.is_numeric() && cur.is_uppercase();
    let acronym_end =
        prev.is_uppercase() && cur.is_uppercase() && next.is_some_and(char::is_lowercase);
    digit_edge || lower_to_upper || acronym_end
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pascal_case_keys() {
        let cases = [
            ("first_name", "FirstName"),
            ("user_id", "UserId"),
            ("id", "Id"),
            ("ID", "Id"),
            ("CreatedAt", "CreatedAt"),
            ("is_email_verified", "IsEmailVerified"),
            ("expires_at", "ExpiresAt"),
            ("userId", "UserId"),
            ("HTMLParser", "HtmlParser"),
            ("refresh-token", "RefreshToken"),
            ("address_line2", "AddressLine2"),
            ("__private__", "Private"),
            ("", ""),
        ];
        for (input, expected) in cases {
            assert_eq!(pascal_case(input), expected, "key {input:?}");
        }
    }

    #[test]
    fn test_nested_structure_is_converted() {
        let wire = json!({
            "token": "abc",
            "user": {
                "id": 7,
                "first_name": "Ada",
                "is_email_verified": false,
            },
            "data": [
                {"id": 1, "text": "one", "done": true},
                {"id": 2, "text": "two", "done": false, "tags": ["a_b", "c_d"]},
            ],
        });

        let client = to_client_case(wire).unwrap();

        assert_eq!(
            client,
            json!({
                "Token": "abc",
                "User": {
                    "Id": 7,
                    "FirstName": "Ada",
                    "IsEmailVerified": false,
                },
                "Data": [
                    {"Id": 1, "Text": "one", "Done": true},
                    {"Id": 2, "Text": "two", "Done": false, "Tags": ["a_b", "c_d"]},
                ],
            })
        );
    }

    #[test]
    fn test_key_order_is_preserved() {
        let wire = json!({"z_last": 1, "a_first": 2, "m_middle": 3});
        let client = to_client_case(wire).unwrap();
        let keys: Vec<&String> = client.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["ZLast", "AFirst", "MMiddle"]);
    }

    #[test]
    fn test_scalars_pass_through() {
        for scalar in [json!(null), json!(true), json!(42), json!(1.5), json!("snake_case")] {
            assert_eq!(to_client_case(scalar.clone()).unwrap(), scalar);
        }
    }

    #[test]
    fn test_idempotent_on_client_cased_input() {
        let wire = json!({"first_name": "Ada", "todos": [{"user_id": 1}]});
        let once = to_client_case(wire).unwrap();
        let twice = to_client_case(once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_depth_limit() {
        let mut ok = json!(1);
        for _ in 0..MAX_DEPTH {
            ok = json!([ok]);
        }
        assert!(to_client_case(ok.clone()).is_ok());

        let too_deep = json!({ "inner": ok });
        assert_eq!(
            to_client_case(too_deep),
            Err(CasingError::TooDeep { limit: MAX_DEPTH })
        );
    }
}
