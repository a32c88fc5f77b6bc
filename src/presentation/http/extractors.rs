// src/presentation/http/extractors.rs
use super::error::HttpError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

pub const NUMERIC_ID_EXPECTED: &str = "Validation failed (numeric string is expected)";

/// Integer `{id}` path segment. Rejects anything that is not an optionally
/// negative run of ASCII digits fitting in an `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserIdParam(pub i64);

impl<S> FromRequestParts<S> for UserIdParam
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| HttpError::bad_request(rejection.body_text()))?;

        parse_integer_id(&raw)
            .map(Self)
            .ok_or_else(|| HttpError::bad_request(NUMERIC_ID_EXPECTED))
    }
}

pub fn parse_integer_id(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_negative_integers() {
        assert_eq!(parse_integer_id("7"), Some(7));
        assert_eq!(parse_integer_id("007"), Some(7));
        assert_eq!(parse_integer_id("-3"), Some(-3));
    }

    #[test]
    fn rejects_non_integer_segments() {
        for raw in ["", "-", "abc", "7a", "1.5", "+7", " 7", "1e3"] {
            assert_eq!(parse_integer_id(raw), None, "{raw:?} should be rejected");
        }
    }

    #[test]
    fn rejects_values_outside_i64() {
        assert_eq!(parse_integer_id("9223372036854775808"), None);
        assert_eq!(parse_integer_id("9223372036854775807"), Some(i64::MAX));
    }
}
