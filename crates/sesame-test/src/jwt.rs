use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use serde_json::{json, Value};

/// Build an unsigned compact token from a header and a payload.
///
/// The signature segment is a fixed placeholder, nothing ever checks it.
pub fn make_jwt(header: &Value, payload: &Value) -> String {
    format!(
        "{}.{}.c2lnbmF0dXJl",
        encode_segment(header),
        encode_segment(payload)
    )
}

/// [`make_jwt`] with a default `HS256` header.
pub fn make_jwt_with_claims(payload: &Value) -> String {
    make_jwt(&json!({ "alg": "HS256", "typ": "JWT" }), payload)
}

fn encode_segment(value: &Value) -> String {
    URL_SAFE_NO_PAD.encode(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_three_unpadded_segments() {
        let token = make_jwt_with_claims(&json!({ "sub": "1" }));

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);
        assert!(!token.contains('='));
        assert_eq!(
            URL_SAFE_NO_PAD.decode(parts[1]).unwrap(),
            br#"{"sub":"1"}"#.to_vec()
        );
    }
}
