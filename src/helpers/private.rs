use base64::{
    alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
    Engine,
};
use url::Url;

use crate::types::{CommandError, CommandReturnType};

/// Standard alphabet, padding optional. Mirrors the forgiving base64 decoder of browsers.
const FORGIVING_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub(crate) fn validate_url(url: &str) -> CommandReturnType<Url> {
    if let Ok(u) = Url::parse(url) {
        return Ok(u);
    }

    Err(Box::new(CommandError::new_invalid_url(&format!(
        "only valid absolute URLs can be used, got {url:?}"
    ))))
}

/// Returns `value` if it is present and non empty
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Replaces the first occurrence of `from` only.
pub(crate) fn replace_first(input: &str, from: char, to: char) -> String {
    match input.find(from) {
        Some(index) => {
            let mut out = String::with_capacity(input.len());
            out.push_str(&input[..index]);
            out.push(to);
            out.push_str(&input[index + from.len_utf8()..]);
            out
        }
        None => input.to_owned(),
    }
}

/// Turns a base64url JWT segment into text.
///
/// Only the first `-` and the first `_` are mapped back to the standard alphabet,
/// so segments with several of them fail to decode.
pub(crate) fn decode_jwt_segment(segment: &str) -> CommandReturnType<String> {
    let standard = replace_first(&replace_first(segment, '-', '+'), '_', '/');

    let bytes = FORGIVING_STANDARD.decode(standard.as_bytes()).map_err(|e| {
        CommandError::new_malformed_token(&format!("JWT payload is not valid base64: {e}"))
    })?;

    String::from_utf8(bytes).map_err(|_| {
        Box::new(CommandError::new_malformed_token(
            "JWT payload is not valid UTF-8",
        ))
    })
}
