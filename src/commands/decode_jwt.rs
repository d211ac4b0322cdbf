use serde_json::Value;

use crate::{
    helpers::decode_jwt_segment,
    types::{CommandError, CommandReturnType, JwtClaims},
};

/// # Decode JWT
/// Decodes the payload of a compact JWT and returns its claims.
///
/// **The signature is not verified.** The claims are whatever the token says they
/// are. Use this to make assertions in tests, never to make security decisions.
///
/// - `subject` - Token yielded by a previous command, takes precedence over `jwt`
/// - `jwt` - Token to decode when there is no `subject`
pub fn decode_jwt(subject: Option<&str>, jwt: Option<&str>) -> CommandReturnType<JwtClaims> {
    let token = subject.or(jwt).ok_or_else(|| {
        CommandError::new_malformed_token("no token was chained or passed to decode")
    })?;

    let payload = token.split('.').nth(1).unwrap_or_default();

    if payload.is_empty() {
        return Err(Box::new(CommandError::new_malformed_token(
            "JWT has no payload segment",
        )));
    }

    let decoded = decode_jwt_segment(payload)?;

    match serde_json::from_str::<Value>(&decoded) {
        Ok(Value::Object(claims)) => Ok(claims),
        Ok(_) => Err(Box::new(CommandError::new_json_parse(
            "JWT payload is not a JSON object",
        ))),
        Err(e) => Err(Box::new(CommandError::new_json_parse(&format!(
            "JWT payload is not valid JSON: {e}"
        )))),
    }
}

#[cfg(test)]
#[path = "../tests/commands/decode_jwt_tests.rs"]
mod decode_jwt_tests;
