use crate::types::{CommandReturnType, JwtClaims, TestBrowser};

use super::{decode_jwt, get_id_token};

/// # Get ID Token Claims
/// Reads the ID token from the fragment of the current page url and decodes its claims.
/// See [get_id_token] and [decode_jwt].
pub async fn get_id_token_claims<B: TestBrowser>(browser: &B) -> CommandReturnType<JwtClaims> {
    let id_token = get_id_token(browser).await?;

    decode_jwt(Some(&id_token), None)
}
