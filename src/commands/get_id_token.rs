use crate::types::{CommandError, CommandReturnType, TestBrowser};

/// # Get ID Token
/// Reads the `id_token` parameter from the fragment of the current page url.
/// The value is returned as found, it is not url decoded.
///
/// - `browser` - [TestBrowser] : Browser under test
#[tracing::instrument(skip_all)]
pub async fn get_id_token<B: TestBrowser>(browser: &B) -> CommandReturnType<String> {
    let hash = browser
        .hash()
        .await
        .map_err(|e| CommandError::new_browser(&e))?;

    tracing::debug!("Reading id_token from url fragment");

    id_token_from_hash(&hash)
}

pub(crate) fn id_token_from_hash(hash: &str) -> CommandReturnType<String> {
    if hash.is_empty() || !hash.contains('#') || !hash.contains("id_token") {
        return Err(Box::new(CommandError::new_malformed_token(&format!(
            "expected url fragment to contain an id_token, got {hash:?}"
        ))));
    }

    let fragment = hash.split('#').nth(1).unwrap_or_default();

    let id_token = fragment
        .split('&')
        .find(|parameter| parameter.starts_with("id_token"))
        .and_then(|parameter| parameter.split_once('='))
        .map(|(_, value)| value)
        .unwrap_or_default();

    if id_token.is_empty() {
        return Err(Box::new(CommandError::new_malformed_token(
            "id_token in url fragment is empty",
        )));
    }

    Ok(id_token.to_owned())
}

#[cfg(test)]
#[path = "../tests/commands/get_id_token_tests.rs"]
mod get_id_token_tests;
