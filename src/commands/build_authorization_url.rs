use url::Url;

use crate::{
    helpers::{non_empty, validate_url},
    types::{AuthorizationUrlParameters, CommandReturnType},
};

/// # Build Authorization Url
/// Prepares the authorization url with respect to the `parameters`.
///
/// Parameters are appended after any query already present on `base_url`, in this order:
/// `client_id`, `response_type` (default `code`), `prompt` (default `login`), then
/// `redirect_uri`, `scope` and `state` when set, then every `extra_params` entry.
/// Nothing is overwritten, a key can appear more than once.
///
/// - `parameters` - [AuthorizationUrlParameters] : Customize the authorization request
pub fn build_authorization_url(parameters: &AuthorizationUrlParameters) -> CommandReturnType<Url> {
    let mut authorization_url = validate_url(&parameters.base_url)?;

    {
        let mut query = authorization_url.query_pairs_mut();

        query.append_pair("client_id", &parameters.client_id);
        query.append_pair(
            "response_type",
            non_empty(&parameters.response_type).unwrap_or("code"),
        );
        query.append_pair("prompt", non_empty(&parameters.prompt).unwrap_or("login"));

        if let Some(redirect_uri) = non_empty(&parameters.redirect_uri) {
            query.append_pair("redirect_uri", redirect_uri);
        }

        if let Some(scope) = non_empty(&parameters.scope) {
            query.append_pair("scope", scope);
        }

        if let Some(state) = non_empty(&parameters.state) {
            query.append_pair("state", state);
        }

        if let Some(extra_params) = &parameters.extra_params {
            for (key, value) in extra_params {
                query.append_pair(key, value);
            }
        }
    }

    tracing::debug!(url = %authorization_url, "Built authorization url");

    Ok(authorization_url)
}

#[cfg(test)]
#[path = "../tests/commands/build_authorization_url_tests.rs"]
mod build_authorization_url_tests;
