use serde::{Deserialize, Serialize};

/// # AuthorizationUrlParameters
/// Values used by [`crate::commands::build_authorization_url()`] to prepare the
/// authorization request. Field names follow the `camelCase` spelling used by
/// browser test fixtures (`baseURL`, `clientID`, ...).
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizationUrlParameters {
    /// The URL of the authorization endpoint
    #[serde(rename = "baseURL")]
    pub base_url: String,
    /// The value of the `client_id` parameter
    #[serde(rename = "clientID")]
    pub client_id: String,
    /// The value of the `response_type` parameter. Defaults to `code`.
    #[serde(rename = "responseType", skip_serializing_if = "Option::is_none", default)]
    pub response_type: Option<String>,
    /// The value of the `redirect_uri` parameter
    #[serde(rename = "redirectURI", skip_serializing_if = "Option::is_none", default)]
    pub redirect_uri: Option<String>,
    /// The value of the `scope` parameter
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub scope: Option<String>,
    /// The value of the `state` parameter
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub state: Option<String>,
    /// The value of the `prompt` parameter. Defaults to `login` so that every test
    /// logs in again instead of reusing an SSO session.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prompt: Option<String>,
    /// Any other parameters, appended to the url in order. Serialized as an
    /// array of `[key, value]` pairs.
    #[serde(rename = "extraParams", skip_serializing_if = "Option::is_none", default)]
    pub extra_params: Option<Vec<(String, String)>>,
}

impl AuthorizationUrlParameters {
    /// Creates parameters with the two required values
    pub fn new(base_url: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client_id: client_id.into(),
            ..Default::default()
        }
    }

    /// Sets `response_type`
    pub fn response_type(mut self, response_type: impl Into<String>) -> Self {
        self.response_type = Some(response_type.into());
        self
    }

    /// Sets `redirect_uri`
    pub fn redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Sets `scope`
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets `state`
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets `prompt`
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Adds an extra parameter. Keys may repeat.
    pub fn extra_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }
}
