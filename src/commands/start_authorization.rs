use url::Url;

use crate::types::{
    AuthorizationUrlParameters, CommandError, CommandReturnType, Subject, TestBrowser,
};

use super::build_authorization_url;

/// # Start Authorization
/// Visits the authorization url. Either `subject` must be a url built earlier,
/// or `parameters` must be passed so the url can be built now.
///
/// - `browser` - [TestBrowser] : Browser under test
/// - `subject` - Url yielded by a previous command, takes precedence over `parameters`
/// - `parameters` - [AuthorizationUrlParameters] : Used when there is no `subject`
#[tracing::instrument(skip_all)]
pub async fn start_authorization<B: TestBrowser>(
    browser: &B,
    subject: Option<&Url>,
    parameters: Option<&AuthorizationUrlParameters>,
) -> CommandReturnType<Subject> {
    let url = match (subject, parameters) {
        (Some(url), _) => url.clone(),
        (None, Some(parameters)) => build_authorization_url(parameters)?,
        (None, None) => return Err(Box::new(missing_parameters())),
    };

    visit_authorization_url(browser, &url).await
}

pub(crate) async fn visit_authorization_url<B: TestBrowser>(
    browser: &B,
    url: &Url,
) -> CommandReturnType<Subject> {
    tracing::debug!(url = %url, "Visiting authorization url");

    browser
        .visit(url.as_str())
        .await
        .map_err(|e| CommandError::new_browser(&e))?;

    Ok(Subject::Window)
}

pub(crate) fn missing_parameters() -> CommandError {
    CommandError::new_missing_parameters(
        "either chain the call on an authorization url or pass authorization url parameters",
    )
}

#[cfg(test)]
#[path = "../tests/commands/start_authorization_tests.rs"]
mod start_authorization_tests;
