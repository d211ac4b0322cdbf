//! # Browser Interface for the Browser Under Test

use std::future::Future;

/// This trait defines the interface to the browser driven by the test runner.
/// Users plug in their own webdriver/devtools session by implementing it.
pub trait TestBrowser {
    /// Loads `url` in the browser under test.
    ///
    ///  * On success, the result is `Ok(())` once the navigation was issued.
    ///  * On error, the result is `Err(String)` with an error message describing the failure.
    fn visit(&self, url: &str) -> impl Future<Output = Result<(), String>> + Send;

    /// Returns the fragment of the current page url *including* the leading `#`,
    /// the same value as `window.location.hash`. An empty string is returned
    /// when the url has no fragment.
    fn hash(&self) -> impl Future<Output = Result<String, String>> + Send;
}
