use serde_json::json;

use crate::{
    commands::build_authorization_url,
    registry::{register_commands, Command, CommandHost, CommandRegistry},
    tests::{test_browser::RecordingBrowser, AUTHORIZE_ENDPOINT, ID_TOKEN},
    types::{
        AuthorizationUrlParameters, CommandArgs, CommandErrorKind, CommandOptions, Subject,
        TestBrowser,
    },
};

fn registry(prefix: Option<&str>) -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_commands(&mut registry, prefix);
    registry
}

fn parameters() -> AuthorizationUrlParameters {
    AuthorizationUrlParameters::new(AUTHORIZE_ENDPOINT, "test-client")
}

#[tokio::test]
async fn builds_authorization_url() {
    let registry = registry(None);
    let browser = RecordingBrowser::new();

    let subject = registry
        .chain(&browser)
        .run("buildAuthorizationURL", parameters())
        .await
        .unwrap()
        .into_subject();

    let url = subject.as_url().unwrap();

    assert!(url.as_str().starts_with("https://idsvr.example.com/authorize?"));
    assert!(url.as_str().contains("response_type=code"));
    assert!(url.as_str().contains("prompt=login"));
    assert!(browser.visits().is_empty());
}

#[tokio::test]
async fn build_without_parameters_fails() {
    let registry = registry(None);
    let browser = RecordingBrowser::new();

    let err = registry
        .chain(&browser)
        .run("buildAuthorizationURL", CommandArgs::None)
        .await
        .unwrap_err();

    assert_eq!(CommandErrorKind::MissingParameters, err.kind);
}

#[tokio::test]
async fn starts_authorization_when_parameters_are_passed() {
    let registry = registry(None);
    let browser = RecordingBrowser::new();

    let chain = registry
        .chain(&browser)
        .run("startAuthorization", parameters())
        .await
        .unwrap();

    assert_eq!(&Subject::Window, chain.subject());
    assert_eq!(1, browser.visits_to(AUTHORIZE_ENDPOINT));
}

#[tokio::test]
async fn starts_authorization_chained_on_a_url_subject() {
    let registry = registry(None);
    let browser = RecordingBrowser::new();

    registry
        .chain(&browser)
        .run("buildAuthorizationURL", parameters())
        .await
        .unwrap()
        .run("startAuthorization", CommandArgs::None)
        .await
        .unwrap();

    let expected = build_authorization_url(&parameters()).unwrap();

    assert_eq!(vec![expected.to_string()], browser.visits());
}

#[tokio::test]
async fn start_authorization_without_url_or_parameters_fails() {
    let registry = registry(None);
    let browser = RecordingBrowser::new();

    let err = registry
        .chain(&browser)
        .run("startAuthorization", CommandArgs::None)
        .await
        .unwrap_err();

    assert_eq!(CommandErrorKind::MissingParameters, err.kind);
    assert!(browser.visits().is_empty());
}

#[tokio::test]
async fn decodes_jwt_passed_as_argument() {
    let registry = registry(None);
    let browser = RecordingBrowser::new();

    let claims = registry
        .chain(&browser)
        .run("decodeJWT", CommandArgs::Jwt(ID_TOKEN.to_string()))
        .await
        .unwrap()
        .into_subject()
        .into_claims()
        .unwrap();

    assert_eq!(Some(&json!("john.doe")), claims.get("sub"));
    assert_eq!(Some(&json!("test-client")), claims.get("aud"));
}

#[tokio::test]
async fn reads_id_token_from_fragment() {
    let registry = registry(None);
    let browser = RecordingBrowser::new();
    browser
        .visit("https://rp.example.com/index.html#id_token=abcdef")
        .await
        .unwrap();

    let chain = registry
        .chain(&browser)
        .run("getIDToken", CommandArgs::None)
        .await
        .unwrap();

    assert_eq!(Some("abcdef"), chain.subject().as_str());
}

#[tokio::test]
async fn decodes_id_token_chained_on_get_id_token() {
    let registry = registry(None);
    let browser = RecordingBrowser::on_fragment(format!("id_token={ID_TOKEN}"));

    let chain = registry
        .chain(&browser)
        .run("getIDToken", CommandArgs::None)
        .await
        .unwrap()
        .run("decodeJWT", CommandArgs::None)
        .await
        .unwrap();

    let claims = chain.subject().as_claims().unwrap();

    assert_eq!(Some(&json!("john.doe")), claims.get("sub"));
}

#[tokio::test]
async fn decodes_id_token_claims_from_fragment() {
    let registry = registry(None);
    let browser = RecordingBrowser::on_fragment(format!("id_token={ID_TOKEN}"));

    let claims = registry
        .chain(&browser)
        .run("getIDTokenClaims", CommandArgs::None)
        .await
        .unwrap()
        .into_subject()
        .into_claims()
        .unwrap();

    assert_eq!(Some(&json!("john.doe")), claims.get("sub"));
}

#[tokio::test]
async fn decodes_id_token_claims_with_custom_prefix() {
    let mut registry = registry(None);
    register_commands(&mut registry, Some("custom"));
    let browser = RecordingBrowser::on_fragment(format!("id_token={ID_TOKEN}"));

    let prefixed = registry
        .chain(&browser)
        .run("customGetIDTokenClaims", CommandArgs::None)
        .await
        .unwrap()
        .into_subject();

    let unprefixed = registry
        .chain(&browser)
        .run("getIDTokenClaims", CommandArgs::None)
        .await
        .unwrap()
        .into_subject();

    assert_eq!(Some(&json!("john.doe")), prefixed.as_claims().unwrap().get("sub"));
    assert_eq!(unprefixed, prefixed);
}

#[tokio::test]
async fn prefixed_start_authorization_visits_once() {
    let registry = registry(Some("idsvr"));
    let browser = RecordingBrowser::new();

    registry
        .chain(&browser)
        .run("idsvrStartAuthorization", parameters())
        .await
        .unwrap();

    assert_eq!(1, browser.visits_to(AUTHORIZE_ENDPOINT));
    assert!(!registry.contains("startAuthorization"));
}

#[tokio::test]
async fn commands_without_previous_subject_ignore_it() {
    let registry = registry(None);
    let browser = RecordingBrowser::new();

    let err = registry
        .chain(&browser)
        .run("decodeJWT", CommandArgs::Jwt(ID_TOKEN.to_string()))
        .await
        .unwrap()
        .run("buildAuthorizationURL", CommandArgs::None)
        .await
        .unwrap_err();

    assert_eq!(CommandErrorKind::MissingParameters, err.kind);
}

#[tokio::test]
async fn composite_command_uses_the_current_binding_of_its_parts() {
    let mut registry = registry(None);
    // decodeJWT rebound to getIDToken, so getIDTokenClaims yields the raw token
    registry.add(
        "decodeJWT".to_string(),
        CommandOptions::default(),
        Command::GetIdToken,
    );
    let browser = RecordingBrowser::on_fragment("id_token=abcdef");

    let chain = registry
        .chain(&browser)
        .run("getIDTokenClaims", CommandArgs::None)
        .await
        .unwrap();

    assert_eq!(Some("abcdef"), chain.subject().as_str());
}

#[tokio::test]
async fn unknown_command_fails() {
    let registry = registry(None);
    let browser = RecordingBrowser::new();

    let err = registry
        .chain(&browser)
        .run("customGetIDToken", CommandArgs::None)
        .await
        .unwrap_err();

    assert_eq!(CommandErrorKind::UnknownCommand, err.kind);
}

#[tokio::test]
async fn failing_command_stops_the_chain() {
    let registry = registry(None);
    let browser = RecordingBrowser::on_fragment("state=abc");

    let result = registry
        .chain(&browser)
        .run("getIDTokenClaims", CommandArgs::None)
        .await;

    assert_eq!(CommandErrorKind::MalformedToken, result.unwrap_err().kind);
}
