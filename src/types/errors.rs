use std::fmt;

/// # CommandErrorKind
/// Category of a [CommandError]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandErrorKind {
    /// The base url of the authorization endpoint could not be parsed
    InvalidUrl,
    /// Navigation was requested without a chained url and without parameters
    MissingParameters,
    /// The token has no payload segment, cannot be base64 decoded, or was not found
    MalformedToken,
    /// The decoded payload is not a JSON object
    JsonParse,
    /// The [crate::types::TestBrowser] reported an error
    Browser,
    /// No command is registered under the requested name
    UnknownCommand,
}

impl CommandErrorKind {
    /// Name of the error as reported to the test runner
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidUrl => "InvalidURLError",
            Self::MissingParameters => "MissingParametersError",
            Self::MalformedToken => "MalformedTokenError",
            Self::JsonParse => "JSONParseError",
            Self::Browser => "BrowserError",
            Self::UnknownCommand => "UnknownCommandError",
        }
    }
}

/// # CommandError
/// Error that fails the running test. None of the commands recover from it.
#[derive(Debug)]
pub struct CommandError {
    /// Category of the error
    pub kind: CommandErrorKind,
    /// Short title of the error
    pub error: String,
    /// Description
    pub error_description: String,
}

/// Return type of every command
pub type CommandReturnType<T> = Result<T, Box<CommandError>>;

impl CommandError {
    /// Creates a new instance of the [CommandError]
    pub fn new(kind: CommandErrorKind, error: &str, error_description: &str) -> Self {
        Self {
            kind,
            error: error.to_string(),
            error_description: error_description.to_string(),
        }
    }

    /// Creates a [CommandErrorKind::InvalidUrl] error
    pub fn new_invalid_url(error_description: &str) -> Self {
        Self::new(CommandErrorKind::InvalidUrl, "invalid_url", error_description)
    }

    /// Creates a [CommandErrorKind::MissingParameters] error
    pub fn new_missing_parameters(error_description: &str) -> Self {
        Self::new(
            CommandErrorKind::MissingParameters,
            "missing_parameters",
            error_description,
        )
    }

    /// Creates a [CommandErrorKind::MalformedToken] error
    pub fn new_malformed_token(error_description: &str) -> Self {
        Self::new(
            CommandErrorKind::MalformedToken,
            "malformed_token",
            error_description,
        )
    }

    /// Creates a [CommandErrorKind::JsonParse] error
    pub fn new_json_parse(error_description: &str) -> Self {
        Self::new(CommandErrorKind::JsonParse, "json_parse", error_description)
    }

    /// Creates a [CommandErrorKind::Browser] error
    pub fn new_browser(error_description: &str) -> Self {
        Self::new(CommandErrorKind::Browser, "browser_error", error_description)
    }

    /// Creates a [CommandErrorKind::UnknownCommand] error
    pub fn new_unknown_command(name: &str) -> Self {
        Self::new(
            CommandErrorKind::UnknownCommand,
            "unknown_command",
            &format!("no command is registered as {name}"),
        )
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.kind.name(),
            self.error,
            self.error_description
        )
    }
}

impl std::error::Error for CommandError {}
