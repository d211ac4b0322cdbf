//! # Types Module
//! All the parameters, subjects, errors and seams of the commands are in this module

mod authorization_url_parameters;
mod browser;
mod errors;
mod subject;

pub use authorization_url_parameters::AuthorizationUrlParameters;
pub use browser::TestBrowser;
pub use errors::{CommandError, CommandErrorKind, CommandReturnType};
pub use subject::{CommandArgs, CommandOptions, PrevSubject, Subject};

/// Claims of a decoded JWT payload
pub type JwtClaims = serde_json::Map<String, serde_json::Value>;
