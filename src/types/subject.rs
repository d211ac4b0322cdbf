use url::Url;

use super::{AuthorizationUrlParameters, JwtClaims};

/// # Subject
/// Value yielded by a command and handed to the next command of a chain
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Subject {
    /// Nothing was yielded (start of a chain)
    #[default]
    None,
    /// A url, yielded by `buildAuthorizationURL`
    Url(Url),
    /// A string, yielded by `getIDToken`
    String(String),
    /// Decoded claims, yielded by `decodeJWT` and `getIDTokenClaims`
    Claims(JwtClaims),
    /// The page loaded by `startAuthorization`
    Window,
}

impl Subject {
    /// Returns the url if the subject is one
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            Self::Url(url) => Some(url),
            _ => None,
        }
    }

    /// Returns the string if the subject is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the claims if the subject is one
    pub fn as_claims(&self) -> Option<&JwtClaims> {
        match self {
            Self::Claims(claims) => Some(claims),
            _ => None,
        }
    }

    /// Consumes the subject and returns the claims if it is one
    pub fn into_claims(self) -> Option<JwtClaims> {
        match self {
            Self::Claims(claims) => Some(claims),
            _ => None,
        }
    }
}

/// # CommandArgs
/// Explicit arguments passed to a command
#[derive(Debug, Clone, Default)]
pub enum CommandArgs {
    /// The command is called without arguments
    #[default]
    None,
    /// Parameters for `buildAuthorizationURL` and `startAuthorization`
    Parameters(AuthorizationUrlParameters),
    /// A token for `decodeJWT`
    Jwt(String),
}

impl CommandArgs {
    pub(crate) fn parameters(&self) -> Option<&AuthorizationUrlParameters> {
        match self {
            Self::Parameters(p) => Some(p),
            _ => None,
        }
    }

    pub(crate) fn jwt(&self) -> Option<&str> {
        match self {
            Self::Jwt(jwt) => Some(jwt),
            _ => None,
        }
    }
}

impl From<AuthorizationUrlParameters> for CommandArgs {
    fn from(value: AuthorizationUrlParameters) -> Self {
        Self::Parameters(value)
    }
}

/// # PrevSubject
/// Whether a command accepts the subject of the previous command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PrevSubject {
    /// The previous subject is ignored
    #[default]
    None,
    /// The previous subject is used when present
    Optional,
}

/// # CommandOptions
/// Options declared when a command is added to a [crate::registry::CommandHost]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandOptions {
    /// See [PrevSubject]
    pub prev_subject: PrevSubject,
}

impl CommandOptions {
    /// Options of a command that accepts an optional previous subject
    pub fn optional_prev_subject() -> Self {
        Self {
            prev_subject: PrevSubject::Optional,
        }
    }
}
