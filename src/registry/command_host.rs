use crate::{
    helpers::get_command_name,
    types::{CommandOptions, PrevSubject},
};

pub(crate) const BUILD_AUTHORIZATION_URL: &str = "buildAuthorizationURL";
pub(crate) const START_AUTHORIZATION: &str = "startAuthorization";
pub(crate) const DECODE_JWT: &str = "decodeJWT";
pub(crate) const GET_ID_TOKEN: &str = "getIDToken";
pub(crate) const GET_ID_TOKEN_CLAIMS: &str = "getIDTokenClaims";

/// # Command
/// A command that can be added to a [CommandHost]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// See [crate::commands::build_authorization_url]
    BuildAuthorizationUrl,
    /// See [crate::commands::start_authorization]. Builds the url through the
    /// `buildAuthorizationURL` command registered with the same prefix.
    StartAuthorization {
        /// Prefix the command was registered with
        command_prefix: Option<String>,
    },
    /// See [crate::commands::decode_jwt]
    DecodeJwt,
    /// See [crate::commands::get_id_token]
    GetIdToken,
    /// See [crate::commands::get_id_token_claims]. Chains the `getIDToken` and
    /// `decodeJWT` commands registered with the same prefix.
    GetIdTokenClaims {
        /// Prefix the command was registered with
        command_prefix: Option<String>,
    },
}

/// The command table of the test runner. Adding a command under a name that
/// is already taken replaces the previous command.
pub trait CommandHost {
    /// Adds `command` to the table under `name`
    fn add(&mut self, name: String, options: CommandOptions, command: Command);
}

/// # Register Commands
/// Adds `buildAuthorizationURL`, `startAuthorization`, `decodeJWT`, `getIDToken` and
/// `getIDTokenClaims` to `host`.
///
/// - `command_prefix` - When set, every name is prefixed (`customGetIDToken`). Use it to
///   register the commands more than once without collisions.
pub fn register_commands<H: CommandHost>(host: &mut H, command_prefix: Option<&str>) {
    let prefix = command_prefix.filter(|p| !p.is_empty());
    let owned_prefix = prefix.map(str::to_owned);

    let commands = [
        (
            BUILD_AUTHORIZATION_URL,
            CommandOptions::default(),
            Command::BuildAuthorizationUrl,
        ),
        (
            START_AUTHORIZATION,
            CommandOptions::optional_prev_subject(),
            Command::StartAuthorization {
                command_prefix: owned_prefix.clone(),
            },
        ),
        (
            DECODE_JWT,
            CommandOptions::optional_prev_subject(),
            Command::DecodeJwt,
        ),
        (GET_ID_TOKEN, CommandOptions::default(), Command::GetIdToken),
        (
            GET_ID_TOKEN_CLAIMS,
            CommandOptions::default(),
            Command::GetIdTokenClaims {
                command_prefix: owned_prefix,
            },
        ),
    ];

    for (name, options, command) in commands {
        let name = get_command_name(prefix, name);

        tracing::debug!(
            name = %name,
            prev_subject = matches!(options.prev_subject, PrevSubject::Optional),
            "Registering command"
        );

        host.add(name, options, command);
    }
}
