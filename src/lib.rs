#![warn(missing_docs)]
//! # OIDC E2E Commands
//!
//! Chainable helpers for browser driven end-to-end tests of an OAuth/OIDC
//! authorization flow. Build an authorization url, visit it, read the ID token
//! from the fragment of the page the flow lands on and decode its claims.
//!
//! Claims are decoded, **never verified**. These are test helpers, not a
//! security component.
//!
//! ## Registering the commands
//! - [registry::register_commands]
//! - [registry::CommandHost]
//! - [registry::CommandRegistry]
//!
//! ## Commands
//! - [commands::build_authorization_url] (`buildAuthorizationURL`)
//! - [commands::start_authorization] (`startAuthorization`)
//! - [commands::decode_jwt] (`decodeJWT`)
//! - [commands::get_id_token] (`getIDToken`)
//! - [commands::get_id_token_claims] (`getIDTokenClaims`)
//!
//! ## Browser
//! Implement [types::TestBrowser] for the webdriver or devtools session your
//! tests drive.

pub mod commands;
mod helpers;
pub mod registry;
pub mod types;

pub use helpers::get_command_name;

/// Re exports from the crate
pub mod re_exports {
    pub use serde_json::{self, json, Value};
    pub use url;
}
