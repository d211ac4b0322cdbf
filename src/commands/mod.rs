//! # Commands module
//! Each command as a plain function. [crate::registry] binds them under names.

mod build_authorization_url;
mod decode_jwt;
mod get_id_token;
mod get_id_token_claims;
mod start_authorization;

pub use build_authorization_url::build_authorization_url;
pub use decode_jwt::decode_jwt;
pub use get_id_token::get_id_token;
pub use get_id_token_claims::get_id_token_claims;
pub use start_authorization::start_authorization;

pub(crate) use start_authorization::{missing_parameters, visit_authorization_url};
