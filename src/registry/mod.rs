//! # Registry module
//! Binds the commands under names in the command table of a test runner

mod chainable;
mod command_host;
mod command_registry;

pub use chainable::Chainable;
pub use command_host::{register_commands, Command, CommandHost};
pub use command_registry::CommandRegistry;
