use std::collections::HashMap;

use async_recursion::async_recursion;

use crate::{
    commands::{
        build_authorization_url, decode_jwt, get_id_token, missing_parameters,
        visit_authorization_url,
    },
    helpers::get_command_name,
    types::{
        CommandArgs, CommandError, CommandOptions, CommandReturnType, PrevSubject, Subject,
        TestBrowser,
    },
};

use super::{
    command_host::{BUILD_AUTHORIZATION_URL, DECODE_JWT, GET_ID_TOKEN, START_AUTHORIZATION},
    Chainable, Command, CommandHost,
};

#[derive(Debug, Clone)]
struct RegisteredCommand {
    options: CommandOptions,
    command: Command,
}

/// # CommandRegistry
/// In-process [CommandHost] that dispatches commands by name against a [TestBrowser]
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, RegisteredCommand>,
}

impl CommandHost for CommandRegistry {
    fn add(&mut self, name: String, options: CommandOptions, command: Command) {
        let registered = RegisteredCommand { options, command };

        if self.commands.insert(name.clone(), registered).is_some() {
            tracing::debug!(name = %name, "Replaced previously registered command");
        }
    }
}

impl CommandRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Names of every registered command, sorted
    pub fn command_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns true if a command is registered as `name`
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Options `name` was registered with
    pub fn options(&self, name: &str) -> Option<CommandOptions> {
        self.commands.get(name).map(|c| c.options)
    }

    /// Starts a chain on `browser` with an empty subject
    pub fn chain<'a, B: TestBrowser + Sync>(&'a self, browser: &'a B) -> Chainable<'a, B> {
        Chainable::new(self, browser)
    }

    /// # Invoke
    /// Runs the command registered as `name`.
    ///
    /// - `subject` - Yielded by the previous command. Ignored unless the command was
    ///   registered with [PrevSubject::Optional]
    /// - `args` - Explicit arguments of the command
    ///
    /// Returns the subject yielded by the command.
    #[async_recursion]
    pub async fn invoke<B: TestBrowser + Sync>(
        &self,
        browser: &B,
        name: &str,
        subject: Subject,
        args: CommandArgs,
    ) -> CommandReturnType<Subject> {
        let registered = self
            .commands
            .get(name)
            .ok_or_else(|| CommandError::new_unknown_command(name))?;

        let subject = match registered.options.prev_subject {
            PrevSubject::Optional => subject,
            PrevSubject::None => Subject::None,
        };

        tracing::debug!(name = %name, "Running command");

        match &registered.command {
            Command::BuildAuthorizationUrl => {
                let parameters = args.parameters().ok_or_else(missing_parameters)?;

                build_authorization_url(parameters).map(Subject::Url)
            }
            Command::StartAuthorization { command_prefix } => {
                if let Subject::Url(url) = &subject {
                    return visit_authorization_url(browser, url).await;
                }

                let prefix = command_prefix.as_deref();

                let url = self
                    .invoke(
                        browser,
                        &get_command_name(prefix, BUILD_AUTHORIZATION_URL),
                        Subject::None,
                        args,
                    )
                    .await?;

                if url.as_url().is_none() {
                    return Err(Box::new(missing_parameters()));
                }

                self.invoke(
                    browser,
                    &get_command_name(prefix, START_AUTHORIZATION),
                    url,
                    CommandArgs::None,
                )
                .await
            }
            Command::DecodeJwt => decode_jwt(subject.as_str(), args.jwt()).map(Subject::Claims),
            Command::GetIdToken => get_id_token(browser).await.map(Subject::String),
            Command::GetIdTokenClaims { command_prefix } => {
                let prefix = command_prefix.as_deref();

                let id_token = self
                    .invoke(
                        browser,
                        &get_command_name(prefix, GET_ID_TOKEN),
                        Subject::None,
                        CommandArgs::None,
                    )
                    .await?;

                self.invoke(
                    browser,
                    &get_command_name(prefix, DECODE_JWT),
                    id_token,
                    CommandArgs::None,
                )
                .await
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/registry/mod.rs"]
mod registry_tests;
