use crate::types::{CommandArgs, CommandReturnType, Subject, TestBrowser};

use super::CommandRegistry;

/// # Chainable
/// Runs registered commands one after the other, handing the subject yielded by
/// each command to the next one.
///
/// ```ignore
/// let claims = registry
///     .chain(&browser)
///     .run("getIDTokenClaims", CommandArgs::None)
///     .await?
///     .into_subject();
/// ```
#[derive(Debug)]
pub struct Chainable<'a, B> {
    registry: &'a CommandRegistry,
    browser: &'a B,
    subject: Subject,
}

impl<'a, B: TestBrowser + Sync> Chainable<'a, B> {
    pub(crate) fn new(registry: &'a CommandRegistry, browser: &'a B) -> Self {
        Self {
            registry,
            browser,
            subject: Subject::None,
        }
    }

    /// Runs the command registered as `name` with the current subject
    pub async fn run(
        self,
        name: &str,
        args: impl Into<CommandArgs>,
    ) -> CommandReturnType<Chainable<'a, B>> {
        let subject = self
            .registry
            .invoke(self.browser, name, self.subject, args.into())
            .await?;

        Ok(Self {
            registry: self.registry,
            browser: self.browser,
            subject,
        })
    }

    /// Subject yielded by the last command
    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Consumes the chain, returning the subject yielded by the last command
    pub fn into_subject(self) -> Subject {
        self.subject
    }
}
