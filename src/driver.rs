//! Interactive invocation driver.
//!
//! One attempt walks four states:
//!
//! ```text
//! SelectGroup -> SelectExample -> CollectArguments -> Invoke
//! ```
//!
//! An input that names no group or example ends the attempt with a message,
//! and the next attempt starts again at `SelectGroup`. An attempt that gets as
//! far as argument collection either invokes the sample exactly once or
//! fails. The user is then asked whether to run another sample.

use std::error::Error as StdError;

use tracing::{debug, error, info};

use crate::config::Config;
use crate::console::Console;
use crate::error::{AttemptError, HarnessError, InvalidSelection, Result};
use crate::menu::Menu;
use crate::registry::{Arguments, Example, Registry, SampleGroup};

/// Answer to the continue prompt that ends the session (either case).
pub const QUIT_TOKEN: &str = "q";

const GROUP_PROMPT: &str = "Select a sample group (number or name): ";
const EXAMPLE_PROMPT: &str = "Select an example (number): ";
const KEY_PROMPT: &str = "Enter your subscription key: ";
const CONFIG_PROMPT: &str = "Enter your custom configuration id: ";
const CONTINUE_PROMPT: &str = "Press ENTER to continue or 'q' to quit: ";

/// Driver behaviour switches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverOptions {
    /// Used when the key prompt is answered with an empty line.
    pub default_credential: Option<String>,
    /// Show the full key in the confirmation line.
    pub reveal_credentials: bool,
    /// Stop the session with an error on the first failed attempt.
    pub fail_fast: bool,
}

impl DriverOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_credential: config.subscription_key.clone(),
            reveal_credentials: config.reveal_credentials,
            fail_fast: false,
        }
    }
}

/// Counters for a finished session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Attempts that reached argument collection.
    pub attempts: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Inputs that named no group or example.
    pub rejected: usize,
}

enum State<'r> {
    SelectGroup,
    SelectExample(&'r SampleGroup),
    CollectArguments(&'r SampleGroup, &'r Example),
    Invoke(&'r SampleGroup, &'r Example, Arguments),
}

enum Outcome {
    Rejected(InvalidSelection),
    Finished(std::result::Result<(), AttemptError>),
    EndOfInput,
}

enum Step<'r> {
    Next(State<'r>),
    Done(Outcome),
}

/// Resolve a group by index or exact name. Empty groups are not selectable.
pub fn resolve_group<'r>(
    registry: &'r Registry,
    input: &str,
) -> std::result::Result<&'r SampleGroup, InvalidSelection> {
    let option = Menu::groups(registry).resolve(input)?;
    registry
        .group_at(option.index)
        .filter(|group| !group.is_empty())
        .ok_or_else(|| InvalidSelection::new(input))
}

/// Resolve an example of `group` by index.
pub fn resolve_example<'r>(
    group: &'r SampleGroup,
    input: &str,
) -> std::result::Result<&'r Example, InvalidSelection> {
    let option = Menu::examples(group).resolve(input)?;
    group
        .example(option.index)
        .ok_or_else(|| InvalidSelection::new(input))
}

/// Parse the custom configuration id. Surrounding whitespace is allowed.
pub fn parse_config_value(input: &str) -> std::result::Result<i64, AttemptError> {
    input
        .trim()
        .parse()
        .map_err(|source| AttemptError::InvalidArgument {
            input: input.to_string(),
            source,
        })
}

/// Call `example` once, tagging a failure with where it came from.
pub fn invoke(
    group: &SampleGroup,
    example: &Example,
    args: &Arguments,
) -> std::result::Result<(), AttemptError> {
    info!(group = %group.name, example = example.index, "Invoking sample");
    example
        .invoke(args)
        .map_err(|source| AttemptError::Sample {
            group: group.name.clone(),
            index: example.index,
            source,
        })
}

/// Keys shorter than this are masked completely.
const MASK_TAIL_MIN_LEN: usize = 8;

/// `****`, followed by the last four characters of keys of at least
/// eight characters.
pub fn mask_credential(credential: &str) -> String {
    let count = credential.chars().count();
    if count < MASK_TAIL_MIN_LEN {
        return "****".to_string();
    }
    let tail: String = credential.chars().skip(count - 4).collect();
    format!("****{}", tail)
}

/// The message and every `source` below it, one per line.
pub fn error_chain(err: &dyn StdError) -> String {
    let mut out = format!("Error: {}", err);
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    out
}

/// The interactive session over one registry and one console.
pub struct Driver<'r, C> {
    registry: &'r Registry,
    console: C,
    options: DriverOptions,
}

impl<'r, C: Console> Driver<'r, C> {
    pub fn new(registry: &'r Registry, console: C, options: DriverOptions) -> Self {
        Self {
            registry,
            console,
            options,
        }
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Run attempts until the user quits or input ends.
    ///
    /// # Errors
    /// Console I/O failures, and with `fail_fast` the first failed attempt.
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            match self.attempt()? {
                Outcome::EndOfInput => break,
                Outcome::Rejected(err) => {
                    summary.rejected += 1;
                    debug!(input = %err.input, "Rejected selection");
                    self.console.warn(&format!("Invalid selection: {}", err))?;
                    continue;
                }
                Outcome::Finished(result) => {
                    summary.attempts += 1;
                    match result {
                        Ok(()) => summary.succeeded += 1,
                        Err(err) => {
                            summary.failed += 1;
                            error!(error = %err, "Sample attempt failed");
                            self.console.warn(&error_chain(&err))?;
                            if self.options.fail_fast {
                                return Err(HarnessError::Attempt(err));
                            }
                        }
                    }
                }
            }

            if !self.ask_continue()? {
                break;
            }
        }

        info!(
            attempts = summary.attempts,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "Session finished"
        );
        Ok(summary)
    }

    fn attempt(&mut self) -> Result<Outcome> {
        let mut state = State::SelectGroup;
        loop {
            state = match self.step(state)? {
                Step::Next(next) => next,
                Step::Done(outcome) => return Ok(outcome),
            };
        }
    }

    fn step(&mut self, state: State<'r>) -> Result<Step<'r>> {
        let registry = self.registry;

        match state {
            State::SelectGroup => {
                let menu = Menu::groups(registry);
                self.console
                    .say(&format!("Available sample groups: {}", menu.render_inline()))?;
                let Some(input) = self.console.ask(GROUP_PROMPT)? else {
                    return Ok(Step::Done(Outcome::EndOfInput));
                };
                Ok(match resolve_group(registry, &input) {
                    Ok(group) => Step::Next(State::SelectExample(group)),
                    Err(err) => Step::Done(Outcome::Rejected(err)),
                })
            }

            State::SelectExample(group) => {
                self.console.say(&format!("{} examples:", group.name))?;
                self.console.say(&Menu::examples(group).render_lines())?;
                let Some(input) = self.console.ask(EXAMPLE_PROMPT)? else {
                    return Ok(Step::Done(Outcome::EndOfInput));
                };
                Ok(match resolve_example(group, &input) {
                    Ok(example) => Step::Next(State::CollectArguments(group, example)),
                    Err(err) => Step::Done(Outcome::Rejected(err)),
                })
            }

            State::CollectArguments(group, example) => {
                let Some(mut credential) = self.console.ask_secret(KEY_PROMPT)? else {
                    return Ok(Step::Done(Outcome::EndOfInput));
                };
                if credential.is_empty() {
                    if let Some(default) = &self.options.default_credential {
                        credential = default.clone();
                    }
                }
                let mut args = Arguments::new(credential);

                if group.requires_config() {
                    let Some(input) = self.console.ask(CONFIG_PROMPT)? else {
                        return Ok(Step::Done(Outcome::EndOfInput));
                    };
                    match parse_config_value(&input) {
                        Ok(value) => args = args.with_config(value),
                        Err(err) => return Ok(Step::Done(Outcome::Finished(Err(err)))),
                    }
                }

                Ok(Step::Next(State::Invoke(group, example, args)))
            }

            State::Invoke(group, example, args) => {
                let line = self.confirmation(group, example, &args);
                self.console.say(&line)?;
                let result = invoke(group, example, &args);
                Ok(Step::Done(Outcome::Finished(result)))
            }
        }
    }

    fn confirmation(&self, group: &SampleGroup, example: &Example, args: &Arguments) -> String {
        let credential = if self.options.reveal_credentials {
            args.credential.clone()
        } else {
            mask_credential(&args.credential)
        };
        let mut line = format!(
            "Running {} example {} with subscription key {}",
            group.name, example.index, credential
        );
        if let Some(config) = args.config {
            line.push_str(&format!(" and custom configuration id {}", config));
        }
        line
    }

    fn ask_continue(&mut self) -> Result<bool> {
        Ok(match self.console.ask(CONTINUE_PROMPT)? {
            Some(answer) => !answer.trim().eq_ignore_ascii_case(QUIT_TOKEN),
            None => false,
        })
    }
}
