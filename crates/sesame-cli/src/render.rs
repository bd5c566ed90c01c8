use clap::ValueEnum;
use serde::Serialize;

use crate::command::Cli;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
#[allow(clippy::upper_case_acronyms)]
pub(crate) enum Output {
    JSON,
    None,
}

pub enum CommandOutput {
    Plain(String),
    Object(serde_json::Value),
}
pub type CommandResult = color_eyre::eyre::Result<CommandOutput>;

impl CommandOutput {
    pub fn object<T: Serialize>(value: &T) -> CommandResult {
        Ok(CommandOutput::Object(serde_json::to_value(value)?))
    }
}

impl From<&str> for CommandOutput {
    fn from(text: &str) -> Self {
        CommandOutput::Plain(text.to_owned())
    }
}
impl From<String> for CommandOutput {
    fn from(text: String) -> Self {
        CommandOutput::Plain(text)
    }
}

pub struct RenderConfig {
    pub output: Output,
}

impl RenderConfig {
    pub fn new(cli: &Cli) -> Self {
        Self { output: cli.output }
    }

    pub fn render_result(&self, result: CommandResult) -> color_eyre::eyre::Result<()> {
        match result {
            // Errors will be passed through to the caller, and rendered by the main function
            Err(e) => Err(e),

            Ok(_) if self.output == Output::None => Ok(()),

            // Plain text is just output as is
            Ok(CommandOutput::Plain(text)) => {
                println!("{}", text);
                Ok(())
            }

            Ok(CommandOutput::Object(obj)) => {
                println!("{}", serde_json::to_string_pretty(&obj)?);
                Ok(())
            }
        }
    }
}
