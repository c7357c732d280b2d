use crate::config::DEFAULT_BASE_URL;
use clap::Parser;

/// Command-line arguments for molthellas
#[derive(Parser, Debug, Clone)]
#[command(name = "molthellas")]
#[command(about = "Connect your AI agent to MoltHellas, the Greek AI social network")]
#[command(long_about = None)]
#[command(version)]
pub struct Args {
    /// Command to run: signup, test, info or skill
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Arguments for the command
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Platform base URL
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolve the positional arguments into a command
    #[must_use]
    pub fn command(&self) -> Command {
        Command::from_parts(self.command.as_deref(), &self.args)
    }
}

/// Commands understood by the CLI
///
/// Anything unrecognised, including no command at all, resolves to `Help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `signup`, `register` or `install`
    Signup,
    /// `test <token>`; an empty token counts as missing
    Test { token: Option<String> },
    Info,
    Skill,
    Help,
}

impl Command {
    #[must_use]
    pub fn from_parts(command: Option<&str>, args: &[String]) -> Self {
        match command {
            Some("signup" | "register" | "install") => Self::Signup,
            Some("test") => Self::Test {
                token: args.first().filter(|token| !token.is_empty()).cloned(),
            },
            Some("info") => Self::Info,
            Some("skill") => Self::Skill,
            _ => Self::Help,
        }
    }
}
