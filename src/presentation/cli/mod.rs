//! Command line interface for gitp.
//!
//! The positional grammar is deliberately loose: the first token can be an
//! operation keyword or a repository name, and everything after a repository
//! name is forwarded to git verbatim. clap only handles the flags and hands
//! the raw token list to the [`IntentResolver`].

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::env;
use std::process::exit;
use std::sync::Arc;

use crate::application::services::intent_resolver::IntentResolver;
use crate::application::use_cases::dispatch_operation::DispatchOperationUseCase;
use crate::common::error::GitpError;
use crate::infrastructure::process::SystemCommandExecutor;

/// gitp - apply one git operation across every configured repository
#[derive(Parser)]
#[command(name = "gitp")]
#[command(about = "Apply one git operation across every configured repository")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("GIT_HASH"), " ", env!("BUILD_DATE"), ")"
))]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Target all repositories and forward the remaining tokens to git
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Operation keyword or repository name, followed by arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "TOKENS")]
    pub tokens: Vec<String>,
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    /// Parse the process arguments into a new application instance.
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    /// Resolve the arguments and dispatch the resulting intent.
    ///
    /// Invalid arguments print the full usage text and exit non-zero without
    /// touching the registry; execution-time failures print `error: <cause>`
    /// after the batch has finished.
    pub async fn run(self) -> Result<()> {
        let intent = match IntentResolver::resolve(self.cli.all, &self.cli.tokens) {
            Ok(intent) => intent,
            Err(error) => {
                eprintln!("{} {}", "error:".red().bold(), error);
                print_usage();
                exit(1);
            }
        };

        let executor = Arc::new(SystemCommandExecutor);
        let engine = DispatchOperationUseCase::new(env::current_dir()?, executor);

        match engine.execute(&intent).await {
            Ok(summary) => {
                tracing::debug!(
                    repositories = summary.results.len(),
                    "dispatch completed"
                );
                Ok(())
            }
            Err(GitpError::InvalidArgument) => {
                eprintln!("{} {}", "error:".red().bold(), GitpError::InvalidArgument);
                print_usage();
                exit(1);
            }
            Err(error) => {
                eprintln!("{} {}", "error:".red().bold(), error);
                exit(1);
            }
        }
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Print the enumerated operation forms.
fn print_usage() {
    println!("usage:");
    println!("  gitp init");
    println!("  gitp clone");
    println!("  gitp remote add");
    println!("  gitp config user");
    println!("  gitp pull");
    println!("  gitp push");
    println!();
    println!("  gitp clone [repository name]");
    println!("  gitp remote add [repository name]");
    println!("  gitp config user [repository name]");
    println!("  gitp pull [repository name]");
    println!("  gitp push [repository name]");
    println!();
    println!("  gitp -a [every git command]");
    println!("    e.g.  gitp -a checkout .");
    println!("  gitp [repository name] [every git command]");
    println!("    e.g.  gitp [repository name] checkout .");
}
