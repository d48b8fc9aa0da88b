//! `pagebuilder`: inspect the block catalog, check candidate blocks and
//! generate new blocks into a page document.

mod commands;
mod config;
mod files;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "pagebuilder", version, about = "Page block catalog and AI block generation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the block schema as the model sees it.
    Describe {
        /// Print the editor palette categories as JSON instead.
        #[arg(long)]
        categories: bool,
    },
    /// Check a `{ "blocks": [...] }` file and report what would be accepted.
    Validate {
        file: PathBuf,
        #[arg(long)]
        strict: bool,
    },
    /// Generate blocks from a prompt and append them to a page document.
    Generate {
        #[arg(long, short)]
        prompt: String,
        /// Page document to extend; an empty page when omitted.
        #[arg(long)]
        document: Option<PathBuf>,
        /// Where to write the resulting document; stdout when omitted.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Requesting user; falls back to `PAGEBUILDER_USER`.
        #[arg(long)]
        user: Option<String>,
        #[arg(long)]
        strict: bool,
        /// Write only `{ "blocks": [...] }` for the inserted blocks.
        #[arg(long)]
        blocks_only: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    config::init();
    pagebuilder_core::observability::init_observability();

    let cli = Cli::parse();
    match cli.command {
        Command::Describe { categories } => commands::describe(categories),
        Command::Validate { file, strict } => commands::validate(&file, strict),
        Command::Generate {
            prompt,
            document,
            out,
            user,
            strict,
            blocks_only,
        } => {
            let principal = config::principal(user);
            commands::generate(commands::GenerateArgs {
                prompt,
                document,
                out,
                principal,
                strict,
                blocks_only,
            })
            .await
        }
    }
}
