//! Command-line interface implementation for mason.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for mason.
#[derive(Parser, Debug)]
#[command(author, version, about = "mason: generate project structures from markdown trees and templates", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Show what would be created without touching the filesystem
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Custom templates directory
    #[arg(long, global = true, value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a project structure from a markdown file
    Init {
        /// Markdown file containing the project structure
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output directory (defaults to the current directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Overwrite files that already exist in the output directory
        #[arg(long)]
        overwrite: bool,
    },

    /// Create a project from a catalog template
    Create {
        /// Template name
        #[arg(short, long)]
        template: String,

        /// Project name (also the default output directory)
        #[arg(short, long)]
        name: String,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Overwrite files that already exist in the output directory
        #[arg(long)]
        overwrite: bool,
    },

    /// List available templates
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Show template details
    Show {
        /// Template name
        #[arg(value_name = "TEMPLATE")]
        template: String,
    },
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
