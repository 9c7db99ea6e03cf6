//! Command-line argument definitions using clap's derive API.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Command-line access to the copay program store
///
/// Loads, imports, replaces and deletes copay benefit programs kept in a
/// SQLite database. Program documents are the JSON produced by the
/// ingestion side.
#[derive(Parser)]
#[command(version, about, name = "copay")]
pub struct Args {
    /// SQLite database file or `file:` URI. Defaults to
    /// $XDG_DATA_HOME/copay/copay.db
    #[arg(long, global = true, value_name = "CONNECTION")]
    pub database: Option<String>,

    /// Milliseconds to wait on a locked database before giving up
    #[arg(long, global = true, value_name = "MS")]
    pub busy_timeout_ms: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage programs
    #[command(alias = "p")]
    Program {
        #[command(subcommand)]
        command: ProgramCommands,
    },
}

/// Show one program with all of its collections
#[derive(ClapArgs)]
pub struct ShowProgramArgs {
    #[arg(help = "Identifier of the program to show")]
    pub id: i64,
}

/// Insert a program read from a JSON document
#[derive(ClapArgs)]
pub struct ImportProgramArgs {
    #[arg(help = "Path to a program JSON document")]
    pub file: PathBuf,
}

/// Replace a stored program with a JSON document
///
/// The document's `version` must match the stored version; a program that
/// was replaced in the meantime is rejected.
#[derive(ClapArgs)]
pub struct ReplaceProgramArgs {
    #[arg(help = "Path to a program JSON document")]
    pub file: PathBuf,
}

/// Delete a program permanently
#[derive(ClapArgs)]
pub struct DeleteProgramArgs {
    #[arg(help = "Identifier of the program to permanently delete")]
    pub id: i64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum ProgramCommands {
    /// List all programs
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a specific program
    #[command(alias = "s")]
    Show(ShowProgramArgs),
    /// Insert a new program from a JSON document
    #[command(alias = "i")]
    Import(ImportProgramArgs),
    /// Replace an existing program from a JSON document
    #[command(alias = "r")]
    Replace(ReplaceProgramArgs),
    /// Delete a program permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteProgramArgs),
}
