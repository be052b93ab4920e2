use clap::{Parser, Subcommand};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::OsStr;

/// Shell alias manager
///
/// Registers short names that launch a target executable with preset
/// arguments. Each alias is a tiny generated launcher script stored in the
/// alias directory; putting that directory on PATH makes aliases invocable
/// by name.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new alias
    Add {
        /// Alias name
        name: String,
        /// Path to the target executable
        path: String,
        /// Fixed arguments passed to the target on every invocation
        #[arg(value_name = "ARG", num_args = 0..)]
        args: Vec<String>,
        /// Launch the target detached instead of blocking (GUI applications)
        #[arg(long)]
        fork: bool,
        /// Overwrite the alias if it already exists
        #[arg(long)]
        force: bool,
    },
    /// List registered aliases
    List,
    /// Print the launcher script stored for an alias
    Get {
        /// Alias name
        #[arg(add = ArgValueCompleter::new(list_alias_names))]
        name: String,
    },
    /// Remove one or more aliases
    #[command(alias = "del")]
    Rem {
        /// Alias name(s) to remove
        #[arg(value_name = "NAME", num_args = 1.., required = true, add = ArgValueCompleter::new(list_alias_names))]
        names: Vec<String>,
    },
    /// Ensure the alias directory is on the persistent search path
    Install {
        /// Only report whether the directory is on PATH, without modifying
        /// anything
        #[arg(long)]
        check: bool,
    },
    /// Generate shell completion setup instructions
    Completion {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}

/// List registered alias names for completion
///
/// Returns empty Vec if the store cannot be opened or read
/// Filters names by the provided prefix
pub fn list_alias_names(current: &OsStr) -> Vec<CompletionCandidate> {
    let Ok(store) = crate::commands::common::open_store() else {
        return Vec::new();
    };
    let Ok(entries) = store.entries() else {
        return Vec::new();
    };

    let prefix = current.to_string_lossy();

    entries
        .into_iter()
        .filter(|entry| entry.name.starts_with(&*prefix))
        .map(|entry| CompletionCandidate::new(entry.name))
        .collect()
}
