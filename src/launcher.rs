//! Launcher script generation
//!
//! An alias is backed by a tiny generated script: a header line followed by a
//! single invocation line that runs the target with its preset arguments and
//! passes through whatever the caller appends.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How the generated script hands control to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    /// Block until the target exits
    #[default]
    Call,
    /// Launch detached and return immediately (GUI programs)
    Fork,
}

impl fmt::Display for LaunchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "normal"),
            Self::Fork => write!(f, "fork"),
        }
    }
}

/// Script dialect generated for the platform shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptFlavor {
    /// Windows cmd.exe batch files
    Batch,
    /// POSIX sh scripts
    Sh,
}

impl ScriptFlavor {
    /// Flavor matching the compile-time target
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::Batch
        } else {
            Self::Sh
        }
    }

    /// File extension used for launcher scripts of this flavor
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Batch => "bat",
            Self::Sh => "sh",
        }
    }

    /// Render the launcher script for `target` with fixed `args`
    #[must_use]
    pub fn render(self, target: &str, args: &[String], mode: LaunchMode) -> String {
        let mut invocation = quote(target);
        for arg in args {
            invocation.push(' ');
            invocation.push_str(&quote(arg));
        }

        match self {
            Self::Batch => match mode {
                LaunchMode::Call => format!("@echo off\ncall {invocation} %*\n"),
                LaunchMode::Fork => format!("@echo off\nstart \"\" {invocation} %*\n"),
            },
            Self::Sh => match mode {
                LaunchMode::Call => format!("#!/bin/sh\nexec {invocation} \"$@\"\n"),
                // Detached: drop stdio so the shell returns immediately
                LaunchMode::Fork => {
                    format!("#!/bin/sh\n{invocation} \"$@\" >/dev/null 2>&1 &\n")
                }
            },
        }
    }
}

/// Wrap a path or argument in quotes when it contains a space, so the
/// generated script survives re-tokenization by the shell.
fn quote(arg: &str) -> String {
    if arg.contains(' ') {
        format!("\"{arg}\"")
    } else {
        arg.to_string()
    }
}
