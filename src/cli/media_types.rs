use clap::{Parser, Subcommand};
use std::path::PathBuf;
use super::download::SourceArgs;
use crate::constants::{CI_ENV_VAR, REFERENCE_PATH};

#[derive(Parser, Debug)]
#[command(
    name = "media-types",
    about = "Check, update and query the bundled media type list",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

impl Args {
    pub fn build_command() -> clap::Command {
        use clap::CommandFactory;
        let cmd = Self::command();
        cmd.after_help(format!(
            "Detailed Command Information:
  check [OPTIONS]
    Generate a fresh list and compare it with the reference. Never writes.
    Exit code 1 when the reference is out of date.

  update [--strict | --lenient] [OPTIONS]
    Generate a fresh list and overwrite the reference when it differs.
    Strict: exit code 1 after updating. Lenient: log a warning, exit code 0.
    Default: lenient when ${0}=true, strict otherwise.

  lookup <MEDIA_TYPE>
    Exit code 0 when the media type is registered, 1 otherwise.
",
            CI_ENV_VAR
        ))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare the reference list with the registries without modifying it
    Check {
        /// Reference list to compare against (default: the source tree this binary was built from)
        #[arg(long, value_name = "PATH", default_value = REFERENCE_PATH)]
        reference: PathBuf,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Regenerate the list and overwrite the reference when it is out of date
    Update {
        /// Reference list to update (default: the source tree this binary was built from)
        #[arg(long, value_name = "PATH", default_value = REFERENCE_PATH)]
        reference: PathBuf,

        /// Fail after updating an out-of-date reference
        #[arg(long, conflicts_with = "lenient")]
        strict: bool,

        /// Only warn after updating an out-of-date reference
        #[arg(long)]
        lenient: bool,

        #[command(flatten)]
        source: SourceArgs,
    },
    /// Check whether a media type is registered
    Lookup {
        /// Media type, e.g. "text/plain" (parameters are ignored)
        #[arg(value_name = "MEDIA_TYPE")]
        media_type: String,

        /// Read this list instead of the compiled-in one
        #[arg(long, value_name = "PATH")]
        reference: Option<PathBuf>,
    },
}

/// Flags win; otherwise strict unless running in CI.
pub fn resolve_strict(strict: bool, lenient: bool, in_ci: bool) -> bool {
    if strict {
        true
    } else if lenient {
        false
    } else {
        !in_ci
    }
}
