use clap::Parser;
use std::path::PathBuf;
use crate::constants::{BASE_URL_ENV_VAR, DEFAULT_TIMEOUT_SECS, IANA_BASE_URL, REFERENCE_PATH, REGISTRIES};

pub const BIN_NAME: &str = "download_media_type_files";

#[derive(Parser, Debug)]
#[command(
    name = "download_media_type_files",
    about = "Download the IANA media type registries and write a JSON list of all media types",
    version
)]
pub struct Args {
    /// Path of the JSON file to write (default: data/media_types.json in the source tree this binary was built from)
    #[arg(short, long, value_name = "PATH", default_value = REFERENCE_PATH)]
    pub output: PathBuf,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Where registry documents come from. Shared with `media-types`.
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct SourceArgs {
    /// Read <DIR>/<registry>.csv instead of downloading
    #[arg(long, value_name = "DIR", conflicts_with = "base_url")]
    pub source_dir: Option<PathBuf>,

    /// Registry base URL (falls back to $MEDIA_TYPES_BASE_URL, then IANA)
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Disable progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Args {
    pub fn build_command() -> clap::Command {
        use clap::CommandFactory;
        let cmd = Self::command();
        cmd.after_help(format!(
            "Registries: {}
Source: {}/<registry>.csv (override with --base-url or ${})",
            REGISTRIES.join(", "),
            IANA_BASE_URL,
            BASE_URL_ENV_VAR
        ))
    }
}
