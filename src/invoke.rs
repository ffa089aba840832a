//! In-process runner for `download_media_type_files`.
//!
//! `invoke` parses an argument list, runs the generator and captures what the
//! binary would print together with its exit code.

use crate::cli::download::{Args, SourceArgs, BIN_NAME};
use crate::config;
use crate::constants::REGISTRIES;
use crate::error::MediaTypeError;
use crate::generator;
use crate::registry::MediaTypeList;
use crate::source::{DirectorySource, IanaSource, RegistrySource};
use clap::FromArgMatches;
use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

impl SourceArgs {
    pub fn build_source(&self) -> Box<dyn RegistrySource> {
        match &self.source_dir {
            Some(dir) => Box::new(DirectorySource::new(dir)),
            None => {
                let base_url = self
                    .base_url
                    .as_deref()
                    .map(|u| config::base_url_from(Some(u)))
                    .unwrap_or_else(config::default_base_url);
                Box::new(IanaSource::new(base_url, Duration::from_secs(self.timeout)))
            }
        }
    }

    /// Generates the full list into `path`.
    pub fn generate(&self, path: &Path) -> Result<MediaTypeList, MediaTypeError> {
        let source = self.build_source();
        generator::generate_to(source.as_ref(), REGISTRIES, path, !self.no_progress)
    }
}

/// Captured result of one command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub output: String,
    pub exit_code: i32,
}

impl Invocation {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Runs `download_media_type_files` with `args` (without the program name).
pub fn invoke<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(args.into_iter().map(Into::into));

    let parsed = Args::build_command()
        .try_get_matches_from(argv)
        .and_then(|matches| Args::from_arg_matches(&matches));

    let args = match parsed {
        Ok(args) => args,
        // Help and version end up here too, with exit code 0
        Err(e) => {
            return Invocation { output: e.render().to_string(), exit_code: e.exit_code() };
        }
    };

    match args.source.generate(&args.output) {
        Ok(list) => Invocation {
            output: format!("Wrote {} media types to {}\n", list.len(), args.output.display()),
            exit_code: 0,
        },
        Err(e) => Invocation { output: format!("Error: {}\n", e), exit_code: 1 },
    }
}
