use crate::constants::{DEFAULT_TIMEOUT_SECS, IANA_BASE_URL, USER_AGENT};
use crate::error::MediaTypeError;
use log::debug;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Abstraction over where registry CSV documents come from.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RegistrySource {
    /// Returns the raw CSV text of one registry (e.g. "application").
    fn fetch(&self, registry: &str) -> Result<String, MediaTypeError>;
}

/// Fetches registries over HTTPS from IANA (or a mirror).
pub struct IanaSource {
    base_url: String,
    agent: ureq::Agent,
}

impl IanaSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build();
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn registry_url(&self, registry: &str) -> String {
        format!("{}/{}.csv", self.base_url, registry)
    }
}

impl Default for IanaSource {
    fn default() -> Self {
        Self::new(IANA_BASE_URL, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }
}

impl RegistrySource for IanaSource {
    fn fetch(&self, registry: &str) -> Result<String, MediaTypeError> {
        let url = self.registry_url(registry);
        debug!("GET {}", url);
        match self.agent.get(&url).call() {
            Ok(resp) => Ok(resp.into_string()?),
            Err(ureq::Error::Status(404, _)) => Err(MediaTypeError::MissingRegistry(registry.to_string())),
            Err(ureq::Error::Status(code, resp)) => Err(MediaTypeError::Http {
                url,
                reason: format!("status {} {}", code, resp.status_text()),
            }),
            Err(e) => Err(MediaTypeError::Http { url, reason: e.to_string() }),
        }
    }
}

/// Reads `<dir>/<registry>.csv` from a local directory (offline snapshots, tests).
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl RegistrySource for DirectorySource {
    fn fetch(&self, registry: &str) -> Result<String, MediaTypeError> {
        let path = self.dir.join(format!("{}.csv", registry));
        debug!("Reading {:?}", path);
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => MediaTypeError::MissingRegistry(registry.to_string()),
            _ => MediaTypeError::Io(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_registry_url() {
        let source = IanaSource::new("https://mirror.example/media-types/", Duration::from_secs(1));
        assert_eq!(
            source.registry_url("text"),
            "https://mirror.example/media-types/text.csv"
        );
    }

    #[test]
    fn test_default_source_points_at_iana() {
        let source = IanaSource::default();
        assert_eq!(
            source.registry_url("audio"),
            "https://www.iana.org/assignments/media-types/audio.csv"
        );
    }

    #[test]
    fn test_directory_source_reads_registry() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("text.csv"), "Name,Template,Reference\nplain,,[RFC2046]\n").unwrap();

        let source = DirectorySource::new(dir.path());
        let csv = source.fetch("text").unwrap();
        assert!(csv.contains("plain"));
    }

    #[test]
    fn test_directory_source_missing_registry() {
        let dir = tempdir().unwrap();
        let source = DirectorySource::new(dir.path());
        match source.fetch("video") {
            Err(MediaTypeError::MissingRegistry(name)) => assert_eq!(name, "video"),
            other => panic!("Expected MissingRegistry, got {:?}", other),
        }
    }
}
