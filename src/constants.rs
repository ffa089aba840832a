/// Application name for directory naming (XDG_STATE_HOME, etc.)
pub const APP_NAME: &str = "media-type-sync";
pub const LOG_DIR_NAME: &str = "logs";

/// Base URL of the IANA media type registries. Each registry lives at `<base>/<name>.csv`.
pub const IANA_BASE_URL: &str = "https://www.iana.org/assignments/media-types";

/// Top-level media type registries, in the order they are fetched.
pub const REGISTRIES: &[&str] = &[
    "application",
    "audio",
    "font",
    "haptics",
    "image",
    "message",
    "model",
    "multipart",
    "text",
    "video",
];

/// File name of the reference list, both in `data/` and in temporary candidate directories.
pub const MEDIA_TYPES_FILE_NAME: &str = "media_types.json";

/// HTTP timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const USER_AGENT: &str = concat!("media-type-sync/", env!("CARGO_PKG_VERSION"));

/// Set to "true" by most CI providers.
pub const CI_ENV_VAR: &str = "CI";
pub const BASE_URL_ENV_VAR: &str = "MEDIA_TYPES_BASE_URL";

/// Tracked reference list inside the package tree.
///
/// Resolved at compile time from CARGO_MANIFEST_DIR, so it is only meaningful
/// when running from the source checkout. Installed binaries should be given
/// an explicit path.
pub const REFERENCE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/media_types.json");
