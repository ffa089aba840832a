pub mod download;
pub mod media_types;
