use crate::error::MediaTypeError;
use crate::registry::{parse_registry, MediaTypeList};
use crate::source::RegistrySource;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::fs;
use std::path::Path;

fn progress_bar(len: usize, show_progress: bool) -> ProgressBar {
    if !show_progress {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.cyan} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░ "));
    }
    pb
}

/// Fetches and parses every registry into a single list.
pub fn collect(
    source: &dyn RegistrySource,
    registries: &[&str],
    show_progress: bool,
) -> Result<MediaTypeList, MediaTypeError> {
    let pb = progress_bar(registries.len(), show_progress);
    let mut list = MediaTypeList::new();

    for registry in registries {
        pb.set_message(registry.to_string());
        let csv_text = source.fetch(registry)?;
        let types = parse_registry(registry, &csv_text)?;
        debug!("Registry '{}': {} entries", registry, types.len());
        list.extend(types);
        pb.inc(1);
    }

    pb.finish_and_clear();
    Ok(list)
}

/// Writes the list in reference format, creating parent directories as needed.
pub fn write_list(list: &MediaTypeList, path: &Path) -> Result<(), MediaTypeError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, list.to_json_bytes()?)?;
    Ok(())
}

/// Fetch, parse and write in one go.
pub fn generate_to(
    source: &dyn RegistrySource,
    registries: &[&str],
    path: &Path,
    show_progress: bool,
) -> Result<MediaTypeList, MediaTypeError> {
    let list = collect(source, registries, show_progress)?;
    write_list(&list, path)?;
    info!("Wrote {} media types to {:?}", list.len(), path);
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MockRegistrySource;
    use mockall::predicate::eq;
    use tempfile::tempdir;

    #[test]
    fn test_collect_merges_registries() {
        let mut source = MockRegistrySource::new();
        source
            .expect_fetch()
            .with(eq("audio"))
            .times(1)
            .returning(|_| Ok("Name,Template,Reference\nogg,audio/ogg,[RFC5334]\n".to_string()));
        source
            .expect_fetch()
            .with(eq("text"))
            .times(1)
            .returning(|_| Ok("Name,Template,Reference\nplain,,[RFC2046]\n".to_string()));

        let list = collect(&source, &["audio", "text"], false).unwrap();
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["audio/ogg", "text/plain"]);
    }

    #[test]
    fn test_collect_stops_on_source_error() {
        let mut source = MockRegistrySource::new();
        source
            .expect_fetch()
            .with(eq("font"))
            .times(1)
            .returning(|r| Err(MediaTypeError::MissingRegistry(r.to_string())));
        source.expect_fetch().with(eq("image")).never();

        let err = collect(&source, &["font", "image"], false).unwrap_err();
        assert!(matches!(err, MediaTypeError::MissingRegistry(_)));
    }

    #[test]
    fn test_generate_to_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested/out/media_types.json");

        let mut source = MockRegistrySource::new();
        source
            .expect_fetch()
            .returning(|_| Ok("Name,Template,Reference\nzip,application/zip,[Paul_Lindner]\n".to_string()));

        let list = generate_to(&source, &["application"], &out, false).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "[\n    \"application/zip\"\n]\n"
        );
    }
}
