use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use wordcraft_config::Config;

/// Picked up from the working directory when no `--config` is given
pub const DEFAULT_CONFIG_FILE: &str = "config.json";

fn read_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// An explicit path must exist, otherwise fall back to the default file
/// and finally to built-in defaults with environment overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    if let Some(path) = path {
        return read_config(path);
    }

    let default_file = Path::new(DEFAULT_CONFIG_FILE);
    if default_file.exists() {
        read_config(default_file)
    } else {
        tracing::debug!("No {DEFAULT_CONFIG_FILE}, using defaults and environment");
        Ok(Config::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordcraft.json");
        std::fs::write(
            &path,
            r#"{ "translator": { "enabled": false }, "store": { "path": "cards.json" }, "timeout_seconds": 2 }"#,
        )
        .unwrap();

        let config = load_config(Some(path.as_path())).unwrap();

        assert!(!config.translator.enabled);
        assert_eq!(config.store.path, Path::new("cards.json"));
        assert_eq!(config.timeout_seconds, 2);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(dir.path().join("nope.json").as_path())).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordcraft.json");
        std::fs::write(&path, "{ translator: ").unwrap();

        assert!(load_config(Some(path.as_path())).is_err());
    }
}
