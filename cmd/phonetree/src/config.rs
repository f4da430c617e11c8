//! Index configuration loading.

use std::path::Path;

use anyhow::{Context, Result, bail};
use giztoy_phonetree::Config;

/// Loads a YAML or JSON config, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let data = std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    parse(ext, &data).with_context(|| format!("parse config {}", path.display()))
}

fn parse(ext: &str, data: &[u8]) -> Result<Config> {
    let cfg = match ext {
        "json" => serde_json::from_slice(data)?,
        "yaml" | "yml" => serde_yaml::from_slice(data)?,
        _ => bail!("unsupported config format {ext:?}, want json or yaml"),
    };
    Ok(cfg)
}

/// Applies command-line overrides on top of a loaded config.
pub fn apply(mut cfg: Config, bucket_size: Option<usize>, max_length: Option<usize>) -> Config {
    if let Some(n) = bucket_size {
        cfg.bucket_size = n;
    }
    if let Some(n) = max_length {
        cfg.max_length = n;
    }
    cfg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let cfg = parse("yaml", b"bucket_size: 4\n").unwrap();
        assert_eq!(cfg.bucket_size, 4);
        assert_eq!(cfg.max_length, Config::default().max_length);
    }

    #[test]
    fn test_parse_json() {
        let cfg = parse("json", br#"{"bucket_size": 2, "max_length": 20}"#).unwrap();
        assert_eq!(
            cfg,
            Config {
                bucket_size: 2,
                max_length: 20
            }
        );
    }

    #[test]
    fn test_parse_unknown_format() {
        assert!(parse("toml", b"").is_err());
    }

    #[test]
    fn test_apply_overrides() {
        let cfg = apply(Config::default(), Some(3), None);
        assert_eq!(cfg.bucket_size, 3);
        assert_eq!(cfg.max_length, Config::default().max_length);
        assert_eq!(load(None).unwrap(), Config::default());
    }
}
