//! Parses config file
use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    err,
    utils::constants::{CONFIG_FILE_NAME, DEFAULT_FPS_SCALE, FRM_EXTENSIONS},
};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Multiplies the frame rate stored in the file.
    pub fps_scale: f64,
    /// One GIF per direction. Otherwise only direction 0 is written.
    pub split_dirs: bool,
    /// Writes a `.json` next to the GIFs.
    pub metadata: bool,
    /// Files no other layout accepts are decoded as written by the Fallout tools.
    pub fallout_fallback: bool,
    /// Replaces the embedded palette.
    pub palette: Option<PathBuf>,
    /// Without the dot.
    pub extensions: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps_scale: DEFAULT_FPS_SCALE,
            split_dirs: true,
            metadata: false,
            fallout_fallback: true,
            palette: None,
            extensions: FRM_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> eyre::Result<()> {
        if !self.fps_scale.is_finite() || self.fps_scale <= 0. {
            return err!("fps_scale must be a positive number: {}", self.fps_scale);
        }

        if self.extensions.is_empty() {
            return err!("No file extensions to look for");
        }

        Ok(())
    }
}

/// Parse `frm2gif.toml` in the same folder as the binary.
///
/// A missing file gives the default config.
pub fn parse_config() -> eyre::Result<Config> {
    let path = match env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|parent| parent.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME)),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    if !path.exists() {
        return Ok(Config::default());
    }

    parse_config_from_file(path.as_path())
}

pub fn parse_config_from_str(s: &str) -> eyre::Result<Config> {
    let mut config: Config = toml::from_str(s)?;

    config.extensions = config
        .extensions
        .iter()
        .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
        .collect();

    config.validate()?;

    Ok(config)
}

/// Relative palette path is resolved against the config file folder.
pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    let mut config = parse_config_from_str(&buffer)?;

    let root = path.parent().unwrap_or(Path::new(""));

    config.palette = config.palette.map(|palette| {
        if palette.is_relative() {
            root.join(palette)
        } else {
            palette
        }
    });

    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_is_default() {
        let config = parse_config_from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.extensions.len(), 13);
        assert!(config.split_dirs);
    }

    #[test]
    fn partial() {
        let config = parse_config_from_str(
            "\
fps_scale = 0.5
split_dirs = false
extensions = [\".FRM\", \"fr0\"]
",
        )
        .unwrap();

        assert_eq!(config.fps_scale, 0.5);
        assert!(!config.split_dirs);
        assert!(!config.metadata);
        assert!(config.fallout_fallback);
        assert_eq!(config.extensions, vec!["frm", "fr0"]);
    }

    #[test]
    fn bad_fps_scale() {
        assert!(parse_config_from_str("fps_scale = 0.0").is_err());
        assert!(parse_config_from_str("fps_scale = -2.0").is_err());
        assert!(parse_config_from_str("fps_scale = nan").is_err());
        assert!(parse_config_from_str("extensions = []").is_err());
        assert!(parse_config_from_str("fps_scale = \"fast\"").is_err());
    }

    #[test]
    fn relative_palette() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        std::fs::write(
            &path,
            "palette = \"pal/color.pal\"\nmetadata = true\nfallout_fallback = false\n",
        )
        .unwrap();

        let config = parse_config_from_file(&path).unwrap();

        assert!(config.metadata);
        assert!(!config.fallout_fallback);
        assert_eq!(config.palette, Some(dir.path().join("pal/color.pal")));
    }
}
