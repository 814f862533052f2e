use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use log::warn;
use serde::Deserialize;

const USAGE: &str = "usage: -width N -height N -model PATH [-scene simple|bunny] [-config PATH]";

/// Which of the hard-coded demo scenes to generate when no model is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneKind {
    #[default]
    Simple,
    Bunny,
}

impl FromStr for SceneKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "simple" => Ok(SceneKind::Simple),
            "bunny" => Ok(SceneKind::Bunny),
            other => bail!("unknown scene {:?}, expected \"simple\" or \"bunny\"", other),
        }
    }
}

/// Startup configuration for the demo.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub model: Option<PathBuf>,
    pub scene: SceneKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            model: None,
            scene: SceneKind::default(),
        }
    }
}

/// The same settings as a TOML file. Every field is optional so a file can
/// override just the values it cares about.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    width: Option<u32>,
    height: Option<u32>,
    model: Option<PathBuf>,
    scene: Option<String>,
}

impl Config {
    /// Parses the process command line (without the program name).
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    /// Scans a flat flag list: `-width N`, `-height N`, `-model PATH`,
    /// `-scene NAME`, `-config PATH`. Later flags win; flags always win over
    /// file values. Unrecognized flags are skipped with a warning.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.is_empty() {
            bail!("no arguments given; {}", USAGE);
        }

        let mut config = Config::default();

        // A config file forms the baseline, so resolve it before the flags.
        // This pass steps over flag values the same way the main scan does,
        // so another flag's value is never mistaken for `-config`.
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-config" => {
                    let path = flag_value(&args, i)?;
                    config.apply_file(Path::new(path))?;
                    i += 2;
                }
                "-width" | "-height" | "-model" | "-scene" => i += 2,
                _ => i += 1,
            }
        }

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "-width" => {
                    let value = flag_value(&args, i)?;
                    config.width = value
                        .parse()
                        .with_context(|| format!("invalid -width value {:?}", value))?;
                    i += 2;
                }
                "-height" => {
                    let value = flag_value(&args, i)?;
                    config.height = value
                        .parse()
                        .with_context(|| format!("invalid -height value {:?}", value))?;
                    i += 2;
                }
                "-model" => {
                    config.model = Some(PathBuf::from(flag_value(&args, i)?));
                    i += 2;
                }
                "-scene" => {
                    config.scene = flag_value(&args, i)?.parse()?;
                    i += 2;
                }
                "-config" => {
                    // Already applied in the first pass.
                    i += 2;
                }
                other => {
                    warn!("skipping unrecognized argument {:?}", other);
                    i += 1;
                }
            }
        }

        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        let file: ConfigFile = toml::from_str(&text)
            .with_context(|| format!("could not parse config file {}", path.display()))?;

        if let Some(width) = file.width {
            self.width = width;
        }
        if let Some(height) = file.height {
            self.height = height;
        }
        if let Some(model) = file.model {
            self.model = Some(model);
        }
        if let Some(scene) = file.scene {
            self.scene = scene.parse()?;
        }
        Ok(())
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow::anyhow!("flag {} is missing its value; {}", args[i], USAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_empty_arguments_is_an_error() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn test_width_and_height() {
        let config = parse(&["-width", "1280", "-height", "720"]).expect("should parse");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 720);
        assert!(config.model.is_none());
    }

    #[test]
    fn test_model_path() {
        let config = parse(&["-model", "assets/statue.obj"]).expect("should parse");
        assert_eq!(config.model.as_deref(), Some(Path::new("assets/statue.obj")));
    }

    #[test]
    fn test_defaults_apply_when_flags_absent() {
        let config = parse(&["-model", "a.obj"]).expect("should parse");
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 360);
        assert_eq!(config.scene, SceneKind::Simple);
    }

    #[test]
    fn test_unrecognized_flag_is_skipped() {
        let config = parse(&["-fullscreen", "-width", "800"]).expect("should parse");
        assert_eq!(config.width, 800);
    }

    #[test]
    fn test_missing_value_is_an_error() {
        assert!(parse(&["-width"]).is_err());
    }

    #[test]
    fn test_non_numeric_width_is_an_error() {
        assert!(parse(&["-width", "wide"]).is_err());
    }

    #[test]
    fn test_scene_selection() {
        let config = parse(&["-scene", "bunny"]).expect("should parse");
        assert_eq!(config.scene, SceneKind::Bunny);
        assert!(parse(&["-scene", "cornell"]).is_err());
    }

    #[test]
    fn test_config_file_overridden_by_flags() {
        let dir = std::env::temp_dir().join("rtdemo_config_test");
        fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("demo.toml");
        fs::write(&path, "width = 1920\nheight = 1080\nscene = \"bunny\"\n").expect("write config");

        let path_str = path.to_str().expect("utf-8 path").to_string();
        let config = Config::from_args(vec![
            "-config".to_string(),
            path_str,
            "-width".to_string(),
            "800".to_string(),
        ])
        .expect("should parse");

        // Flag beats file, file beats default.
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 1080);
        assert_eq!(config.scene, SceneKind::Bunny);
    }

    #[test]
    fn test_flag_value_is_not_mistaken_for_config_flag() {
        // "-config" here is the model path, not the config flag.
        let config = parse(&["-model", "-config"]).expect("should parse");
        assert_eq!(config.model.as_deref(), Some(Path::new("-config")));
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        assert!(parse(&["-config", "/definitely/not/here.toml"]).is_err());
    }
}
