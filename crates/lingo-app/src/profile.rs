use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use lingo_config::Config;
use lingo_config::history::HistoryConfig;
use serde::{Deserialize, Serialize};

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// `<config dir>/lingo/profiles`
pub struct Profiles {
    dir: PathBuf,
}

impl Profiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Profiles under the platform config directory
    pub fn user() -> anyhow::Result<Self> {
        let root = dirs::config_dir().context("No config directory on this platform")?;
        Ok(Self::new(root.join("lingo").join("profiles")))
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Create the profiles folder and the main profile if missing
    pub fn init(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let main_profile = self.path("main");
        if !main_profile.exists() {
            let profile = Profile {
                name: "main".into(),
                value: Config::default(),
            };
            fs::write(&main_profile, serde_json::to_string_pretty(&profile)?)?;
            tracing::info!("Created main profile at {}", main_profile.display());
        }

        Ok(())
    }

    /// Load a profile by name, falling back to main, then to defaults
    pub fn load(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.path(name);
        if profile_file.exists() {
            return read_profile(&profile_file);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or defaults");
        let main_file = self.path("main");
        if main_file.exists() {
            read_profile(&main_file)
        } else {
            Ok(Config::default())
        }
    }
}

fn read_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Invalid profile {}", path.display()))?;
    Ok(profile.value)
}

/// Load a bare config file (no profile wrapper)
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

/// Where history lives: the configured directory, else the platform data directory
pub fn history_dir(config: &HistoryConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = &config.storage_dir {
        return Ok(PathBuf::from(dir));
    }

    let data = dirs::data_dir().context("No data directory on this platform")?;
    Ok(data.join("lingo"))
}
