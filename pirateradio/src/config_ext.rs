//! Extension to read the skill settings from pirateconfig
//!
//! Adds the `skill` section to `pirateconfig::Config`:
//!
//! ```yaml
//! skill:
//!   stations_file: stations.json   # relative to the config directory
//!   skill_id: amzn1.ask.skill.xxxx
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pirateconfig::get_config;
//! use pirateradio::SkillConfigExt;
//!
//! # fn main() -> pirateradio::Result<()> {
//! let config = get_config();
//! let registry = config.load_station_registry()?;
//! println!("{} stations", registry.len());
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::registry::StationRegistry;
use pirateconfig::Config;
use serde_yaml::Value;
use std::path::PathBuf;
use tracing::info;

/// Skill settings stored in `pirateconfig::Config`
pub trait SkillConfigExt {
    /// Configured station file, resolved against the config directory
    ///
    /// `None` means the embedded station list.
    fn get_stations_file(&self) -> anyhow::Result<Option<PathBuf>>;

    fn set_stations_file(&self, path: &str) -> anyhow::Result<()>;

    /// Application id the skill answers to, if verification is enabled
    fn get_skill_id(&self) -> anyhow::Result<Option<String>>;

    fn set_skill_id(&self, skill_id: &str) -> anyhow::Result<()>;

    /// Station registry from the configured file, or the embedded one
    fn load_station_registry(&self) -> Result<StationRegistry>;
}

impl SkillConfigExt for Config {
    fn get_stations_file(&self) -> anyhow::Result<Option<PathBuf>> {
        Ok(self
            .get_string(&["skill", "stations_file"])?
            .map(|file| self.resolve_path(&file)))
    }

    fn set_stations_file(&self, path: &str) -> anyhow::Result<()> {
        self.set_value(&["skill", "stations_file"], Value::String(path.to_string()))
    }

    fn get_skill_id(&self) -> anyhow::Result<Option<String>> {
        self.get_string(&["skill", "skill_id"])
    }

    fn set_skill_id(&self, skill_id: &str) -> anyhow::Result<()> {
        self.set_value(&["skill", "skill_id"], Value::String(skill_id.to_string()))
    }

    fn load_station_registry(&self) -> Result<StationRegistry> {
        match self.get_stations_file()? {
            Some(path) => StationRegistry::from_path(path),
            None => {
                let registry = StationRegistry::embedded()?;
                info!(stations = registry.len(), "Using embedded station registry");
                Ok(registry)
            }
        }
    }
}
