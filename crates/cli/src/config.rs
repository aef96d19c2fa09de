//! Environment-derived configuration for the demo game.
use std::env;
use std::path::PathBuf;

use screenplay_core::director::DEFAULT_TARGET_FPS;

/// Demo game configuration.
///
/// Environment variables:
/// - `SCREENPLAY_TARGET_FPS` - Loop rate cap (default: 60)
/// - `SCREENPLAY_LOG_DIR` - Log directory override (default: platform data dir)
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub target_fps: u32,
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(fps) = read_env::<u32>("SCREENPLAY_TARGET_FPS") {
            config.target_fps = fps.clamp(1, 240);
        }
        if let Some(dir) = env::var_os("SCREENPLAY_LOG_DIR") {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            log_dir: None,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
