use crate::api::CheatApi;
use crate::config::CheatConfig;
use crate::error::{CheatError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides both the data and the config directory when set.
pub const HOME_ENV: &str = "CHEATSHEET_HOME";
const HOME_LISTS_DIR: &str = "lists";

pub struct CheatContext {
    pub api: CheatApi<FileStore>,
    pub config: CheatConfig,
    pub paths: CheatPaths,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatPaths {
    pub data_dir: PathBuf,
    pub config_dir: PathBuf,
}

/// Picks the data and config directories: under `home` if given (lists in
/// `<home>/lists`, config in `<home>`), otherwise the
/// platform's per-user directories (`$XDG_DATA_HOME/cheatsheet` and
/// `$XDG_CONFIG_HOME/cheatsheet` on Linux).
pub fn resolve_paths(home: Option<&Path>) -> Result<CheatPaths> {
    if let Some(home) = home {
        return Ok(CheatPaths {
            data_dir: home.join(HOME_LISTS_DIR),
            config_dir: home.to_path_buf(),
        });
    }

    let proj_dirs = ProjectDirs::from("", "", "cheatsheet")
        .ok_or_else(|| CheatError::Config("could not determine the home directory".into()))?;
    Ok(CheatPaths {
        data_dir: proj_dirs.data_dir().to_path_buf(),
        config_dir: proj_dirs.config_dir().to_path_buf(),
    })
}

/// Builds the production context: resolves directories, reads the config and
/// wires a [`FileStore`] into the API.
pub fn initialize() -> Result<CheatContext> {
    let home = std::env::var_os(HOME_ENV).map(PathBuf::from);
    let mut paths = resolve_paths(home.as_deref())?;
    let config = CheatConfig::load(&paths.config_dir)?;

    if let Some(data_dir) = &config.data_dir {
        paths.data_dir = data_dir.clone();
    }
    debug!(
        data_dir = %paths.data_dir.display(),
        config_dir = %paths.config_dir.display(),
        "resolved cheatsheet directories"
    );

    let store = FileStore::new(paths.data_dir.clone(), config.default_list.clone());
    Ok(CheatContext {
        api: CheatApi::new(store),
        config,
        paths,
    })
}
