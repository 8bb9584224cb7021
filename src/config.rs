use std::{env, path::PathBuf};

use log::LevelFilter;

use crate::{alias::ALIAS_CAPACITY, util::MAX_LINE};

pub(crate) const RC_FILE: &str = ".pshrc";

#[derive(Clone, Debug)]
pub(crate) struct Config {
    pub home: Option<PathBuf>,
    pub rc_path: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub max_line: usize,
    pub alias_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home: None,
            rc_path: None,
            log_level: LevelFilter::Warn,
            max_line: MAX_LINE,
            alias_capacity: ALIAS_CAPACITY,
        }
    }
}

impl Config {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let home = lookup("HOME")
            .filter(|home| !home.is_empty())
            .map(PathBuf::from);

        let rc_path = match lookup("PSH_RC").filter(|path| !path.is_empty()) {
            Some(path) => Some(PathBuf::from(path)),
            None => home.as_ref().map(|home| home.join(RC_FILE)),
        };

        let log_level = lookup("PSH_LOG")
            .and_then(|level| level.parse().ok())
            .unwrap_or(LevelFilter::Warn);

        Self {
            home,
            rc_path,
            log_level,
            ..Self::default()
        }
    }
}
