use std::{
    env, io,
    path::{Path, PathBuf},
};

pub(crate) const HOME_SYMBOL: char = '~';

#[derive(Debug)]
pub(crate) struct CwdCache {
    home: Option<PathBuf>,
    display: String,
}

impl CwdCache {
    pub(crate) fn new(home: Option<PathBuf>) -> Self {
        let mut cache = Self {
            home,
            display: String::new(),
        };
        if let Err(error) = cache.refresh() {
            log::warn!("failed to read the working directory: {error}");
            cache.display = String::from("?");
        }
        cache
    }

    pub(crate) fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    #[cfg(test)]
    pub(crate) fn display(&self) -> &str {
        &self.display
    }

    pub(crate) fn prompt(&self) -> String {
        format!("{}> ", self.display)
    }

    pub(crate) fn refresh(&mut self) -> io::Result<()> {
        let cwd = env::current_dir()?;
        self.display = abbreviate(&cwd, self.home.as_deref());
        log::trace!("cwd cache refreshed: {}", self.display);
        Ok(())
    }
}

/// Collapses a leading `home` into [`HOME_SYMBOL`], matching whole path components only.
pub(crate) fn abbreviate(cwd: &Path, home: Option<&Path>) -> String {
    let Some(rest) = home.and_then(|home| cwd.strip_prefix(home).ok()) else {
        return cwd.display().to_string();
    };

    if rest.as_os_str().is_empty() {
        HOME_SYMBOL.to_string()
    } else {
        format!("{}/{}", HOME_SYMBOL, rest.display())
    }
}
