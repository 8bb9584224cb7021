use std::fmt;

use crate::util::PshError;

pub(crate) const ALIAS_CAPACITY: usize = 20;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Alias {
    pub name: String,
    pub value: String,
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "alias {}='{}'", self.name, self.value)
    }
}

#[derive(Debug)]
pub(crate) struct AliasTable {
    entries: Vec<Alias>,
    capacity: usize,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::with_capacity(ALIAS_CAPACITY)
    }
}

impl AliasTable {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Alias> {
        self.entries.iter().find(|alias| alias.name == name)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Alias> {
        self.entries.iter()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn add(&mut self, name: &str, value: &str) -> Result<(), PshError> {
        if self.get(name).is_some() {
            return Err(PshError::AliasExists(name.into()));
        }

        if self.entries.len() >= self.capacity {
            return Err(PshError::AliasTableFull {
                capacity: self.capacity,
            });
        }

        self.entries.push(Alias {
            name: name.into(),
            value: value.into(),
        });
        Ok(())
    }

    /// Only a full match of the first token expands, and the value is not scanned again.
    pub(crate) fn expand(&self, line: &str, max: usize) -> Result<String, PshError> {
        let trimmed = line.trim_start_matches(|c: char| c.is_ascii_whitespace());
        let start = line.len() - trimmed.len();
        let end = line[start..]
            .find(|c: char| c.is_ascii_whitespace())
            .map_or(line.len(), |offset| start + offset);

        let token = &line[start..end];
        if token.is_empty() {
            return Ok(line.to_string());
        }

        let Some(alias) = self.get(token) else {
            return Ok(line.to_string());
        };

        let expanded_len = line.len() - token.len() + alias.value.len();
        if expanded_len > max {
            return Err(PshError::LineTooLong { max });
        }

        log::debug!("expanding alias {} -> {}", alias.name, alias.value);

        let mut expanded = String::with_capacity(expanded_len);
        expanded.push_str(&line[..start]);
        expanded.push_str(&alias.value);
        expanded.push_str(&line[end..]);
        Ok(expanded)
    }
}
