use anyhow::Error;
use bytes::{BufMut, Bytes, BytesMut};
use thiserror::Error;

use crate::command::CommandType;

pub(crate) const MAX_LINE: usize = 1024;

pub(crate) const ARGV_CHUNK_SZ: usize = 10;

#[derive(Error, Debug)]
pub(crate) enum PshError {
    #[error("line exceeds the maximum length of {max} bytes")]
    LineTooLong { max: usize },
    #[error("alias: \"{0}\" already exists")]
    AliasExists(String),
    #[error("alias: no value specified for \"{0}\"")]
    MissingAliasValue(String),
    #[error("alias: table full, no room for more than {capacity} aliases")]
    AliasTableFull { capacity: usize },
    #[error("{type_}: {msg}")]
    CommandError {
        type_: CommandType,
        msg: String,
        status: Option<i32>,
    },
    #[error("{0:#}")]
    InternalError(#[from] Error),
    #[error("")]
    Nop,
}

impl PshError {
    pub(crate) fn status(&self) -> i32 {
        match self {
            PshError::CommandError {
                status: Some(status),
                ..
            } => *status,
            PshError::Nop => 0,
            _ => 1,
        }
    }
}

#[derive(Debug)]
pub(crate) struct LineBuffer {
    buf: BytesMut,
    max: usize,
}

impl LineBuffer {
    pub(crate) fn new(max: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(max),
            max,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub(crate) fn push(&mut self, byte: u8) -> Result<(), PshError> {
        if self.buf.len() >= self.max {
            return Err(PshError::LineTooLong { max: self.max });
        }
        self.buf.put_u8(byte);
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> bool {
        match self.buf.len() {
            0 => false,
            len => {
                self.buf.truncate(len - 1);
                true
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.buf.clear();
    }

    pub(crate) fn finish(&mut self) -> Bytes {
        self.buf.split().freeze()
    }
}

/// Storage grows in chunks of [`ARGV_CHUNK_SZ`] and always keeps a free slot
/// past the last argument, so `get(len())` returns `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Argv {
    args: Vec<String>,
    slots: usize,
}

impl Argv {
    pub(crate) fn new() -> Self {
        Self {
            args: Vec::with_capacity(ARGV_CHUNK_SZ),
            slots: ARGV_CHUNK_SZ,
        }
    }

    pub(crate) fn push(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());

        // Ran out of argv slots, keep one free for the terminator
        if self.args.len() == self.slots - 1 {
            self.slots += ARGV_CHUNK_SZ;
            self.args.reserve_exact(self.slots - self.args.len());
            log::trace!("argv grown to {} slots", self.slots);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.args.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> usize {
        self.slots
    }

    pub(crate) fn as_slice(&self) -> &[String] {
        &self.args
    }
}

impl PartialEq<Vec<&str>> for Argv {
    fn eq(&self, other: &Vec<&str>) -> bool {
        self.args.len() == other.len() && self.args.iter().zip(other).all(|(a, b)| a == b)
    }
}

pub(crate) fn tokenize(line: &str) -> Result<Argv, PshError> {
    let mut argv = Argv::new();
    for token in line.split_ascii_whitespace() {
        argv.push(token);
    }

    if argv.is_empty() {
        return Err(PshError::Nop);
    }

    Ok(argv)
}

pub(crate) fn line_to_string(line: &[u8]) -> String {
    String::from_utf8_lossy(line).into_owned()
}
