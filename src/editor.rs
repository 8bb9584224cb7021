use std::io::{self, Read, Write};

use crate::util::{LineBuffer, PshError, line_to_string};

const CTRL_C: u8 = 0x03;
const CTRL_D: u8 = 0x04;
const BACKSPACE: u8 = 0x08;
const CTRL_L: u8 = 0x0c;
const CTRL_U: u8 = 0x15;
const DELETE: u8 = 0x7f;

const ERASE: &[u8] = b"\x08 \x08";
const CLEAR_SCREEN: &[u8] = b"\x1b[2J\x1b[H";
const BELL: &[u8] = b"\x07";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Key {
    Char(u8),
    Accept,
    Backspace,
    Interrupt,
    EndOfInput,
    ClearScreen,
    KillLine,
    Ignored,
}

impl Key {
    pub(crate) fn decode(byte: u8) -> Key {
        match byte {
            b'\n' | b'\r' => Key::Accept,
            BACKSPACE | DELETE => Key::Backspace,
            CTRL_C => Key::Interrupt,
            CTRL_D => Key::EndOfInput,
            CTRL_L => Key::ClearScreen,
            CTRL_U => Key::KillLine,
            0x20..=0x7e => Key::Char(byte),
            _ => Key::Ignored,
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
pub(crate) enum Input {
    Line(String),
    Eof,
}

/// Ctrl-D only ends input on an empty line and is ignored otherwise. If the
/// stream closes mid-line, the partial line is accepted and the next read
/// reports [`Input::Eof`].
pub(crate) struct LineEditor<R, W> {
    input: R,
    output: W,
    buf: LineBuffer,
}

impl<R: Read, W: Write> LineEditor<R, W> {
    pub(crate) fn new(input: R, output: W, max_line: usize) -> Self {
        Self {
            input,
            output,
            buf: LineBuffer::new(max_line),
        }
    }

    #[cfg(test)]
    pub(crate) fn output(&self) -> &W {
        &self.output
    }

    pub(crate) fn read_line(&mut self, prompt: &str) -> Result<Input, PshError> {
        self.buf.clear();
        self.write(prompt.as_bytes())?;

        loop {
            let Some(byte) = self.next_byte()? else {
                if self.buf.is_empty() {
                    self.write(b"exit\n")?;
                    return Ok(Input::Eof);
                }
                self.write(b"\n")?;
                return Ok(Input::Line(line_to_string(&self.buf.finish())));
            };

            match Key::decode(byte) {
                Key::Char(c) => match self.buf.push(c) {
                    Ok(()) => self.write(&[c])?,
                    Err(error) => {
                        log::debug!("dropping input: {error}");
                        self.write(BELL)?;
                    }
                },
                Key::Accept => {
                    self.write(b"\n")?;
                    return Ok(Input::Line(line_to_string(&self.buf.finish())));
                }
                Key::Backspace => {
                    if self.buf.pop() {
                        self.write(ERASE)?;
                    }
                }
                Key::Interrupt => {
                    self.buf.clear();
                    self.write(b"^C\n")?;
                    self.write(prompt.as_bytes())?;
                }
                Key::EndOfInput => {
                    if self.buf.is_empty() {
                        self.write(b"exit\n")?;
                        return Ok(Input::Eof);
                    }
                }
                Key::ClearScreen => {
                    self.buf.clear();
                    self.write(CLEAR_SCREEN)?;
                    self.write(prompt.as_bytes())?;
                }
                Key::KillLine => {
                    for _ in 0..self.buf.len() {
                        self.write(ERASE)?;
                    }
                    self.buf.clear();
                }
                Key::Ignored => {}
            }
        }
    }

    fn next_byte(&mut self) -> Result<Option<u8>, PshError> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(error) if error.kind() == io::ErrorKind::Interrupted => continue,
                Err(error) => return Err(anyhow::Error::new(error).context("reading input").into()),
            }
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), PshError> {
        self.output
            .write_all(bytes)
            .and_then(|()| self.output.flush())
            .map_err(|error| anyhow::Error::new(error).context("writing to terminal").into())
    }
}
