use std::io::{self, IsTerminal};

use nix::sys::termios::{self, InputFlags, LocalFlags, SetArg, SpecialCharacterIndices, Termios};

/// Output processing stays on so `\n` still renders as a full newline.
pub(crate) struct RawMode {
    original: Termios,
    raw: Termios,
}

impl RawMode {
    pub(crate) fn enable() -> nix::Result<Option<Self>> {
        if !io::stdin().is_terminal() {
            return Ok(None);
        }

        let original = termios::tcgetattr(io::stdin())?;
        let mut raw = original.clone();
        raw.local_flags &= !(LocalFlags::ICANON
            | LocalFlags::ECHO
            | LocalFlags::ISIG
            | LocalFlags::IEXTEN);
        raw.input_flags &= !InputFlags::IXON;
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 1;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 0;

        termios::tcsetattr(io::stdin(), SetArg::TCSAFLUSH, &raw)?;
        log::debug!("terminal switched to raw mode");
        Ok(Some(Self { original, raw }))
    }

    pub(crate) fn suspend(&self) -> nix::Result<()> {
        termios::tcsetattr(io::stdin(), SetArg::TCSADRAIN, &self.original)
    }

    pub(crate) fn resume(&self) -> nix::Result<()> {
        termios::tcsetattr(io::stdin(), SetArg::TCSADRAIN, &self.raw)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        if let Err(error) = self.suspend() {
            log::error!("failed to restore terminal mode: {error}");
        }
    }
}
