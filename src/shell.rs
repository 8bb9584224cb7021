use std::io::{Read, Write};

use crate::{
    alias::AliasTable,
    command::{Builtin, Command, Outcome},
    config::Config,
    editor::{Input, LineEditor},
    prompt::CwdCache,
    terminal::RawMode,
    util::{PshError, tokenize},
};

#[derive(Debug)]
pub(crate) struct State {
    pub aliases: AliasTable,
    pub cwd: CwdCache,
}

pub(crate) struct Shell {
    state: State,
    max_line: usize,
    terminal: Option<RawMode>,
}

impl Shell {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            state: State {
                aliases: AliasTable::with_capacity(config.alias_capacity),
                cwd: CwdCache::new(config.home.clone()),
            },
            max_line: config.max_line,
            terminal: None,
        }
    }

    pub(crate) fn attach_terminal(&mut self, terminal: Option<RawMode>) {
        self.terminal = terminal;
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &State {
        &self.state
    }

    pub(crate) fn max_line(&self) -> usize {
        self.max_line
    }

    pub(crate) fn prompt(&self) -> String {
        self.state.cwd.prompt()
    }

    pub(crate) fn execute_line(&mut self, line: &str) -> Outcome {
        let result = Command::parse(line, &self.state.aliases, self.max_line)
            .and_then(|cmd| cmd.run(&mut self.state, self.terminal.as_ref()));

        match result {
            Ok(outcome) => outcome,
            Err(PshError::Nop) => Outcome::Continue(0),
            Err(error) => {
                eprintln!("{error}");
                Outcome::Continue(error.status())
            }
        }
    }

    pub(crate) fn run<R: Read, W: Write>(
        &mut self,
        editor: &mut LineEditor<R, W>,
    ) -> Result<i32, PshError> {
        loop {
            let outcome = match editor.read_line(&self.prompt())? {
                Input::Line(line) => self.execute_line(&line),
                Input::Eof => {
                    let args = tokenize(Builtin::Exit.name())?;
                    Builtin::Exit.execute(&args, &mut self.state)?
                }
            };

            if let Outcome::Exit(code) = outcome {
                return Ok(code);
            }
        }
    }
}
