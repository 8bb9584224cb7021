use std::{io, process};

use anyhow::Context;
use nix::sys::signal::{self, SigHandler, Signal};

use crate::{
    command::Outcome, config::Config, editor::LineEditor, shell::Shell, terminal::RawMode,
};

mod alias;
mod command;
mod config;
mod editor;
mod logger;
mod prompt;
mod rc;
mod shell;
mod terminal;
mod util;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    logger::init(config.log_level).context("failed to install logger")?;

    // Ctrl-C must never take the shell down
    unsafe { signal::signal(Signal::SIGINT, SigHandler::SigIgn) }
        .context("failed to ignore SIGINT")?;

    let mut shell = Shell::new(&config);

    if let Some(rc_path) = &config.rc_path {
        match rc::source_file(&mut shell, rc_path) {
            Ok(Outcome::Exit(code)) => process::exit(code),
            Ok(Outcome::Continue(_)) => {}
            Err(error) => eprintln!("psh: {error:#}"),
        }
    }

    let terminal = RawMode::enable().context("failed to put the terminal into raw mode")?;
    shell.attach_terminal(terminal);

    let mut editor = LineEditor::new(io::stdin().lock(), io::stdout(), config.max_line);
    let code = shell.run(&mut editor)?;

    // Restores the terminal before leaving
    drop(shell);
    process::exit(code)
}
