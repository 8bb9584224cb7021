use std::{
    io,
    os::unix::process::{CommandExt, ExitStatusExt},
    process::{self, ExitStatus},
};

use nix::sys::signal::{self, SigHandler, Signal};

use crate::{
    command::CommandType,
    terminal::RawMode,
    util::{Argv, PshError},
};

const SIGNAL_STATUS_BASE: i32 = 128;

fn exit_code(status: ExitStatus) -> i32 {
    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => SIGNAL_STATUS_BASE + signal,
        (None, None) => 1,
    }
}

fn spawn_and_wait(name: &str, args: &Argv) -> io::Result<ExitStatus> {
    let mut command = process::Command::new(name);
    command.args(&args.as_slice()[1..]);

    // The shell ignores SIGINT; the child gets the default back so Ctrl-C stops it
    unsafe {
        command.pre_exec(|| {
            signal::signal(Signal::SIGINT, SigHandler::SigDfl)?;
            Ok(())
        });
    }

    command.spawn()?.wait()
}

pub(crate) fn handle_executable(
    name: &str,
    args: &Argv,
    terminal: Option<&RawMode>,
) -> Result<i32, PshError> {
    let into_psh_err = |error: io::Error| PshError::CommandError {
        type_: CommandType::Executable(name.into()),
        msg: match error.kind() {
            io::ErrorKind::NotFound => "command not found".into(),
            _ => error.to_string(),
        },
        status: error.raw_os_error(),
    };

    if let Some(terminal) = terminal {
        terminal
            .suspend()
            .map_err(|errno| into_psh_err(io::Error::from(errno)))?;
    }

    let status = spawn_and_wait(name, args);

    if let Some(terminal) = terminal {
        if let Err(error) = terminal.resume() {
            log::error!("failed to re-enter raw mode: {error}");
        }
    }

    let code = exit_code(status.map_err(into_psh_err)?);
    log::debug!("{name} exited with status {code}");
    Ok(code)
}
