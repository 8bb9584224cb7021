use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    command::{Builtin, CommandType, Outcome},
    prompt::{CwdCache, HOME_SYMBOL},
    util::{Argv, PshError},
};

fn cd_error(msg: impl Into<String>, status: Option<i32>) -> PshError {
    PshError::CommandError {
        type_: CommandType::Builtin(Builtin::Cd),
        msg: msg.into(),
        status,
    }
}

fn target_dir(arg: Option<&str>, home: Option<&Path>) -> Result<PathBuf, PshError> {
    let home_dir = || {
        home.map(Path::to_path_buf)
            .ok_or_else(|| cd_error("HOME not set", Some(1)))
    };

    match arg {
        None => home_dir(),
        Some(arg) => match arg.strip_prefix(HOME_SYMBOL) {
            Some("") => home_dir(),
            Some(rest) if rest.starts_with('/') => Ok(home_dir()?.join(&rest[1..])),
            _ => Ok(PathBuf::from(arg)),
        },
    }
}

pub(crate) fn handle_cd(args: &Argv, cwd: &mut CwdCache) -> Result<Outcome, PshError> {
    if args.len() > 2 {
        return Err(cd_error("too many arguments", Some(1)));
    }

    let target = target_dir(args.get(1), cwd.home())?;

    env::set_current_dir(&target).map_err(|error| {
        cd_error(
            format!("{}: {}", target.display(), error),
            error.raw_os_error(),
        )
    })?;

    cwd.refresh()
        .map_err(|error| cd_error(error.to_string(), error.raw_os_error()))?;

    Ok(Outcome::Continue(0))
}
