use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
};

use anyhow::Context;

use crate::{
    command::Outcome,
    shell::Shell,
    util::{PshError, line_to_string},
};

pub(crate) fn source_file(shell: &mut Shell, path: &Path) -> Result<Outcome, PshError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(error) if error.kind() == io::ErrorKind::NotFound => {
            log::debug!("no startup file at {}", path.display());
            return Ok(Outcome::Continue(0));
        }
        Err(error) => {
            return Err(anyhow::Error::new(error)
                .context(format!("opening {}", path.display()))
                .into());
        }
    };

    log::debug!("sourcing {}", path.display());
    source(shell, BufReader::new(file), &path.display().to_string())
}

enum RcLine {
    Line,
    TooLong,
    Eof,
}

// Never buffers more than the line, a carriage return and the newline
fn read_line<R: BufRead>(reader: &mut R, buf: &mut Vec<u8>, max: usize) -> io::Result<RcLine> {
    buf.clear();
    let limit = max as u64 + 2;
    let read = reader.by_ref().take(limit).read_until(b'\n', buf)?;
    if read == 0 {
        return Ok(RcLine::Eof);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    } else if read as u64 == limit {
        reader.skip_until(b'\n')?;
        return Ok(RcLine::TooLong);
    }

    if buf.len() > max {
        return Ok(RcLine::TooLong);
    }
    Ok(RcLine::Line)
}

pub(crate) fn source<R: BufRead>(
    shell: &mut Shell,
    mut reader: R,
    origin: &str,
) -> Result<Outcome, PshError> {
    let max_line = shell.max_line();
    let mut last = Outcome::Continue(0);
    let mut buf = Vec::with_capacity(max_line + 2);

    for lineno in 1.. {
        let line = read_line(&mut reader, &mut buf, max_line)
            .with_context(|| format!("reading {origin}"))?;

        match line {
            RcLine::Eof => break,
            RcLine::TooLong => {
                let error = PshError::LineTooLong { max: max_line };
                eprintln!("{origin}:{lineno}: {error}, skipped");
                continue;
            }
            RcLine::Line => {}
        }

        last = shell.execute_line(&line_to_string(&buf));
        if let Outcome::Exit(_) = last {
            log::debug!("{origin}:{lineno}: exit requested");
            break;
        }
    }

    Ok(last)
}
