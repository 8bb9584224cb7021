use crate::{
    command::Outcome,
    util::{Argv, PshError},
};

pub(crate) fn handle_exit(_args: &Argv) -> Result<Outcome, PshError> {
    Ok(Outcome::Exit(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tokenize;

    #[test]
    fn exits_with_zero() {
        let args = tokenize("exit").unwrap();
        assert_eq!(handle_exit(&args).unwrap(), Outcome::Exit(0));
    }

    #[test]
    fn with_args_ignored() {
        let args = tokenize("exit 3").unwrap();
        assert_eq!(handle_exit(&args).unwrap(), Outcome::Exit(0));
    }
}
