mod handlers;

use std::fmt;

use crate::{
    alias::AliasTable,
    shell::State,
    terminal::RawMode,
    util::{Argv, PshError, tokenize},
};

use self::handlers::{handle_alias, handle_cd, handle_executable, handle_exit};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Builtin {
    Alias,
    Cd,
    Exit,
}

pub(crate) const BUILTINS: [(&str, Builtin); 3] = [
    ("alias", Builtin::Alias),
    ("cd", Builtin::Cd),
    ("exit", Builtin::Exit),
];

impl Builtin {
    pub(crate) fn lookup(name: &str) -> Option<Builtin> {
        BUILTINS
            .iter()
            .find(|(builtin, _)| *builtin == name)
            .map(|(_, builtin)| *builtin)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Builtin::Alias => "alias",
            Builtin::Cd => "cd",
            Builtin::Exit => "exit",
        }
    }

    pub(crate) fn execute(self, args: &Argv, state: &mut State) -> Result<Outcome, PshError> {
        log::debug!("dispatching builtin {}", self.name());
        match self {
            Builtin::Alias => handle_alias(args, &mut state.aliases),
            Builtin::Cd => handle_cd(args, &mut state.cwd),
            Builtin::Exit => handle_exit(args),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum CommandType {
    Builtin(Builtin),
    Executable(String),
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandType::Builtin(builtin) => write!(f, "{}", builtin.name()),
            CommandType::Executable(name) => write!(f, "{}", name),
        }
    }
}

impl CommandType {
    pub(crate) fn from_str(name: &str) -> Self {
        match Builtin::lookup(name) {
            Some(builtin) => CommandType::Builtin(builtin),
            None => CommandType::Executable(name.to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    Continue(i32),
    Exit(i32),
}

#[derive(Debug)]
pub(crate) struct Command {
    pub type_: CommandType,
    pub args: Argv,
}

impl Command {
    pub(crate) fn parse(
        line: &str,
        aliases: &AliasTable,
        max_line: usize,
    ) -> Result<Command, PshError> {
        let expanded = aliases.expand(line, max_line)?;
        let args = tokenize(&expanded)?;

        // Read the name of the command from the tokenized args
        let Some(name) = args.get(0) else {
            return Err(PshError::Nop);
        };

        Ok(Command {
            type_: CommandType::from_str(name),
            args,
        })
    }

    pub(crate) fn run(
        &self,
        state: &mut State,
        terminal: Option<&RawMode>,
    ) -> Result<Outcome, PshError> {
        match self.type_ {
            CommandType::Builtin(builtin) => builtin.execute(&self.args, state),
            CommandType::Executable(ref name) => {
                handle_executable(name, &self.args, terminal).map(Outcome::Continue)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::MAX_LINE;

    // Test helper to simplify command creation
    fn parse_cmd(input: &str) -> Result<Command, PshError> {
        Command::parse(input, &AliasTable::default(), MAX_LINE)
    }

    mod builtin_table {
        use super::*;

        #[test]
        fn lookup_known_names() {
            assert_eq!(Builtin::lookup("alias"), Some(Builtin::Alias));
            assert_eq!(Builtin::lookup("cd"), Some(Builtin::Cd));
            assert_eq!(Builtin::lookup("exit"), Some(Builtin::Exit));
        }

        #[test]
        fn lookup_is_exact() {
            assert_eq!(Builtin::lookup("ls"), None);
            assert_eq!(Builtin::lookup("cdx"), None);
            assert_eq!(Builtin::lookup("Exit"), None);
            assert_eq!(Builtin::lookup(""), None);
        }

        #[test]
        fn names_match_table() {
            for (name, builtin) in BUILTINS {
                assert_eq!(builtin.name(), name);
            }
        }
    }

    mod command_type {
        use super::*;

        #[test]
        fn builtin_names() {
            assert_eq!(CommandType::from_str("cd"), CommandType::Builtin(Builtin::Cd));
            assert_eq!(
                CommandType::from_str("alias"),
                CommandType::Builtin(Builtin::Alias)
            );
        }

        #[test]
        fn unknown_names_are_executables() {
            assert_eq!(
                CommandType::from_str("ls"),
                CommandType::Executable("ls".into())
            );
        }

        #[test]
        fn display_formatting() {
            assert_eq!(CommandType::Builtin(Builtin::Exit).to_string(), "exit");
            assert_eq!(CommandType::Builtin(Builtin::Cd).to_string(), "cd");
            assert_eq!(CommandType::Executable("grep".into()).to_string(), "grep");
        }
    }

    mod command_parsing {
        use super::*;

        #[test]
        fn parse_exit() {
            let cmd = parse_cmd("exit").unwrap();
            assert_eq!(cmd.type_, CommandType::Builtin(Builtin::Exit));
            assert_eq!(cmd.args, vec!["exit"]);
        }

        #[test]
        fn parse_executable_with_args() {
            let cmd = parse_cmd("ls -l /tmp").unwrap();
            assert_eq!(cmd.type_, CommandType::Executable("ls".into()));
            assert_eq!(cmd.args, vec!["ls", "-l", "/tmp"]);
        }

        #[test]
        fn empty_input_returns_nop() {
            assert!(matches!(parse_cmd(""), Err(PshError::Nop)));
        }

        #[test]
        fn whitespace_only_returns_nop() {
            assert!(matches!(parse_cmd("  \t "), Err(PshError::Nop)));
        }

        #[test]
        fn multiple_spaces_handled() {
            let cmd = parse_cmd("echo    hello    world").unwrap();
            assert_eq!(cmd.args, vec!["echo", "hello", "world"]);
        }

        #[test]
        fn alias_expands_before_classification() {
            let mut aliases = AliasTable::default();
            aliases.add("bye", "exit").unwrap();
            aliases.add("ll", "ls -l").unwrap();

            let cmd = Command::parse("bye", &aliases, MAX_LINE).unwrap();
            assert_eq!(cmd.type_, CommandType::Builtin(Builtin::Exit));

            let cmd = Command::parse("ll /tmp", &aliases, MAX_LINE).unwrap();
            assert_eq!(cmd.type_, CommandType::Executable("ls".into()));
            assert_eq!(cmd.args, vec!["ls", "-l", "/tmp"]);
        }

        #[test]
        fn alias_growth_past_max_is_an_error() {
            let mut aliases = AliasTable::default();
            aliases.add("x", "a-very-long-command").unwrap();
            let result = Command::parse("x y", &aliases, 8);
            assert!(matches!(result, Err(PshError::LineTooLong { max: 8 })));
        }
    }
}
