use std::io::{self, Write};

use crate::{
    alias::AliasTable,
    command::Outcome,
    util::{Argv, PshError},
};

fn list_aliases<W: Write>(aliases: &AliasTable, out: &mut W) -> io::Result<()> {
    for alias in aliases.iter() {
        writeln!(out, "{alias}")?;
    }
    out.flush()
}

pub(crate) fn handle_alias(args: &Argv, aliases: &mut AliasTable) -> Result<Outcome, PshError> {
    let Some(name) = args.get(1) else {
        list_aliases(aliases, &mut io::stdout().lock())
            .map_err(|error| PshError::InternalError(error.into()))?;
        return Ok(Outcome::Continue(0));
    };

    if aliases.get(name).is_some() {
        return Err(PshError::AliasExists(name.into()));
    }

    let values = &args.as_slice()[2..];
    if values.is_empty() {
        return Err(PshError::MissingAliasValue(name.into()));
    }

    aliases.add(name, &values.join(" "))?;
    Ok(Outcome::Continue(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::tokenize;

    fn run_alias(input: &str, aliases: &mut AliasTable) -> Result<Outcome, PshError> {
        handle_alias(&tokenize(input).unwrap(), aliases)
    }

    #[test]
    fn defines_with_joined_value() {
        let mut aliases = AliasTable::default();
        let outcome = run_alias("alias foo   bar  baz", &mut aliases).unwrap();
        assert_eq!(outcome, Outcome::Continue(0));
        assert_eq!(aliases.get("foo").unwrap().value, "bar baz");
    }

    #[test]
    fn second_definition_is_rejected() {
        let mut aliases = AliasTable::default();
        run_alias("alias foo bar", &mut aliases).unwrap();

        let err = run_alias("alias foo bar", &mut aliases).unwrap_err();
        assert!(matches!(err, PshError::AliasExists(_)));
        assert!(err.to_string().contains("already exists"));
        assert_eq!(aliases.get("foo").unwrap().value, "bar");
    }

    #[test]
    fn missing_value_is_rejected() {
        let mut aliases = AliasTable::default();
        let err = run_alias("alias foo", &mut aliases).unwrap_err();
        assert!(matches!(err, PshError::MissingAliasValue(ref name) if name == "foo"));
        assert_eq!(aliases.len(), 0);
    }

    #[test]
    fn full_table_is_reported() {
        let mut aliases = AliasTable::with_capacity(1);
        run_alias("alias a b", &mut aliases).unwrap();
        let err = run_alias("alias c d", &mut aliases).unwrap_err();
        assert!(matches!(err, PshError::AliasTableFull { capacity: 1 }));
        assert_eq!(aliases.len(), 1);
    }

    #[test]
    fn bare_alias_lists_without_changes() {
        let mut aliases = AliasTable::default();
        run_alias("alias ll ls -l", &mut aliases).unwrap();
        assert_eq!(run_alias("alias", &mut aliases).unwrap(), Outcome::Continue(0));
        assert_eq!(aliases.len(), 1);
    }

    #[test]
    fn listing_format() {
        let mut aliases = AliasTable::default();
        aliases.add("ll", "ls -l").unwrap();
        aliases.add("g", "git").unwrap();

        let mut out = Vec::new();
        list_aliases(&aliases, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "alias ll='ls -l'\nalias g='git'\n"
        );
    }
}
