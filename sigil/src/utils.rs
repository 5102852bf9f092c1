use crate::{
    constants::*,
    terminal::{Style, Stylus},
};
use anyhow::{Context, Error};
use itertools::Itertools;
use sigil_fol::syntax::V;
use std::{
    collections::HashSet,
    fs,
    io::{stdin, Read},
    path::Path,
};

/// Returns a stylus with the styles of the CLI, or a plain one if `color` is false.
pub(crate) fn stylus(color: bool) -> Stylus {
    if !color {
        return Stylus::Plain;
    }
    Stylus::colored(vec![
        (STYLE_LOGO, Style::new(59).with(term::Attr::Dim)),
        (STYLE_INFO, Style::new(59).with(term::Attr::Bold)),
        (STYLE_FORMULA, Style::new(252)),
        (STYLE_DETAIL, Style::new(246)),
        (
            STYLE_ERROR,
            Style::new(term::color::BRIGHT_RED).with(term::Attr::Bold),
        ),
    ])
}

/// Reads the whole input, from `input` if given or from the standard input otherwise.
pub(crate) fn read_input(input: Option<&Path>) -> Result<String, Error> {
    match input {
        Some(path) => {
            let mut f = fs::File::open(path)
                .with_context(|| format!("failed to find the input file `{}`", path.display()))?;
            let mut contents = String::new();
            f.read_to_string(&mut contents)
                .context("failed to read the input file")?;
            Ok(contents)
        }
        None => {
            let mut buf: Vec<u8> = Vec::new();
            stdin()
                .read_to_end(&mut buf)
                .context("failed to read the standard input")?;
            Ok(String::from_utf8(buf)?)
        }
    }
}

/// Returns the non-blank lines of `contents` with surrounding whitespace removed.
pub(crate) fn input_lines(contents: &str) -> impl Iterator<Item = &str> {
    contents.lines().map(str::trim).filter(|l| !l.is_empty())
}

pub(crate) fn parse_forbidden(names: &[String]) -> Result<HashSet<V>, Error> {
    names
        .iter()
        .map(|n| V::new(n.as_str()).context("invalid forbidden variable"))
        .collect()
}

/// Prints a set of symbols in sorted order, e.g., `{x, y}`.
pub(crate) fn pretty_set<'a, T, I>(items: I) -> String
where
    T: std::fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    format!(
        "{{{}}}",
        items.into_iter().map(|i| i.to_string()).sorted().join(", ")
    )
}

pub(crate) fn print_result(
    stylus: &Stylus,
    line: usize,
    main: &str,
    details: &[String],
) -> Result<(), Error> {
    stylus.set(STYLE_INFO)?;
    print!("{}. ", line);
    stylus.set(STYLE_FORMULA)?;
    println!("{}", main);
    stylus.set(STYLE_DETAIL)?;
    details.iter().for_each(|d| println!("   {}", d));
    Ok(())
}

pub(crate) fn print_error(
    stylus: &Stylus,
    line: usize,
    source: &str,
    error: &dyn std::fmt::Display,
) -> Result<(), Error> {
    stylus.set(STYLE_INFO)?;
    print!("{}. ", line);
    stylus.set(STYLE_ERROR)?;
    println!("{}", source);
    println!("   {}", error);
    Ok(())
}

pub(crate) fn print_summary(
    stylus: &Stylus,
    succeeded: usize,
    failed: usize,
) -> Result<(), Error> {
    println!();
    stylus.set(STYLE_INFO)?;
    println!("{} succeeded and {} failed.", succeeded, failed);
    stylus.reset()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylus() {
        assert!(stylus(false).is_plain());
        assert!(print_summary(&stylus(false), 1, 0).is_ok());
    }

    #[test]
    fn test_input_lines() {
        let lines: Vec<_> = input_lines("R(x)\n\n  x=y \n\t\n~Q()").collect();
        assert_eq!(vec!["R(x)", "x=y", "~Q()"], lines);
    }

    #[test]
    fn test_parse_forbidden() {
        let forbidden = parse_forbidden(&["x".to_string(), "y1".to_string()]).unwrap();
        assert_eq!("{x, y1}", pretty_set(&forbidden));
        assert!(parse_forbidden(&["c".to_string()]).is_err());
    }

    #[test]
    fn test_pretty_set() {
        let empty: Vec<String> = Vec::new();
        assert_eq!("{}", pretty_set(&empty));
        assert_eq!(
            "{a, b, c}",
            pretty_set(&vec!["c".to_string(), "a".to_string(), "b".to_string()])
        );
    }
}
