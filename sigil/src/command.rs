use crate::terminal::Stylus;
use crate::{constants::*, subscriber::JsonLogger, utils::*};
use anyhow::{Context, Error};
use sigil_fol::{
    fresh::FreshNames,
    syntax::{Formula, Term},
    transform::{Substitute, Substitution, ToSkeleton},
};
use std::{fs, path::PathBuf};
use structopt::StructOpt;

/// Is the generator of the placeholders introduced by skeletons, read from its prefix.
struct Prefix(FreshNames);

impl std::str::FromStr for Prefix {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FreshNames::with_prefix(s)
            .map(Prefix)
            .map_err(|e| e.to_string())
    }
}

#[derive(StructOpt)]
enum ProcessCommand {
    #[structopt(
        name = "parse",
        about = "Parse formulae (or terms), one per line, and print them in canonical form"
    )]
    Parse {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input file; reads the standard input if missing"
        )]
        input: Option<PathBuf>,
        #[structopt(long = "term", help = "Read terms instead of formulae.")]
        term: bool,
    },
    #[structopt(
        name = "skeleton",
        about = "Print the propositional skeleton of each input formula"
    )]
    Skeleton {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input file; reads the standard input if missing"
        )]
        input: Option<PathBuf>,
        #[structopt(
            long = "prefix",
            default_value = "z",
            help = "Prefix of the generated placeholders"
        )]
        prefix: Prefix,
    },
    #[structopt(
        name = "substitute",
        about = "Apply a capture-avoiding substitution on each input formula"
    )]
    Substitute {
        #[structopt(
            short = "i",
            long = "input",
            parse(from_os_str),
            help = "Path to the input file; reads the standard input if missing"
        )]
        input: Option<PathBuf>,
        #[structopt(
            short = "s",
            long = "sub",
            required = true,
            number_of_values = 1,
            help = "A pair NAME=TERM, mapping a variable or a constant to a term"
        )]
        pairs: Vec<String>,
        #[structopt(
            short = "x",
            long = "forbid",
            number_of_values = 1,
            help = "A variable that the substitution must not introduce"
        )]
        forbidden: Vec<String>,
    },
}

impl ProcessCommand {
    fn run(self, stylus: &Stylus) -> Result<(), Error> {
        match self {
            ProcessCommand::Parse { input, term } => {
                let contents = read_input(input.as_deref())?;
                let (mut succeeded, mut failed) = (0, 0);

                for (i, line) in input_lines(&contents).enumerate() {
                    let result = if term {
                        line.parse::<Term>().map(|t| {
                            let vars = format!("variables: {}", pretty_set(t.variables()));
                            (t.to_string(), vec![vars])
                        })
                    } else {
                        line.parse::<Formula>().map(|f| {
                            let free = pretty_set(f.free_variables());
                            (f.to_string(), vec![format!("free variables: {}", free)])
                        })
                    };

                    match result {
                        Ok((canonical, details)) => {
                            succeeded += 1;
                            print_result(stylus, i + 1, &canonical, &details)?;
                        }
                        Err(e) => {
                            failed += 1;
                            print_error(stylus, i + 1, line, &e)?;
                        }
                    }
                }

                print_summary(stylus, succeeded, failed)?;
                Ok(())
            }
            ProcessCommand::Skeleton { input, prefix } => {
                let contents = read_input(input.as_deref())?;
                let (mut succeeded, mut failed) = (0, 0);
                // shared by the whole input so that no placeholder is issued twice
                let Prefix(mut names) = prefix;

                for (i, line) in input_lines(&contents).enumerate() {
                    match line.parse::<Formula>() {
                        Ok(formula) => {
                            succeeded += 1;
                            let (skeleton, map) = formula.propositional_skeleton_with(&mut names);
                            let details: Vec<_> = map
                                .iter()
                                .map(|(p, f)| format!("{} := {}", p, f))
                                .collect();
                            print_result(stylus, i + 1, &skeleton.to_string(), &details)?;
                        }
                        Err(e) => {
                            failed += 1;
                            print_error(stylus, i + 1, line, &e)?;
                        }
                    }
                }

                print_summary(stylus, succeeded, failed)?;
                Ok(())
            }
            ProcessCommand::Substitute {
                input,
                pairs,
                forbidden,
            } => {
                let sub = Substitution::parse_pairs(&pairs)
                    .context("failed to read the substitution")?;
                let forbidden = parse_forbidden(&forbidden)?;
                let contents = read_input(input.as_deref())?;
                let (mut succeeded, mut failed) = (0, 0);

                for (i, line) in input_lines(&contents).enumerate() {
                    let result = line
                        .parse::<Formula>()
                        .map_err(Error::new)
                        .and_then(|f| f.substitute(&sub, &forbidden).map_err(Error::new));

                    match result {
                        Ok(formula) => {
                            succeeded += 1;
                            print_result(stylus, i + 1, &formula.to_string(), &[])?;
                        }
                        Err(e) => {
                            failed += 1;
                            print_error(stylus, i + 1, line, &e)?;
                        }
                    }
                }

                print_summary(stylus, succeeded, failed)?;
                Ok(())
            }
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "sigil",
    about = "A tool for parsing, substituting into and abstracting first-order formulae"
)]
#[structopt(setting = structopt::clap::AppSettings::ColoredHelp)]
pub(super) struct Command {
    #[structopt(subcommand)]
    command: ProcessCommand,
    #[structopt(long = "no-color", help = "Disable colored output.")]
    no_color: bool,
    #[structopt(
        short = "l",
        long = "log",
        parse(from_os_str),
        help = "Path to the log file."
    )]
    log: Option<PathBuf>,
}

impl Command {
    pub fn run(self) -> Result<(), Error> {
        let process = self.command;
        let stylus = stylus(!self.no_color);

        if !stylus.is_plain() {
            stylus.set(STYLE_LOGO)?;
            println!("{}", ASCII_ART);
        }

        let run = || process.run(&stylus);

        if let Some(log) = self.log {
            let log = if log.as_os_str().is_empty() {
                PathBuf::from(DEFAULT_JSON_LOG_FILE)
            } else {
                log
            };
            let file = fs::File::create(&log)
                .with_context(|| format!("cannot create the log file `{}`", log.display()))?;
            let logger = JsonLogger::new(file);
            tracing::subscriber::with_default(logger, run)
        } else {
            run()
        }
    }
}
