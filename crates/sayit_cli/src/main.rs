use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use itertools::Itertools;
use sayit::{
    get_message, get_message_with_meta, is_valid_category, list_categories, MessageOptions,
};

/// What the first argument asks for. Only the first argument may be a help or
/// list flag; everything after a type is scanned for the JSON flag only.
#[derive(Debug, PartialEq)]
enum Invocation {
    Help,
    Version,
    List,
    Say { category: String, json: bool },
}

impl Invocation {
    fn from_args(args: &[String]) -> Self {
        match args.first().map(String::as_str) {
            None | Some("--help" | "-h") => Invocation::Help,
            Some("--version" | "-V") => Invocation::Version,
            Some("--list" | "-l") => Invocation::List,
            Some(category) => Invocation::Say {
                category: category.to_string(),
                json: args[1..].iter().any(|a| a == "--json" || a == "-j"),
            },
        }
    }
}

fn available_types() -> String {
    list_categories().iter().join(", ")
}

fn command() -> Command {
    Command::new("just-say-it")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Just Say It - Micro-response API")
        .arg(
            Arg::new("type")
                .value_name("TYPE")
                .help("Type of response to print"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .short('j')
                .action(ArgAction::SetTrue)
                .help("Output as JSON"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .short('l')
                .action(ArgAction::SetTrue)
                .help("List all available types"),
        )
        .after_help(format!(
            "Types:\n  {}\n\n\
             Examples:\n  \
             just-say-it no\n  \
             just-say-it yes --json\n  \
             just-say-it joke\n  \
             just-say-it --list",
            available_types()
        ))
}

fn try_run<I, T>(argv: I, out: &mut impl Write, err: &mut impl Write) -> Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<String> = argv
        .into_iter()
        .skip(1)
        .map(|a| a.into().to_string_lossy().into_owned())
        .collect();

    let (category, json) = match Invocation::from_args(&args) {
        Invocation::Help => {
            write!(out, "{}", command().render_help())?;
            return Ok(0);
        }
        Invocation::Version => {
            write!(out, "{}", command().render_version())?;
            return Ok(0);
        }
        Invocation::List => {
            writeln!(out, "Available types:")?;
            for category in list_categories() {
                writeln!(out, "  - {category}")?;
            }
            return Ok(0);
        }
        Invocation::Say { category, json } => (category, json),
    };

    if !is_valid_category(&category) {
        writeln!(err, "Error: Invalid type \"{category}\"")?;
        writeln!(err, "Available types: {}", available_types())?;
        return Ok(1);
    }

    if json {
        let said = get_message_with_meta(MessageOptions::for_category(category))?;
        writeln!(out, "{}", serde_json::to_string_pretty(&said)?)?;
    } else {
        writeln!(out, "{}", get_message(Some(category.as_str()))?)?;
    }
    Ok(0)
}

fn run<I, T>(argv: I, out: &mut impl Write, err: &mut impl Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match try_run(argv, out, err) {
        Ok(code) => code,
        Err(e) => {
            let _ = writeln!(err, "Error: {e:#}");
            1
        }
    }
}

fn main() -> ExitCode {
    let code = run(
        std::env::args_os(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(code)
}
