use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use lector::{Config, Result, Session};

use crate::{commands, init};

const HELP: &str = "\
Type a word to search the text and see completions for it.
  :load <file>   load another text file
  :help          show this help
  :quit          exit";

/// One parsed line of shell input.
#[derive(Debug, PartialEq)]
enum Input<'a> {
    Query(&'a str),
    Load(&'a str),
    Help,
    Quit,
    Unknown(&'a str),
    Blank,
}

fn parse(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Input::Blank;
    }

    let Some(cmd) = line.strip_prefix(':') else {
        return Input::Query(line);
    };

    let (name, arg) = match cmd.split_once(char::is_whitespace) {
        Some((n, a)) => (n, a.trim()),
        None => (cmd, ""),
    };
    match name {
        "load" | "l" if !arg.is_empty() => Input::Load(arg),
        "help" | "h" => Input::Help,
        "quit" | "q" | "exit" => Input::Quit,
        _ => Input::Unknown(cmd),
    }
}

/// Run the interactive prompt until `:quit` or end of input.
pub fn run(file: Option<&Path>, cfg: &Config) -> Result<()> {
    let mut session = match file {
        Some(f) => Some(init::load_indexed(f)?),
        None => None,
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    println!("{}", HELP);

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        match parse(&line) {
            Input::Blank => {}
            Input::Help => println!("{}", HELP),
            Input::Quit => return Ok(()),
            Input::Unknown(c) => println!("unknown command ':{}'. Type :help.", c),

            // A failed load keeps the current text.
            Input::Load(path) => match init::load_indexed(&PathBuf::from(path)) {
                Ok(s) => {
                    println!("{}", loaded(&s));
                    session = Some(s);
                }
                Err(e) => log::error!("{}", e),
            },

            Input::Query(q) => match &session {
                Some(s) => query(s, q, cfg)?,
                None => println!("No file loaded"),
            },
        }
    }
}

/// One-line summary printed after `:load`.
fn loaded(s: &Session) -> String {
    let name = s
        .source()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "text".to_string());
    format!(
        "Loaded {}: {} characters, {} distinct words",
        name,
        s.corpus().len(),
        s.vocabulary().len()
    )
}

fn query(s: &Session, q: &str, cfg: &Config) -> Result<()> {
    let report = commands::search(s, q, cfg.search.ignore_case, cfg)?;
    commands::print_search(&report);

    let report = commands::complete(s, q, cfg.complete.limit, cfg.complete.ranked)?;
    if !report.suggestions.is_empty() {
        println!("Suggestions:");
        commands::print_suggestions(&report.suggestions);
    }
    Ok(())
}
