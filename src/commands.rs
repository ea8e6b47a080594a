use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use lector::{Config, Error, Ranked, Result, Session};

use crate::init::{elapsed_ms, load_indexed, load_session};

/// A single match with the text that follows it.
#[derive(Debug, Serialize)]
pub struct MatchView {
    pub offset: usize,
    pub snippet: String,
}

#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub pattern: String,
    pub ignore_case: bool,
    pub total: usize,
    pub elapsed_ms: f64,
    pub matches: Vec<MatchView>,
}

#[derive(Debug, Serialize)]
pub struct CompleteReport {
    pub prefix: String,
    pub ranked: bool,
    pub suggestions: Vec<Ranked>,
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub characters: usize,
    pub tokens: usize,
    pub distinct_words: usize,
    pub trie_nodes: usize,
    pub top: Vec<Ranked>,
}

/// Search a loaded session and collect up to `max_shown` snippets.
pub fn search(s: &Session, pattern: &str, ignore_case: bool, cfg: &Config) -> Result<SearchReport> {
    if pattern.is_empty() {
        return Err(Error::Empty("pattern is required".to_string()));
    }

    let start = Instant::now();
    let offsets = s.search_with(pattern, ignore_case);
    let elapsed = elapsed_ms(start);

    let matches = offsets
        .iter()
        .take(cfg.search.max_shown)
        .map(|&offset| -> Result<MatchView> {
            Ok(MatchView {
                offset,
                snippet: flatten(&s.snippet(offset, cfg.search.snippet_width)?),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(SearchReport {
        pattern: pattern.to_string(),
        ignore_case,
        total: offsets.len(),
        elapsed_ms: elapsed,
        matches,
    })
}

/// Suggest completions for a prefix. Words in the index are lower-case, so
/// the prefix is lower-cased too.
pub fn complete(s: &Session, prefix: &str, limit: usize, ranked: bool) -> Result<CompleteReport> {
    let prefix = prefix.to_lowercase();

    let suggestions = if ranked {
        s.suggest(&prefix, Some(limit))?
    } else {
        s.complete(&prefix, Some(limit))?
            .into_iter()
            .map(|word| Ranked::lookup(word, s.vocabulary()))
            .collect()
    };

    Ok(CompleteReport {
        prefix,
        ranked,
        suggestions,
    })
}

pub fn run_search(file: &Path, pattern: &str, ignore_case: bool, json: bool, cfg: &Config) -> Result<()> {
    let s = load_session(file)?;
    let report = search(&s, pattern, ignore_case, cfg)?;
    log::info!(
        "search '{}': {} matches in {:.2} ms",
        report.pattern,
        report.total,
        report.elapsed_ms
    );

    if json {
        return print_json(&report);
    }
    print_search(&report);
    Ok(())
}

pub fn run_complete(
    file: &Path,
    prefix: &str,
    limit: Option<usize>,
    ranked: bool,
    json: bool,
    cfg: &Config,
) -> Result<()> {
    let s = load_indexed(file)?;

    let start = Instant::now();
    let report = complete(&s, prefix, limit.unwrap_or(cfg.complete.limit), ranked)?;
    log::info!(
        "complete '{}': {} suggestions in {:.2} ms",
        report.prefix,
        report.suggestions.len(),
        elapsed_ms(start)
    );

    if json {
        return print_json(&report);
    }
    print_suggestions(&report.suggestions);
    Ok(())
}

pub fn run_stats(file: &Path, top: usize, json: bool) -> Result<()> {
    let s = load_indexed(file)?;
    let vocab = s.vocabulary();

    let report = StatsReport {
        characters: s.corpus().len(),
        tokens: vocab.total_tokens(),
        distinct_words: vocab.len(),
        trie_nodes: s.index()?.node_count(),
        top: s.top_words(top),
    };

    if json {
        return print_json(&report);
    }

    println!("characters:     {}", report.characters);
    println!("words:          {}", report.tokens);
    println!("distinct words: {}", report.distinct_words);
    println!("trie nodes:     {}", report.trie_nodes);
    if !report.top.is_empty() {
        println!("most frequent:");
        print_suggestions(&report.top);
    }
    Ok(())
}

pub fn print_search(r: &SearchReport) {
    println!("Matches: {} ({:.2} ms)", r.total, r.elapsed_ms);
    for m in &r.matches {
        println!("  {:>8}  {}", m.offset, m.snippet);
    }
    if r.total > r.matches.len() {
        println!("  ... and {} more", r.total - r.matches.len());
    }
}

pub fn print_suggestions(words: &[Ranked]) {
    for r in words {
        println!("  {:<24} {}", r.word, r.frequency);
    }
}

fn to_json<T: Serialize>(v: &T) -> Result<String> {
    serde_json::to_string_pretty(v).map_err(|e| Error::Io(e.into()))
}

fn print_json<T: Serialize>(v: &T) -> Result<()> {
    println!("{}", to_json(v)?);
    Ok(())
}

/// Collapse line breaks and tabs so a snippet prints on one line.
fn flatten(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}
