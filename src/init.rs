use std::path::{Path, PathBuf};
use std::time::Instant;

use lector::{config, Config, Result, Session};

/// Initialize logger.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_env("RUST_LOG")
        .format(|buf, record| {
            use std::io::Write;
            let level = if record.level() != log::Level::Info {
                format!("[{}] ", record.level())
            } else {
                String::new()
            };
            writeln!(
                buf,
                "{} {}:{} {}{}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                level,
                record.args()
            )
        })
        .init();
}

/// Load and merge config files, exiting on error.
pub fn init_config(paths: &[PathBuf]) -> Config {
    match config::load_all(paths) {
        Ok(c) => c,
        Err(e) => {
            log::error!("error loading config: {}", e);
            std::process::exit(1);
        }
    }
}

/// Load a text file into a new session.
pub fn load_session(path: &Path) -> Result<Session> {
    let start = Instant::now();
    let s = Session::load(path)?;

    let vocab = s.vocabulary();
    log::info!(
        "loaded '{}': {} characters, {} words ({} distinct) in {:.2} ms",
        path.display(),
        s.corpus().len(),
        vocab.total_tokens(),
        vocab.len(),
        elapsed_ms(start)
    );
    if s.corpus().is_empty() {
        log::warn!("'{}' is empty", path.display());
    }

    Ok(s)
}

/// Load a text file and build its completion index.
pub fn load_indexed(path: &Path) -> Result<Session> {
    let mut s = load_session(path)?;

    let start = Instant::now();
    let idx = s.build_index();
    log::info!(
        "built index: {} words, {} nodes in {:.2} ms",
        idx.len(),
        idx.node_count(),
        elapsed_ms(start)
    );

    Ok(s)
}

pub fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
