mod cli;
mod commands;
mod init;
mod shell;

use clap::Parser;

use cli::Commands;

fn main() {
    init::init_logger();

    let cli = cli::Cli::parse();

    // Generate a new config file.
    if let Commands::NewConfig { path } = &cli.command {
        match lector::config::generate_sample(path) {
            Ok(_) => {
                log::info!("config file generated: {}", path.display());
            }
            Err(e) => {
                log::error!("error generating config: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = init::init_config(&cli.config);

    let res = match cli.command {
        Commands::NewConfig { .. } => Ok(()),

        Commands::Search {
            file,
            pattern,
            ignore_case,
            exact,
            json,
        } => {
            let ignore_case = if exact {
                false
            } else {
                ignore_case || config.search.ignore_case
            };
            commands::run_search(&file, &pattern, ignore_case, json, &config)
        }

        Commands::Complete {
            file,
            prefix,
            limit,
            unranked,
            json,
        } => {
            let ranked = !unranked && config.complete.ranked;
            commands::run_complete(&file, &prefix, limit, ranked, json, &config)
        }

        Commands::Stats { file, top, json } => commands::run_stats(&file, top, json),

        Commands::Shell { file } => shell::run(file.as_deref(), &config),
    };

    if let Err(e) = res {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
