mod config;
mod logging;
mod prompt;
mod report;

use std::io;

use phonofeat_algo::classify;

use crate::config::Config;

fn main() {
    let config = Config::from_env();
    logging::init(&config.log_level);

    let json_output = std::env::args().any(|arg| arg == "--json");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let session = match prompt::run(&mut input, &mut output, config.max_symbols) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("Invalid Input: {err}");
            std::process::exit(1);
        }
    };

    tracing::debug!(
        category = session.category.as_str(),
        symbols = ?session.symbols,
        "classifying"
    );

    let results = classify(session.category, &session.symbols);

    let rendered = if json_output {
        report::render_json(&mut output, &results)
    } else {
        report::render(&mut output, &results)
    };

    if let Err(err) = rendered {
        tracing::error!(error = %err, "failed to write results");
        std::process::exit(1);
    }
}
