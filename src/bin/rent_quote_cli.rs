use std::{env, process};

use rent_quote::{
    cli::{self, DialoguerPrompter, QuoteRequest},
    init, AppConfig,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::default();
    let mut args = env::args().skip(1);

    match args.next().as_deref() {
        None | Some("interactive") => {
            let mut prompter = DialoguerPrompter::new();
            cli::run_interactive(&mut prompter, &config)?;
        }
        Some("quote") => {
            let request = QuoteRequest::parse(args)?;
            cli::run_quote(&request, &config)?;
        }
        Some("rates") => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Some("version") => {
            println!(
                "rent_quote_cli {} ({} built {} for {} [{}])",
                env!("CARGO_PKG_VERSION"),
                env!("RENT_QUOTE_BUILD_HASH"),
                env!("RENT_QUOTE_BUILD_TIMESTAMP"),
                env!("RENT_QUOTE_BUILD_TARGET"),
                env!("RENT_QUOTE_BUILD_PROFILE"),
            );
        }
        Some(_) => {
            print_usage();
            process::exit(1);
        }
    }

    Ok(())
}

fn print_usage() {
    eprintln!(
        "Usage: rent_quote_cli [command]\n\
         Commands:\n  \
         interactive (default)\n  \
         quote <apartment|house|studio> [rooms=1|2] [parking] [children] [spots=N] [installments=N] [csv=FILE] [json]\n  \
         rates\n  \
         version"
    );
}
