//! Terminal surface: interactive prompts and the one-shot `quote` command.

pub mod args;
pub mod flow;
pub mod output;
pub mod prompter;

pub use args::QuoteRequest;
pub use flow::{collect_installments, collect_property, run_interactive, SessionOutcome};
pub use prompter::{DialoguerPrompter, Prompter, ScriptedPrompter};

use crate::config::AppConfig;
use crate::errors::CliError;
use crate::quote::Quote;
use crate::report::save_projection_to_file;

/// Prints the summary for a command-line request, then the optional JSON and CSV outputs.
pub fn run_quote(request: &QuoteRequest, config: &AppConfig) -> Result<Quote, CliError> {
    let quote = request.build_quote(config)?;
    output::lines(quote.summary().lines());

    if request.json || request.csv.is_some() {
        let rows = quote.generate_projection();
        if request.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        if let Some(path) = &request.csv {
            let written = save_projection_to_file(&rows, path)?;
            output::success(format!("CSV written to {}", written.display()));
        }
    }

    Ok(quote)
}
