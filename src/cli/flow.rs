use std::path::{Path, PathBuf};

use crate::config::{AppConfig, PricingConfig};
use crate::errors::CliError;
use crate::pricing::{Property, PropertyKind};
use crate::quote::Quote;
use crate::report::{format_amount, save_projection_to_file};

use super::output;
use super::prompter::Prompter;

/// What an interactive session produced.
#[derive(Debug)]
pub struct SessionOutcome {
    pub quote: Quote,
    pub report: Option<PathBuf>,
}

/// Runs the full prompt sequence: property, installments, summary, export.
pub fn run_interactive(
    prompter: &mut dyn Prompter,
    config: &AppConfig,
) -> Result<SessionOutcome, CliError> {
    output::section("Rental quote");

    let property = collect_property(prompter, &config.pricing)?;
    let mut quote = Quote::new(property, config.terms);
    collect_installments(prompter, &mut quote)?;

    output::section("Quote summary");
    output::lines(quote.summary().lines());
    output::separator();

    let report = if prompter.confirm("Export a 12-month CSV projection?")? {
        let path = save_projection_to_file(
            &quote.generate_projection(),
            Path::new(&config.report.file_name),
        )?;
        output::success(format!("CSV written to {}", path.display()));
        Some(path)
    } else {
        output::info("CSV export skipped.");
        None
    };

    Ok(SessionOutcome { quote, report })
}

/// Asks for the property kind and the attributes that kind prices.
pub fn collect_property(
    prompter: &mut dyn Prompter,
    pricing: &PricingConfig,
) -> Result<Property, CliError> {
    let options: Vec<String> = PropertyKind::ALL
        .iter()
        .map(|kind| {
            let base = Property::new(*kind, pricing).rates().base_rate;
            format!("{kind} (R$ {})", format_amount(base))
        })
        .collect();
    let kind = PropertyKind::ALL[prompter.select("Property type", &options)?];
    let mut property = Property::new(kind, pricing);

    if kind.has_rooms_and_garage() {
        let rooms = ask_until(prompter, "Rooms (1 or 2)", "Enter 1 or 2.", |answer| {
            match answer {
                "1" => Some(1),
                "2" => Some(2),
                _ => None,
            }
        })?;
        property.set_room_count(rooms);
        property.set_parking(prompter.confirm("Garage?")?);
    } else {
        let spots = ask_until(
            prompter,
            "Parking spots (0, 1, 2...)",
            "Enter zero or a positive whole number.",
            |answer| answer.parse::<u32>().ok(),
        )?;
        property.set_studio_parking_spots(spots);
    }

    if kind == PropertyKind::Apartment {
        property.set_children(prompter.confirm("Children living in the property?")?);
    }

    Ok(property)
}

/// Re-asks until the quote accepts the installment count.
pub fn collect_installments(prompter: &mut dyn Prompter, quote: &mut Quote) -> Result<(), CliError> {
    let prompt = format!(
        "Split the R$ {} contract fee into how many installments (max {})?",
        format_amount(quote.contract_fee()),
        quote.max_installments()
    );
    loop {
        let answer = prompter.input_text(&prompt)?;
        match answer.trim().parse::<i64>() {
            Ok(count) => match quote.set_installment_count(count) {
                Ok(()) => return Ok(()),
                Err(err) => output::error(err),
            },
            Err(_) => output::error(format!(
                "Enter a whole number between 1 and {}.",
                quote.max_installments()
            )),
        }
    }
}

fn ask_until<T>(
    prompter: &mut dyn Prompter,
    prompt: &str,
    hint: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, CliError> {
    loop {
        let answer = prompter.input_text(prompt)?;
        if let Some(value) = parse(answer.trim()) {
            return Ok(value);
        }
        output::warning(hint);
    }
}
