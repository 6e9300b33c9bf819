use std::path::PathBuf;

use crate::config::AppConfig;
use crate::errors::CliError;
use crate::pricing::{Property, PropertyKind};
use crate::quote::Quote;

/// A quote described on the command line, e.g.
/// `apartment rooms=2 parking installments=3 csv=out.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRequest {
    pub kind: PropertyKind,
    pub rooms: u8,
    pub parking: bool,
    pub children: bool,
    pub parking_spots: u32,
    pub installments: i64,
    pub csv: Option<PathBuf>,
    pub json: bool,
}

impl QuoteRequest {
    pub fn new(kind: PropertyKind) -> Self {
        Self {
            kind,
            rooms: 1,
            parking: false,
            children: false,
            parking_spots: 0,
            installments: 1,
            csv: None,
            json: false,
        }
    }

    pub fn parse<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let kind = args
            .next()
            .ok_or_else(|| CliError::Input("missing property kind".into()))?
            .as_ref()
            .parse::<PropertyKind>()
            .map_err(CliError::Input)?;
        let mut request = Self::new(kind);

        for arg in args {
            let arg = arg.as_ref();
            match arg.split_once('=') {
                None => match arg {
                    "parking" => request.parking = true,
                    "children" => request.children = true,
                    "json" => request.json = true,
                    other => return Err(CliError::Input(format!("unknown flag `{other}`"))),
                },
                Some(("rooms", value)) => {
                    request.rooms = match value {
                        "1" => 1,
                        "2" => 2,
                        _ => return Err(CliError::Input(format!("rooms must be 1 or 2, got `{value}`"))),
                    }
                }
                Some(("spots", value)) => {
                    request.parking_spots = value.parse().map_err(|_| {
                        CliError::Input(format!("spots must be zero or positive, got `{value}`"))
                    })?
                }
                Some(("installments", value)) => {
                    request.installments = value.parse().map_err(|_| {
                        CliError::Input(format!("installments must be a whole number, got `{value}`"))
                    })?
                }
                Some(("csv", value)) if !value.is_empty() => request.csv = Some(PathBuf::from(value)),
                Some((key, _)) => return Err(CliError::Input(format!("unknown option `{key}`"))),
            }
        }

        Ok(request)
    }

    pub fn build_property(&self, config: &AppConfig) -> Property {
        let mut property = Property::new(self.kind, &config.pricing);
        property.set_room_count(self.rooms);
        property.set_parking(self.parking);
        property.set_children(self.children);
        property.set_studio_parking_spots(self.parking_spots);
        property
    }

    pub fn build_quote(&self, config: &AppConfig) -> Result<Quote, CliError> {
        let mut quote = Quote::new(self.build_property(config), config.terms);
        quote.set_installment_count(self.installments)?;
        Ok(quote)
    }
}
