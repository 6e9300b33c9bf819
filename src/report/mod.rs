//! Semicolon-delimited export of a quote projection.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::ReportError;
use crate::quote::ProjectionRow;

pub const HEADER: [&str; 4] = [
    "Mes",
    "Valor_Aluguel",
    "Parcela_Contrato",
    "Valor_Total_Mensal",
];

/// Two decimal places with a comma separator, e.g. `1140,50`.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}").replace('.', ",")
}

/// Writes the header and one record per projection row.
pub fn write_projection<W: Write>(rows: &[ProjectionRow], writer: W) -> Result<(), ReportError> {
    let mut csv = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(writer);
    csv.write_record(HEADER)?;
    for row in rows {
        csv.write_record([
            row.year_month.to_string(),
            format_amount(row.rent_amount),
            format_amount(row.contract_installment_amount),
            format_amount(row.total_amount),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes the projection to `path` by staging to a temporary file first.
pub fn save_projection_to_file(
    rows: &[ProjectionRow],
    path: &Path,
) -> Result<PathBuf, ReportError> {
    let tmp = path.with_extension("tmp");
    let file = File::create(&tmp)?;
    let staged = write_projection(rows, file).and_then(|()| fs::rename(&tmp, path).map_err(ReportError::from));
    if let Err(err) = staged {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote projection report");
    Ok(path.to_path_buf())
}
