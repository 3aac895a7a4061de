use std::path::Path;

use crate::model::PredictionRecord;
use crate::model::record::COLUMNS;
use crate::store::StoreError;
use crate::store::open::open_maybe_gz;

/// Reads a prediction table. Only the four named columns are used; any
/// other column (such as an exported row index) is ignored.
pub fn parse_predictions(path: &Path) -> Result<Vec<PredictionRecord>, StoreError> {
    let reader = open_maybe_gz(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let csv_err = |source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let headers = rdr.headers().map_err(csv_err)?.clone();
    let missing: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(StoreError::Parse(format!(
            "{} is missing required column(s): {}",
            path.display(),
            missing.join(", ")
        )));
    }

    let mut records = Vec::new();
    for row in rdr.deserialize::<PredictionRecord>() {
        records.push(row.map_err(csv_err)?);
    }

    if records.is_empty() {
        tracing::warn!(path = %path.display(), "prediction table has no rows");
    }

    Ok(records)
}
