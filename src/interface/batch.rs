use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::models::Substance;
use crate::state::MixState;

/// One container row of a batch CSV.
///
/// Weights are kept as text so unparsable cells follow the same path as
/// typed input. Blank cells keep the form defaults: Coco for `substance`
/// and the configured weight for `container`. An unrecognised `substance`
/// leaves the container unset. A blank `id` allocates a fresh one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BatchRow {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub substance: String,

    #[serde(default)]
    pub container: String,

    #[serde(default)]
    pub gross: String,
}

/// Read batch rows from a CSV file with an `id,substance,container,gross` header.
pub fn load_batch<P: AsRef<Path>>(path: P) -> Result<Vec<BatchRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Feed rows through the container forms, in order.
///
/// Rows sharing an id edit the same container, later rows winning.
pub fn apply_batch(state: &mut MixState, rows: &[BatchRow]) -> Result<()> {
    for row in rows {
        let id = if row.id.is_empty() {
            state.add_container()
        } else {
            state.ensure_container(&row.id);
            row.id.clone()
        };

        if !row.substance.is_empty() {
            let substance = Substance::parse(&row.substance);
            if !substance.is_set() {
                tracing::warn!(
                    %id,
                    substance = %row.substance,
                    "unrecognised substance, excluded from totals"
                );
            }
            state.edit_substance(&id, substance)?;
        }

        if !row.container.is_empty() {
            state.edit_container_weight(&id, &row.container)?;
        }
        state.edit_gross_weight(&id, &row.gross)?;
    }

    tracing::info!(rows = rows.len(), containers = state.ledger().len(), "batch applied");
    Ok(())
}
