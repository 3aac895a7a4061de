use std::num::NonZeroUsize;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::PredictionRecord;
use crate::model::profile::{PROBABILITY_THRESHOLD_LABEL, TableMode};
use crate::model::record::{COL_CATEGORY, COL_ENTITY, COL_PROBABILITY, COL_SCORE};
use crate::model::{Scope, Variant};
use crate::pipeline::filter::{MatchRule, count_matches, filter_by_category};
use crate::pipeline::grid::{DisplayGrid, build_grid};
use crate::pipeline::page::{PageInfo, paginate};
use crate::pipeline::rank::{SortKey, sort_records, top_k, truncate_record};
use crate::store::DatasetStore;
use crate::store::lookup::CategoryGeneMap;

pub mod json;
pub mod text;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceTargetGrids {
    pub source: DisplayGrid,
    pub target: DisplayGrid,
}

/// Heading shown once a hormone has been picked.
pub fn resolve_category(key: Option<&str>) -> Option<String> {
    key.map(|k| format!("Hormone Selected - {k}"))
}

/// Grids for both collections of `key`. A key the document does not know
/// yields two empty grids; only an unset key yields `None`.
pub fn render_source_target_grids(
    key: Option<&str>,
    map: &CategoryGeneMap,
    width: NonZeroUsize,
) -> Option<SourceTargetGrids> {
    let key = key?;
    let grids = match map.get(key) {
        Some(entry) => SourceTargetGrids {
            source: build_grid(&entry.source, width),
            target: build_grid(&entry.target, width),
        },
        None => SourceTargetGrids {
            source: DisplayGrid::empty(width),
            target: DisplayGrid::empty(width),
        },
    };
    Some(grids)
}

/// Matching records with truncated scores, in table order for `All` and
/// ranked for `TopK`.
pub fn render_prediction_table(
    store: &DatasetStore,
    key: &str,
    variant: Variant,
    mode: TableMode,
    rule: MatchRule,
) -> Vec<PredictionRecord> {
    let truncated: Vec<PredictionRecord> = filter_by_category(store.table(variant), key, rule)
        .into_iter()
        .map(truncate_record)
        .collect();
    match mode {
        TableMode::All => truncated,
        TableMode::TopK(k) => top_k(&truncated, k),
    }
}

pub fn render_summary(
    store: &DatasetStore,
    key: Option<&str>,
    variant: Variant,
    rule: MatchRule,
) -> Option<String> {
    let key = key?;
    let count = count_matches(store.table(variant), key, rule);
    Some(format!(
        "Discovered {} {}s associated with this hormone, with the SVM probability score higher than {}",
        count,
        variant.label(),
        PROBABILITY_THRESHOLD_LABEL
    ))
}

/// Row dictionaries keyed by column header.
pub fn records_as_rows(records: &[PredictionRecord]) -> Vec<Map<String, Value>> {
    records
        .iter()
        .map(|r| {
            let mut row = Map::new();
            row.insert(COL_CATEGORY.to_string(), Value::from(r.category.clone()));
            row.insert(COL_ENTITY.to_string(), Value::from(r.entity.clone()));
            row.insert(COL_SCORE.to_string(), Value::from(r.score));
            row.insert(COL_PROBABILITY.to_string(), Value::from(r.probability));
            row
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct ExploreView {
    pub key: Option<String>,
    pub selected: Option<String>,
    pub tissues: Option<SourceTargetGrids>,
    pub genes: Option<SourceTargetGrids>,
}

pub fn build_explore_view(
    store: &DatasetStore,
    key: Option<&str>,
    width: NonZeroUsize,
) -> ExploreView {
    ExploreView {
        key: key.map(str::to_string),
        selected: resolve_category(key),
        tissues: render_source_target_grids(key, store.category_map(Scope::TissueLevel), width),
        genes: render_source_target_grids(key, store.category_map(Scope::GeneLevel), width),
    }
}

#[derive(Debug, Clone)]
pub struct TableOptions {
    pub mode: TableMode,
    pub rule: MatchRule,
    pub sort: Vec<SortKey>,
    pub page: usize,
    pub page_size: NonZeroUsize,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictionsView {
    pub key: String,
    pub variant: &'static str,
    pub columns: [&'static str; 4],
    #[serde(serialize_with = "serialize_rows")]
    pub rows: Vec<PredictionRecord>,
    pub page: PageInfo,
    pub summary: Option<String>,
}

fn serialize_rows<S: serde::Serializer>(
    rows: &[PredictionRecord],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(records_as_rows(rows))
}

pub fn build_predictions_view(
    store: &DatasetStore,
    key: &str,
    variant: Variant,
    opts: &TableOptions,
) -> PredictionsView {
    let mut records = render_prediction_table(store, key, variant, opts.mode, opts.rule);
    sort_records(&mut records, &opts.sort);
    let (rows, page) = paginate(&records, opts.page, opts.page_size);
    PredictionsView {
        key: key.to_string(),
        variant: variant.label(),
        columns: crate::model::record::COLUMNS,
        rows: rows.to_vec(),
        page,
        summary: render_summary(store, Some(key), variant, opts.rule),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
