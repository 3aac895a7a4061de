use std::path::{Path, PathBuf};

pub mod lookup;
pub mod open;
pub mod table;

use lookup::{CategoryGeneMap, parse_category_map};
use table::parse_predictions;

use crate::model::{PredictionRecord, Scope, Variant};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("parse error: {0}")]
    Parse(String),
}

/// Fixed dataset locations, relative to the data directory.
#[derive(Debug, Clone)]
pub struct DataLayout {
    pub data_dir: PathBuf,
}

pub const PROTEIN_CODING_TABLE: &str = "results/protein_coding_genes_novel_predictions_threshold.csv";
pub const LNCRNA_TABLE: &str = "results/lncRNA_novel_predictions_threshold.csv";
pub const GENE_LEVEL_DOC: &str = "hgv1_hormone_src_tgt_genes.json";
pub const TISSUE_LEVEL_DOC: &str = "source_target_tissue.json";

impl DataLayout {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn table_name(variant: Variant) -> &'static str {
        match variant {
            Variant::ProteinCoding => PROTEIN_CODING_TABLE,
            Variant::LongNonCoding => LNCRNA_TABLE,
        }
    }

    pub fn document_name(scope: Scope) -> &'static str {
        match scope {
            Scope::GeneLevel => GENE_LEVEL_DOC,
            Scope::TissueLevel => TISSUE_LEVEL_DOC,
        }
    }

    pub fn table_path(&self, variant: Variant) -> Result<PathBuf, StoreError> {
        find_dataset_path(&self.data_dir, Self::table_name(variant))
    }

    pub fn document_path(&self, scope: Scope) -> Result<PathBuf, StoreError> {
        find_dataset_path(&self.data_dir, Self::document_name(scope))
    }
}

/// Plain file first, then its gzip sibling.
pub fn find_dataset_path(data_dir: &Path, name: &str) -> Result<PathBuf, StoreError> {
    let candidates = [name.to_string(), format!("{name}.gz")];
    for candidate in candidates {
        let path = data_dir.join(candidate);
        if path.is_file() {
            return Ok(path);
        }
    }
    Err(StoreError::MissingInput(format!(
        "missing {} (or {}.gz) under {}",
        name,
        name,
        data_dir.display()
    )))
}

/// Everything the browser serves, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    protein_coding: Vec<PredictionRecord>,
    long_non_coding: Vec<PredictionRecord>,
    gene_level: CategoryGeneMap,
    tissue_level: CategoryGeneMap,
}

impl DatasetStore {
    pub fn new(
        protein_coding: Vec<PredictionRecord>,
        long_non_coding: Vec<PredictionRecord>,
        gene_level: CategoryGeneMap,
        tissue_level: CategoryGeneMap,
    ) -> Self {
        Self {
            protein_coding,
            long_non_coding,
            gene_level,
            tissue_level,
        }
    }

    /// Loads all four datasets or fails; there is no partial store.
    pub fn load(layout: &DataLayout) -> Result<Self, StoreError> {
        let pc_path = layout.table_path(Variant::ProteinCoding)?;
        let lnc_path = layout.table_path(Variant::LongNonCoding)?;
        let gene_path = layout.document_path(Scope::GeneLevel)?;
        let tissue_path = layout.document_path(Scope::TissueLevel)?;

        tracing::info!(
            protein_coding = %pc_path.display(),
            lncrna = %lnc_path.display(),
            gene_level = %gene_path.display(),
            tissue_level = %tissue_path.display(),
            "discovered dataset files"
        );

        let protein_coding = parse_predictions(&pc_path)?;
        let long_non_coding = parse_predictions(&lnc_path)?;
        let gene_level = parse_category_map(&gene_path)?;
        let tissue_level = parse_category_map(&tissue_path)?;

        for (scope, map) in [
            (Scope::GeneLevel, &gene_level),
            (Scope::TissueLevel, &tissue_level),
        ] {
            if map.is_empty() {
                tracing::warn!(scope = scope.label(), "lookup document has no categories");
            }
        }

        tracing::info!(
            protein_coding = protein_coding.len(),
            lncrna = long_non_coding.len(),
            gene_level_keys = gene_level.len(),
            tissue_level_keys = tissue_level.len(),
            "dataset store loaded"
        );

        Ok(Self::new(
            protein_coding,
            long_non_coding,
            gene_level,
            tissue_level,
        ))
    }

    pub fn table(&self, variant: Variant) -> &[PredictionRecord] {
        match variant {
            Variant::ProteinCoding => &self.protein_coding,
            Variant::LongNonCoding => &self.long_non_coding,
        }
    }

    pub fn category_map(&self, scope: Scope) -> &CategoryGeneMap {
        match scope {
            Scope::GeneLevel => &self.gene_level,
            Scope::TissueLevel => &self.tissue_level,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/tests.rs"]
mod tests;
