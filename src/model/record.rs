use serde::{Deserialize, Serialize};

pub const COL_CATEGORY: &str = "Hormone";
pub const COL_ENTITY: &str = "Gene";
pub const COL_SCORE: &str = "SVM score";
pub const COL_PROBABILITY: &str = "SVM probability";

pub const COLUMNS: [&str; 4] = [COL_CATEGORY, COL_ENTITY, COL_SCORE, COL_PROBABILITY];

/// One precomputed hormone/entity association. Column names match the CSV
/// headers, which are also the keys of a rendered row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(rename = "Hormone")]
    pub category: String,
    #[serde(rename = "Gene")]
    pub entity: String,
    #[serde(rename = "SVM score")]
    pub score: f64,
    #[serde(rename = "SVM probability")]
    pub probability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Category,
    Entity,
    Score,
    Probability,
}

impl Column {
    /// Accepts the CSV header as well as a short lowercase alias.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            COL_CATEGORY | "hormone" | "category" => Some(Column::Category),
            COL_ENTITY | "gene" | "entity" => Some(Column::Entity),
            COL_SCORE | "score" => Some(Column::Score),
            COL_PROBABILITY | "probability" | "prob" => Some(Column::Probability),
            _ => None,
        }
    }
}
