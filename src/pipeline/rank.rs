use std::cmp::Ordering;

use crate::model::PredictionRecord;
use crate::model::record::Column;

pub const SCORE_DECIMALS: i32 = 4;

/// Truncates toward zero at four decimals: 0.123456 -> 0.1234, -0.98765 -> -0.9876.
pub fn truncate_score(x: f64) -> f64 {
    let scale = 10f64.powi(SCORE_DECIMALS);
    (x * scale).trunc() / scale
}

pub fn truncate_record(record: &PredictionRecord) -> PredictionRecord {
    PredictionRecord {
        category: record.category.clone(),
        entity: record.entity.clone(),
        score: truncate_score(record.score),
        probability: truncate_score(record.probability),
    }
}

fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// At most `k` records by descending score, then descending probability.
/// Remaining ties keep their input order.
pub fn top_k(records: &[PredictionRecord], k: usize) -> Vec<PredictionRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| match desc(a.score, b.score) {
        Ordering::Equal => desc(a.probability, b.probability),
        other => other,
    });
    sorted.truncate(k);
    sorted
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: Column,
    pub descending: bool,
}

impl SortKey {
    /// `score` or `score:asc` sorts ascending, `score:desc` descending.
    pub fn parse(s: &str) -> Option<Self> {
        let (name, dir) = match s.split_once(':') {
            Some((name, dir)) => (name, dir.trim()),
            None => (s, "asc"),
        };
        let descending = match dir {
            "asc" => false,
            "desc" => true,
            _ => return None,
        };
        Column::parse(name).map(|column| SortKey { column, descending })
    }

    fn compare(&self, a: &PredictionRecord, b: &PredictionRecord) -> Ordering {
        let ord = match self.column {
            Column::Category => a.category.cmp(&b.category),
            Column::Entity => a.entity.cmp(&b.entity),
            Column::Score => a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal),
            Column::Probability => a
                .probability
                .partial_cmp(&b.probability)
                .unwrap_or(Ordering::Equal),
        };
        if self.descending { ord.reverse() } else { ord }
    }
}

/// Stable multi-column sort; earlier keys take precedence.
pub fn sort_records(records: &mut [PredictionRecord], keys: &[SortKey]) {
    if keys.is_empty() {
        return;
    }
    records.sort_by(|a, b| {
        for key in keys {
            match key.compare(a, b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    });
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/rank.rs"]
mod tests;
