use std::collections::BTreeSet;

use crate::model::PredictionRecord;

/// How a selected key is compared against a record's category.
///
/// `Prefix` matches the start of the category string and is the default.
/// It is ambiguous when one hormone name is a prefix of another;
/// `prefix_collisions` reports those cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchRule {
    #[default]
    Prefix,
    Exact,
}

impl MatchRule {
    pub fn matches(self, category: &str, key: &str) -> bool {
        match self {
            MatchRule::Prefix => category.starts_with(key),
            MatchRule::Exact => category == key,
        }
    }
}

pub fn filter_by_category<'a>(
    table: &'a [PredictionRecord],
    key: &str,
    rule: MatchRule,
) -> Vec<&'a PredictionRecord> {
    table
        .iter()
        .filter(|r| rule.matches(&r.category, key))
        .collect()
}

pub fn count_matches(table: &[PredictionRecord], key: &str, rule: MatchRule) -> usize {
    table
        .iter()
        .filter(|r| rule.matches(&r.category, key))
        .count()
}

/// Categories other than `key` itself that a prefix match on `key` picks up.
pub fn prefix_collisions(table: &[PredictionRecord], key: &str) -> Vec<String> {
    let mut out = BTreeSet::new();
    for r in table {
        if r.category != key && r.category.starts_with(key) {
            out.insert(r.category.clone());
        }
    }
    out.into_iter().collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/filter.rs"]
mod tests;
