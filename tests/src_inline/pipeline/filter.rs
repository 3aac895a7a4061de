use super::{MatchRule, count_matches, filter_by_category, prefix_collisions};
use crate::model::PredictionRecord;

fn rec(category: &str, entity: &str, score: f64, probability: f64) -> PredictionRecord {
    PredictionRecord {
        category: category.to_string(),
        entity: entity.to_string(),
        score,
        probability,
    }
}

fn sample_table() -> Vec<PredictionRecord> {
    vec![
        rec("insulin", "G1", 1.2, 0.91),
        rec("leptin", "G2", 0.8, 0.75),
        rec("estrogen", "ESR1", 2.0, 0.99),
        rec("estrogen-related", "ESRRA", 1.1, 0.8),
        rec("insulin", "G3", 0.4, 0.71),
    ]
}

#[test]
fn test_filter_returns_only_matching_records() {
    let table = vec![rec("insulin", "G1", 1.0, 0.9), rec("leptin", "G2", 1.0, 0.9)];
    let hits = filter_by_category(&table, "insulin", MatchRule::Prefix);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0], &table[0]);
}

#[test]
fn test_filter_preserves_table_order() {
    let table = sample_table();
    let hits = filter_by_category(&table, "insulin", MatchRule::Prefix);
    let genes: Vec<&str> = hits.iter().map(|r| r.entity.as_str()).collect();
    assert_eq!(genes, vec!["G1", "G3"]);
}

#[test]
fn test_filter_no_match_is_empty() {
    let table = sample_table();
    assert!(filter_by_category(&table, "melatonin", MatchRule::Prefix).is_empty());
    assert!(filter_by_category(&[], "insulin", MatchRule::Exact).is_empty());
}

#[test]
fn test_filter_is_case_sensitive() {
    let table = sample_table();
    assert!(filter_by_category(&table, "Insulin", MatchRule::Prefix).is_empty());
}

#[test]
fn test_prefix_rule_captures_longer_names() {
    let table = sample_table();
    let prefix = filter_by_category(&table, "estrogen", MatchRule::Prefix);
    assert_eq!(prefix.len(), 2);
    let exact = filter_by_category(&table, "estrogen", MatchRule::Exact);
    assert_eq!(exact.len(), 1);
    assert_eq!(exact[0].entity, "ESR1");
}

#[test]
fn test_prefix_collisions_reported() {
    let table = sample_table();
    assert_eq!(
        prefix_collisions(&table, "estrogen"),
        vec!["estrogen-related".to_string()]
    );
    assert!(prefix_collisions(&table, "insulin").is_empty());
}

#[test]
fn test_count_matches_equals_filter_len() {
    let table = sample_table();
    for key in ["insulin", "leptin", "estrogen", "estrogen-related", "none", ""] {
        for rule in [MatchRule::Prefix, MatchRule::Exact] {
            assert_eq!(
                count_matches(&table, key, rule),
                filter_by_category(&table, key, rule).len(),
                "key={key:?} rule={rule:?}"
            );
        }
    }
}
