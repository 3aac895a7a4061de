use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::lookup::parse_category_map;
use super::table::parse_predictions;
use super::{
    DataLayout, DatasetStore, GENE_LEVEL_DOC, LNCRNA_TABLE, PROTEIN_CODING_TABLE, StoreError,
    TISSUE_LEVEL_DOC, find_dataset_path,
};
use crate::model::{Scope, Variant};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("hgv1_browser_store_{}_{}", std::process::id(), id));
    fs::create_dir_all(dir.join("results")).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

const PC_CSV: &str = "\
,Hormone,Gene,SVM score,SVM probability,Rank
0,insulin,INSR,1.234567,0.912345,1
1,leptin,LEPR,0.8,0.75,2
2,insulin,IRS1,0.5,0.71,3
";

const LNC_CSV: &str = "\
Hormone,Gene,SVM score,SVM probability
cortisol,MALAT1,0.9,0.8
";

const GENE_DOC: &str = r#"{
  "leptin": {"source": ["lep"], "target": ["lepr", "stat3"]},
  "insulin": {"source": ["ins", "ins", "gck"], "target": ["insr"]}
}"#;

const TISSUE_DOC: &str = r#"{
  "insulin": {"source": ["pancreas"], "target": ["liver", "muscle", "adipose"]}
}"#;

fn write_all_datasets(dir: &Path) {
    write_file(&dir.join(PROTEIN_CODING_TABLE), PC_CSV);
    write_file(&dir.join(LNCRNA_TABLE), LNC_CSV);
    write_file(&dir.join(GENE_LEVEL_DOC), GENE_DOC);
    write_file(&dir.join(TISSUE_LEVEL_DOC), TISSUE_DOC);
}

#[test]
fn test_load_full_store() {
    let dir = make_temp_dir();
    write_all_datasets(&dir);

    let store = DatasetStore::load(&DataLayout::new(&dir)).unwrap();
    let pc = store.table(Variant::ProteinCoding);
    assert_eq!(pc.len(), 3);
    assert_eq!(pc[0].category, "insulin");
    assert_eq!(pc[0].entity, "INSR");
    assert_eq!(pc[0].score, 1.234567);
    assert_eq!(pc[0].probability, 0.912345);
    assert_eq!(store.table(Variant::LongNonCoding).len(), 1);

    let genes = store.category_map(Scope::GeneLevel);
    assert_eq!(genes.len(), 2);
    assert!(store.category_map(Scope::TissueLevel).contains("insulin"));
    assert!(!store.category_map(Scope::TissueLevel).contains("leptin"));
}

#[test]
fn test_category_map_keeps_document_order() {
    let dir = make_temp_dir();
    let path = dir.join("doc.json");
    write_file(&path, GENE_DOC);
    let map = parse_category_map(&path).unwrap();
    let keys: Vec<&str> = map.keys().collect();
    assert_eq!(keys, vec!["leptin", "insulin"]);
}

#[test]
fn test_category_map_drops_duplicate_entities() {
    let dir = make_temp_dir();
    let path = dir.join("doc.json");
    write_file(&path, GENE_DOC);
    let map = parse_category_map(&path).unwrap();
    let insulin = map.get("insulin").unwrap();
    assert_eq!(insulin.source, vec!["ins".to_string(), "gck".to_string()]);
    assert_eq!(insulin.target, vec!["insr".to_string()]);
    assert!(map.get("glucagon").is_none());
}

#[test]
fn test_missing_file_fails_load() {
    let dir = make_temp_dir();
    write_all_datasets(&dir);
    fs::remove_file(dir.join(TISSUE_LEVEL_DOC)).unwrap();

    let err = DatasetStore::load(&DataLayout::new(&dir)).unwrap_err();
    assert!(matches!(err, StoreError::MissingInput(_)));
    assert!(err.to_string().contains(TISSUE_LEVEL_DOC));
}

#[test]
fn test_missing_column_fails_load() {
    let dir = make_temp_dir();
    write_all_datasets(&dir);
    write_file(
        &dir.join(LNCRNA_TABLE),
        "Hormone,Gene,SVM score\ncortisol,MALAT1,0.9\n",
    );

    let err = DatasetStore::load(&DataLayout::new(&dir)).unwrap_err();
    match err {
        StoreError::Parse(msg) => assert!(msg.contains("SVM probability")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_numeric_score_is_csv_error() {
    let dir = make_temp_dir();
    let path = dir.join("bad.csv");
    write_file(
        &path,
        "Hormone,Gene,SVM score,SVM probability\ninsulin,INSR,high,0.9\n",
    );
    assert!(matches!(
        parse_predictions(&path),
        Err(StoreError::Csv { .. })
    ));
}

#[test]
fn test_malformed_json_fails() {
    let dir = make_temp_dir();
    let path = dir.join("doc.json");
    write_file(&path, "{\"insulin\": {\"source\": [\"ins\"]");
    assert!(matches!(
        parse_category_map(&path),
        Err(StoreError::Json { .. })
    ));
}

#[test]
fn test_json_schema_mismatch_fails() {
    let dir = make_temp_dir();
    let path = dir.join("doc.json");
    write_file(&path, r#"{"insulin": {"source": ["ins"]}}"#);
    match parse_category_map(&path) {
        Err(StoreError::Parse(msg)) => assert!(msg.contains("insulin")),
        other => panic!("unexpected result: {other:?}"),
    }

    write_file(&path, r#"["insulin"]"#);
    assert!(matches!(
        parse_category_map(&path),
        Err(StoreError::Parse(_))
    ));
}

#[test]
fn test_gz_sibling_is_loaded() {
    let dir = make_temp_dir();
    write_all_datasets(&dir);
    fs::remove_file(dir.join(PROTEIN_CODING_TABLE)).unwrap();
    write_gz(
        &dir.join(format!("{PROTEIN_CODING_TABLE}.gz")),
        PC_CSV,
    );

    let path = find_dataset_path(&dir, PROTEIN_CODING_TABLE).unwrap();
    assert!(path.to_string_lossy().ends_with(".csv.gz"));

    let store = DatasetStore::load(&DataLayout::new(&dir)).unwrap();
    assert_eq!(store.table(Variant::ProteinCoding).len(), 3);
}

#[test]
fn test_plain_file_preferred_over_gz() {
    let dir = make_temp_dir();
    write_all_datasets(&dir);
    write_gz(&dir.join(format!("{GENE_LEVEL_DOC}.gz")), "{}");
    let path = find_dataset_path(&dir, GENE_LEVEL_DOC).unwrap();
    assert_eq!(path, dir.join(GENE_LEVEL_DOC));
}
