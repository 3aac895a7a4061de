use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::store::StoreError;
use crate::store::open::open_maybe_gz;

/// Source and target collections for one category, each an ordered set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryEntry {
    pub source: Vec<String>,
    pub target: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    source: Vec<String>,
    target: Vec<String>,
}

/// Category key to source/target collections, in document order.
#[derive(Debug, Clone, Default)]
pub struct CategoryGeneMap {
    entries: Vec<(String, CategoryEntry)>,
    index: HashMap<String, usize>,
}

impl CategoryGeneMap {
    pub fn from_entries(entries: Vec<(String, CategoryEntry)>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, (key, _)) in entries.iter().enumerate() {
            index.insert(key.clone(), i);
        }
        Self { entries, index }
    }

    pub fn get(&self, key: &str) -> Option<&CategoryEntry> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn parse_category_map(path: &Path) -> Result<CategoryGeneMap, StoreError> {
    let reader = open_maybe_gz(path)?;
    let json_err = |source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    };

    let doc: Value = serde_json::from_reader(reader).map_err(json_err)?;
    let Value::Object(object) = doc else {
        return Err(StoreError::Parse(format!(
            "{}: top level must be an object keyed by category",
            path.display()
        )));
    };

    category_map_from_object(object).map_err(|e| match e {
        StoreError::Parse(msg) => StoreError::Parse(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

pub fn category_map_from_object(object: Map<String, Value>) -> Result<CategoryGeneMap, StoreError> {
    let mut entries = Vec::with_capacity(object.len());
    for (key, value) in object {
        let raw: RawEntry = serde_json::from_value(value)
            .map_err(|e| StoreError::Parse(format!("category {key:?}: {e}")))?;
        let entry = CategoryEntry {
            source: dedup_ordered(&key, "source", raw.source),
            target: dedup_ordered(&key, "target", raw.target),
        };
        entries.push((key, entry));
    }
    Ok(CategoryGeneMap::from_entries(entries))
}

fn dedup_ordered(key: &str, side: &str, names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(names.len());
    let mut out = Vec::with_capacity(names.len());
    for name in names {
        if seen.contains(&name) {
            tracing::warn!(
                category = key,
                side,
                name = %name,
                "duplicate entity in lookup document; keeping first"
            );
            continue;
        }
        seen.insert(name.clone());
        out.push(name);
    }
    out
}
