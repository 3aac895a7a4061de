use std::num::NonZeroUsize;

use serde::Serialize;

/// Fixed-width arrangement of entity names, read row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayGrid {
    pub width: usize,
    pub rows: Vec<Vec<String>>,
}

impl DisplayGrid {
    pub fn empty(width: NonZeroUsize) -> Self {
        Self {
            width: width.get(),
            rows: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of non-blank cells.
    pub fn filled(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

pub fn build_grid<S: AsRef<str>>(entities: &[S], width: NonZeroUsize) -> DisplayGrid {
    let w = width.get();
    let n_rows = entities.len().div_ceil(w);
    let mut rows = Vec::with_capacity(n_rows);
    for chunk in entities.chunks(w) {
        let mut row: Vec<String> = chunk
            .iter()
            .map(|name| name.as_ref().to_uppercase())
            .collect();
        row.resize(w, String::new());
        rows.push(row);
    }
    DisplayGrid { width: w, rows }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/grid.rs"]
mod tests;
