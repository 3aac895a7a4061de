use std::num::NonZeroUsize;

use clap::ValueEnum;

use crate::model::hormones::DEFAULT_HORMONE;

/// Lowest SVM probability kept by the offline filter; only quoted in output.
pub const PROBABILITY_THRESHOLD_LABEL: &str = "0.70";

const EXPLORER_GRID_WIDTH: NonZeroUsize = NonZeroUsize::new(8).unwrap();
const PREVIEW_GRID_WIDTH: NonZeroUsize = NonZeroUsize::new(12).unwrap();
const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProfileName {
    Explorer,
    Preview,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    All,
    TopK(usize),
}

#[derive(Debug, Clone)]
pub struct DeploymentProfile {
    pub name: ProfileName,
    pub grid_width: NonZeroUsize,
    pub table_mode: TableMode,
    pub top_k: usize,
    pub page_size: NonZeroUsize,
    pub default_category: &'static str,
}

impl DeploymentProfile {
    pub fn explorer_v1() -> Self {
        Self {
            name: ProfileName::Explorer,
            grid_width: EXPLORER_GRID_WIDTH,
            table_mode: TableMode::All,
            top_k: 50,
            page_size: DEFAULT_PAGE_SIZE,
            default_category: DEFAULT_HORMONE,
        }
    }

    pub fn preview_v1() -> Self {
        let mut base = Self::explorer_v1();
        base.name = ProfileName::Preview;
        base.grid_width = PREVIEW_GRID_WIDTH;
        base.table_mode = TableMode::TopK(base.top_k);
        base
    }

    pub fn from_name(name: ProfileName) -> Self {
        match name {
            ProfileName::Explorer => Self::explorer_v1(),
            ProfileName::Preview => Self::preview_v1(),
        }
    }
}
