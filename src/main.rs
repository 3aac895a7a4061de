mod export;
mod logging;
mod model;
mod pipeline;
mod report;
mod store;

use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::export::{ExportDataset, ExportError, export_dataset, stream_dataset};
use crate::model::hormones::{PREDICTION_HORMONES, is_prediction_hormone};
use crate::model::profile::{DeploymentProfile, ProfileName, TableMode};
use crate::model::{Scope, Variant};
use crate::pipeline::filter::{MatchRule, prefix_collisions};
use crate::pipeline::rank::SortKey;
use crate::report::json::{KeyList, render_json};
use crate::report::text::{render_explore_text, render_predictions_text};
use crate::report::{TableOptions, build_explore_view, build_predictions_view, render_summary};
use crate::store::{DataLayout, DatasetStore, StoreError};

#[derive(Debug, Parser)]
#[command(name = "hgv1-browser", version)]
#[command(about = "Browse hormone-gene predictions and the HGv1 source/target datasets")]
struct Cli {
    /// Directory holding `results/` and the two HGv1 JSON documents.
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,

    #[arg(long, global = true, value_enum, default_value_t = ProfileName::Explorer)]
    profile: ProfileName,

    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Match hormone names exactly instead of by prefix.
    #[arg(long, global = true)]
    exact_match: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KeySource {
    GeneLevel,
    TissueLevel,
    Predictions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    All,
    TopK,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List selectable hormone names.
    Hormones {
        #[arg(long, value_enum, default_value_t = KeySource::GeneLevel)]
        scope: KeySource,
    },
    /// Source/target tissues and genes for one hormone.
    Explore {
        key: Option<String>,
        #[arg(long)]
        width: Option<NonZeroUsize>,
    },
    /// Predicted associations for one hormone.
    Predictions(PredictionsArgs),
    /// One-line count of predictions for one hormone.
    Summary {
        key: Option<String>,
        #[arg(long, value_enum, default_value_t = Variant::ProteinCoding)]
        variant: Variant,
    },
    /// Copy a dataset file under its download name (`--out -` for stdout).
    Export {
        #[arg(value_enum)]
        dataset: ExportDataset,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Debug, Args)]
struct PredictionsArgs {
    key: Option<String>,
    #[arg(long, value_enum, default_value_t = Variant::ProteinCoding)]
    variant: Variant,
    /// Defaults to the profile's mode.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    #[arg(long)]
    top: Option<usize>,
    /// One-based page number.
    #[arg(long, default_value_t = NonZeroUsize::MIN)]
    page: NonZeroUsize,
    #[arg(long)]
    page_size: Option<NonZeroUsize>,
    /// Column with optional direction, e.g. `score:desc`; repeatable.
    #[arg(long = "sort", value_parser = parse_sort_key)]
    sort: Vec<SortKey>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let profile = DeploymentProfile::from_name(cli.profile);
    let rule = if cli.exact_match {
        MatchRule::Exact
    } else {
        MatchRule::Prefix
    };
    tracing::debug!(profile = ?profile.name, ?rule, "configuration resolved");
    let layout = DataLayout::new(&cli.data_dir);
    let store = DatasetStore::load(&layout)?;

    let rendered = match cli.command {
        Command::Hormones { scope } => render_hormones(&store, scope, cli.format)?,
        Command::Explore { key, width } => {
            let width = width.unwrap_or(profile.grid_width);
            if let Some(k) = key.as_deref()
                && !store.category_map(Scope::GeneLevel).contains(k)
            {
                tracing::warn!(hormone = k, "hormone not present in the gene-level dataset");
            }
            let view = build_explore_view(&store, key.as_deref(), width);
            match cli.format {
                OutputFormat::Text => render_explore_text(&view),
                OutputFormat::Json => render_json(&view)?,
            }
        }
        Command::Predictions(args) => {
            let key = args
                .key
                .clone()
                .unwrap_or_else(|| profile.default_category.to_string());
            let variant = args.variant;
            let opts = table_options(&args, &profile, rule);
            warn_on_selection(&store, &key, variant, rule);
            let view = build_predictions_view(&store, &key, variant, &opts);
            match cli.format {
                OutputFormat::Text => render_predictions_text(&view),
                OutputFormat::Json => render_json(&view)?,
            }
        }
        Command::Summary { key, variant } => {
            let summary = render_summary(&store, key.as_deref(), variant, rule);
            match cli.format {
                OutputFormat::Text => summary.map(|s| s + "\n").unwrap_or_default(),
                OutputFormat::Json => render_json(&summary)?,
            }
        }
        Command::Export { dataset, out } => {
            if out.as_os_str() == "-" {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                stream_dataset(&layout, dataset, &mut lock)?;
                lock.flush()?;
                return Ok(());
            }
            let outcome = export_dataset(&layout, dataset, &out)?;
            match cli.format {
                OutputFormat::Text => format!("{}\n", outcome.destination.display()),
                OutputFormat::Json => render_json(&serde_json::json!({
                    "dataset": outcome.dataset.client_filename(),
                    "source": outcome.source.display().to_string(),
                    "destination": outcome.destination.display().to_string(),
                    "bytes": outcome.bytes,
                }))?,
            }
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    if cli.format == OutputFormat::Json {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

fn parse_sort_key(s: &str) -> Result<SortKey, String> {
    SortKey::parse(s).ok_or_else(|| {
        format!("invalid sort key {s:?} (use hormone|gene|score|probability with optional :asc|:desc)")
    })
}

fn table_options(
    args: &PredictionsArgs,
    profile: &DeploymentProfile,
    rule: MatchRule,
) -> TableOptions {
    let top = args.top.unwrap_or(profile.top_k);
    let mode = match (args.mode, profile.table_mode) {
        (Some(ModeArg::All), _) => TableMode::All,
        (Some(ModeArg::TopK), _) => TableMode::TopK(top),
        (None, TableMode::TopK(_)) => TableMode::TopK(top),
        (None, TableMode::All) if args.top.is_some() => TableMode::TopK(top),
        (None, TableMode::All) => TableMode::All,
    };
    TableOptions {
        mode,
        rule,
        sort: args.sort.clone(),
        page: args.page.get() - 1,
        page_size: args.page_size.unwrap_or(profile.page_size),
    }
}

fn warn_on_selection(store: &DatasetStore, key: &str, variant: Variant, rule: MatchRule) {
    if !is_prediction_hormone(key) {
        tracing::warn!(hormone = key, "hormone is not in the prediction browser's list");
    }
    if rule == MatchRule::Prefix {
        let collisions = prefix_collisions(store.table(variant), key);
        if !collisions.is_empty() {
            tracing::warn!(
                hormone = key,
                also_matched = %collisions.join(", "),
                "prefix match includes other hormones; pass --exact-match to exclude them"
            );
        }
    }
}

fn render_hormones(
    store: &DatasetStore,
    scope: KeySource,
    format: OutputFormat,
) -> Result<String, CliError> {
    let (label, keys): (&str, Vec<&str>) = match scope {
        KeySource::GeneLevel => (
            Scope::GeneLevel.label(),
            store.category_map(Scope::GeneLevel).keys().collect(),
        ),
        KeySource::TissueLevel => (
            Scope::TissueLevel.label(),
            store.category_map(Scope::TissueLevel).keys().collect(),
        ),
        KeySource::Predictions => ("predictions", PREDICTION_HORMONES.to_vec()),
    };
    Ok(match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for key in &keys {
                out.push_str(key);
                out.push('\n');
            }
            out
        }
        OutputFormat::Json => render_json(&KeyList { scope: label, keys })?,
    })
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
