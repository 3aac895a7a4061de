use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::model::{Scope, Variant};
use crate::store::open::is_gz;
use crate::store::{DataLayout, StoreError, find_dataset_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportDataset {
    ProteinCoding,
    Lncrna,
    Hgv1Gene,
    Hgv1Tissue,
}

impl ExportDataset {
    pub fn source_name(self) -> &'static str {
        match self {
            ExportDataset::ProteinCoding => DataLayout::table_name(Variant::ProteinCoding),
            ExportDataset::Lncrna => DataLayout::table_name(Variant::LongNonCoding),
            ExportDataset::Hgv1Gene => DataLayout::document_name(Scope::GeneLevel),
            ExportDataset::Hgv1Tissue => DataLayout::document_name(Scope::TissueLevel),
        }
    }

    pub fn client_filename(self) -> &'static str {
        match self {
            ExportDataset::ProteinCoding => "protein coding.csv",
            ExportDataset::Lncrna => "lncRNA.csv",
            ExportDataset::Hgv1Gene => "HGv1_Gene.json",
            ExportDataset::Hgv1Tissue => "HGv1_Tissue.json",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("dataset source unavailable: {0}")]
    MissingSource(String),
    #[error("failed to export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub dataset: ExportDataset,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub bytes: u64,
}

pub fn resolve_source(layout: &DataLayout, dataset: ExportDataset) -> Result<PathBuf, ExportError> {
    find_dataset_path(&layout.data_dir, dataset.source_name()).map_err(|e| match e {
        StoreError::MissingInput(msg) => ExportError::MissingSource(msg),
        other => ExportError::MissingSource(other.to_string()),
    })
}

/// Client-facing name for a resolved source; gzip sources keep their bytes
/// and say so in the name.
pub fn destination_name(dataset: ExportDataset, source: &Path) -> String {
    if is_gz(source) {
        format!("{}.gz", dataset.client_filename())
    } else {
        dataset.client_filename().to_string()
    }
}

/// Copies the dataset verbatim into `out_dir`. The bytes land in a `.part`
/// file first and are renamed only once fully written.
pub fn export_dataset(
    layout: &DataLayout,
    dataset: ExportDataset,
    out_dir: &Path,
) -> Result<ExportOutcome, ExportError> {
    let source = resolve_source(layout, dataset)?;
    let destination = out_dir.join(destination_name(dataset, &source));
    let partial = out_dir.join(format!("{}.part", destination_name(dataset, &source)));

    fs::create_dir_all(out_dir).map_err(|source| ExportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let bytes = match copy_into(&source, &partial) {
        Ok(n) => n,
        Err(err) => {
            let _ = fs::remove_file(&partial);
            return Err(err);
        }
    };

    if let Err(source_err) = fs::rename(&partial, &destination) {
        let _ = fs::remove_file(&partial);
        return Err(ExportError::Io {
            path: destination,
            source: source_err,
        });
    }

    tracing::info!(
        dataset = dataset.client_filename(),
        destination = %destination.display(),
        bytes,
        "dataset exported"
    );

    Ok(ExportOutcome {
        dataset,
        source,
        destination,
        bytes,
    })
}

fn copy_into(source: &Path, partial: &Path) -> Result<u64, ExportError> {
    let mut input = File::open(source).map_err(|e| ExportError::Io {
        path: source.to_path_buf(),
        source: e,
    })?;
    let out_err = |e| ExportError::Io {
        path: partial.to_path_buf(),
        source: e,
    };
    let mut output = BufWriter::new(File::create(partial).map_err(out_err)?);
    let bytes = io::copy(&mut input, &mut output).map_err(out_err)?;
    output.flush().map_err(out_err)?;
    Ok(bytes)
}

/// Streams the dataset bytes to any writer, e.g. stdout.
pub fn stream_dataset<W: Write>(
    layout: &DataLayout,
    dataset: ExportDataset,
    writer: &mut W,
) -> Result<u64, ExportError> {
    let source = resolve_source(layout, dataset)?;
    let mut input = File::open(&source).map_err(|e| ExportError::Io {
        path: source.clone(),
        source: e,
    })?;
    io::copy(&mut input, writer).map_err(|e| ExportError::Io {
        path: source.clone(),
        source: e,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/export/tests.rs"]
mod tests;
