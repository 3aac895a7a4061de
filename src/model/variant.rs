use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Variant {
    /// Protein-coding gene predictions.
    #[value(name = "gene")]
    ProteinCoding,
    /// Long non-coding RNA predictions.
    #[value(name = "lncrna")]
    LongNonCoding,
}

impl Variant {
    /// Singular noun used in the summary line ("genes", "lncrnas").
    pub fn label(self) -> &'static str {
        match self {
            Variant::ProteinCoding => "gene",
            Variant::LongNonCoding => "lncrna",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Scope {
    GeneLevel,
    TissueLevel,
}

impl Scope {
    pub fn label(self) -> &'static str {
        match self {
            Scope::GeneLevel => "gene-level",
            Scope::TissueLevel => "tissue-level",
        }
    }
}
