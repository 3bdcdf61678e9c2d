use thiserror::Error;

#[derive(Error, Debug)]
pub enum EffectError {
    #[error("Unrecognized variant type: {0}")]
    InvalidVariantType(String),

    #[error("Malformed disruption record: {0}")]
    MalformedRecord(String),
}

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Missing required column in header: {0}")]
    MissingColumn(String),

    #[error("Line {0} has too few fields")]
    ShortRow(usize),

    #[error("Input file has no header line")]
    EmptyFile,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
