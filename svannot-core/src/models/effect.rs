use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

///
/// Predicted functional effect of a structural variant on one gene.
///
/// Exactly one label is assigned per (variant, gene) pair. Label spellings
/// match the effect vocabulary used in downstream annotation tables, which
/// is why `Promoter` and `NoEffect` render lowercase.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    #[serde(rename = "LOF")]
    Lof,
    #[serde(rename = "COPY_GAIN")]
    CopyGain,
    #[serde(rename = "DUP_PARTIAL")]
    DupPartial,
    #[serde(rename = "UTR")]
    Utr,
    #[serde(rename = "INTRONIC")]
    Intronic,
    #[serde(rename = "GENE_OTHER")]
    GeneOther,
    #[serde(rename = "promoter")]
    Promoter,
    #[serde(rename = "INV_SPAN")]
    InvSpan,
    #[serde(rename = "no_effect")]
    NoEffect,
}

impl Effect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Effect::Lof => "LOF",
            Effect::CopyGain => "COPY_GAIN",
            Effect::DupPartial => "DUP_PARTIAL",
            Effect::Utr => "UTR",
            Effect::Intronic => "INTRONIC",
            Effect::GeneOther => "GENE_OTHER",
            Effect::Promoter => "promoter",
            Effect::InvSpan => "INV_SPAN",
            Effect::NoEffect => "no_effect",
        }
    }
}

impl Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
