use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EffectError;

///
/// Genic or regulatory annotation region a variant may overlap.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ElementType {
    #[serde(rename = "gene")]
    Gene,
    #[serde(rename = "transcript")]
    Transcript,
    #[serde(rename = "exon")]
    Exon,
    #[serde(rename = "UTR")]
    Utr,
    #[serde(rename = "promoter")]
    Promoter,
}

impl ElementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Gene => "gene",
            ElementType::Transcript => "transcript",
            ElementType::Exon => "exon",
            ElementType::Utr => "UTR",
            ElementType::Promoter => "promoter",
        }
    }
}

impl FromStr for ElementType {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gene" => Ok(ElementType::Gene),
            "transcript" => Ok(ElementType::Transcript),
            "exon" => Ok(ElementType::Exon),
            "UTR" => Ok(ElementType::Utr),
            "promoter" => Ok(ElementType::Promoter),
            _ => Err(EffectError::MalformedRecord(format!(
                "unknown element type: {}",
                s
            ))),
        }
    }
}

impl Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
