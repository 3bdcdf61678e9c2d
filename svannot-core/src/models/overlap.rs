use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EffectError;

///
/// How a variant's extent relates to a genic element's extent.
///
/// - `BothInside`: the element is entirely contained within the variant
///   (or, for point-like breakend entries, simply hit).
/// - `OneInside`: exactly one breakpoint of the variant falls inside the
///   element; the element is not fully enclosed.
/// - `Span`: the variant's extent entirely contains the element.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OverlapKind {
    #[serde(rename = "BOTH-INSIDE")]
    BothInside,
    #[serde(rename = "ONE-INSIDE")]
    OneInside,
    #[serde(rename = "SPAN")]
    Span,
}

impl OverlapKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverlapKind::BothInside => "BOTH-INSIDE",
            OverlapKind::OneInside => "ONE-INSIDE",
            OverlapKind::Span => "SPAN",
        }
    }
}

impl FromStr for OverlapKind {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BOTH-INSIDE" => Ok(OverlapKind::BothInside),
            "ONE-INSIDE" => Ok(OverlapKind::OneInside),
            "SPAN" => Ok(OverlapKind::Span),
            _ => Err(EffectError::MalformedRecord(format!(
                "unknown overlap kind: {}",
                s
            ))),
        }
    }
}

impl Display for OverlapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
