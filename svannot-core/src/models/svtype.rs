use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EffectError;

///
/// Structural variant type, as reported in the `svtype` column of a
/// standardized SV call set.
///
/// `Bnd` and `Ctx` are classified identically; they stay distinct here so
/// the original tag can be echoed back into output tables.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SvType {
    #[serde(rename = "DEL")]
    Del,
    #[serde(rename = "DUP")]
    Dup,
    #[serde(rename = "INV")]
    Inv,
    #[serde(rename = "BND")]
    Bnd,
    #[serde(rename = "CTX")]
    Ctx,
}

impl SvType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SvType::Del => "DEL",
            SvType::Dup => "DUP",
            SvType::Inv => "INV",
            SvType::Bnd => "BND",
            SvType::Ctx => "CTX",
        }
    }
}

impl FromStr for SvType {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEL" => Ok(SvType::Del),
            "DUP" => Ok(SvType::Dup),
            "INV" => Ok(SvType::Inv),
            "BND" => Ok(SvType::Bnd),
            "CTX" => Ok(SvType::Ctx),
            _ => Err(EffectError::InvalidVariantType(s.to_string())),
        }
    }
}

impl Display for SvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
