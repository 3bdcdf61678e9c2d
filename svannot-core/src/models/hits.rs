use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::models::Effect;

///
/// One raw overlap hit from the upstream intersection step: a single
/// (variant, gene, element, kind) observation. The `svtype` tag is kept as
/// read so it can be echoed verbatim into output rows.
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OverlapRecord {
    pub name: String,
    pub svtype: String,
    pub gene_name: String,
    pub element_type: String,
    pub hit_type: String,
}

///
/// One classified output row: the effect of one variant on one gene.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneEffect {
    pub name: String,
    pub svtype: String,
    pub gene_name: String,
    pub effect: Effect,
}

impl Display for GeneEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.name, self.svtype, self.gene_name, self.effect
        )
    }
}
