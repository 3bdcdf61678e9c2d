//! Genic effect classification for structural variants.
//!
//! Given, for one (variant, gene) pair, the set of genic element types the
//! variant overlaps and how it overlaps each of them, this crate assigns a
//! single categorical effect label. Four variant-type-specific rule trees
//! (deletion, duplication, inversion, breakend) encode the decision logic;
//! a dispatcher selects the tree from the variant type.
//!
//! ## Quick Start
//!
//! ```rust
//! use svannot_core::models::{DisruptionRecord, ElementType, OverlapKind, SvType, Effect};
//! use svannot_effects::classify;
//!
//! // a deletion that removes an exon of this gene
//! let mut record = DisruptionRecord::new();
//! record.insert(ElementType::Exon, OverlapKind::BothInside);
//! record.insert(ElementType::Gene, OverlapKind::OneInside);
//!
//! assert_eq!(classify(&record, SvType::Del), Effect::Lof);
//! ```
//!
//! The [`aggregate`] module holds the batch glue: grouping raw overlap
//! records into one [`DisruptionRecord`](svannot_core::models::DisruptionRecord)
//! per (variant, gene) pair and producing the final effects table. The
//! [`table`] module reads and writes the tab-separated representation of both.

pub mod aggregate;
pub mod classify;
pub mod table;

// re-exports
pub use self::aggregate::{classify_effects, classify_effects_lenient};
pub use self::classify::{classify, classify_raw};

/// Constants used throughout the crate.
pub mod consts {
    /// The command name for effect classification.
    pub const EFFECTS_CMD: &str = "effects";

    /// Required columns in an overlap hits table.
    pub const HIT_COLUMNS: [&str; 5] =
        ["name", "svtype", "gene_name", "element_type", "hit_type"];

    /// Header of the classified output table.
    pub const EFFECT_HEADER: &str = "name\tsvtype\tgene_name\teffect";
}
