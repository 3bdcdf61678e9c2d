use std::collections::{HashMap, HashSet};

use crate::errors::EffectError;
use crate::models::{ElementType, OverlapKind};

/// Separator between element type and overlap kind in flattened
/// `element_hit` tokens, e.g. `exon__BOTH-INSIDE`.
pub const ELEMENT_HIT_SEP: &str = "__";

///
/// The set of genic elements one structural variant overlaps in one gene,
/// keyed by element type, with the overlap kinds observed for each.
///
/// A key is present exactly when that element type was overlapped; the
/// kind set for a present key is never empty. Built once per
/// (variant, gene) group by the aggregation step and consumed once by the
/// classifier.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisruptionRecord {
    hits: HashMap<ElementType, HashSet<OverlapKind>>,
}

impl DisruptionRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observed (element, kind) overlap. Duplicates collapse.
    pub fn insert(&mut self, element: ElementType, kind: OverlapKind) {
        self.hits.entry(element).or_default().insert(kind);
    }

    /// Was this element type overlapped at all?
    pub fn hit(&self, element: ElementType) -> bool {
        self.hits.contains_key(&element)
    }

    /// Was this element type overlapped with this specific kind?
    /// An absent element key reads as false.
    pub fn has(&self, element: ElementType, kind: OverlapKind) -> bool {
        self.hits
            .get(&element)
            .is_some_and(|kinds| kinds.contains(&kind))
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    ///
    /// Parse the flattened representation produced by the overlap
    /// aggregator: a comma-joined, deduplicated, order-independent list of
    /// `<element>__<kind>` tokens.
    ///
    /// An empty string yields an empty record. A token that cannot be
    /// split, or whose element or kind tag is unrecognized, is a
    /// `MalformedRecord` error naming the offending token.
    ///
    pub fn from_tokens(tokens: &str) -> Result<Self, EffectError> {
        let mut record = Self::new();
        if tokens.is_empty() {
            return Ok(record);
        }

        for token in tokens.split(',') {
            let (element, kind) = token.split_once(ELEMENT_HIT_SEP).ok_or_else(|| {
                EffectError::MalformedRecord(format!("unsplittable element_hit token: {}", token))
            })?;
            record.insert(element.parse()?, kind.parse()?);
        }

        Ok(record)
    }

    /// Render back to the flattened token list, sorted for determinism.
    pub fn to_tokens(&self) -> String {
        let mut tokens: Vec<String> = self
            .hits
            .iter()
            .flat_map(|(element, kinds)| {
                kinds
                    .iter()
                    .map(move |kind| format!("{}{}{}", element, ELEMENT_HIT_SEP, kind))
            })
            .collect();
        tokens.sort();
        tokens.join(",")
    }
}
