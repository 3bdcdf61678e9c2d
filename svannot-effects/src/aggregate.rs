//! Batch glue: group raw overlap hits per (variant, gene) pair and run
//! the classifier over each group.

use fxhash::{FxHashMap, FxHashSet};

use svannot_core::errors::EffectError;
use svannot_core::models::{DisruptionRecord, GeneEffect, OverlapRecord};

use crate::classify::classify_raw;

type GroupKey = (String, String, String);

/// A (variant, gene) group the classifier could not label, with the
/// reason. Produced by [`classify_effects_lenient`].
#[derive(Debug)]
pub struct SkippedGroup {
    pub name: String,
    pub svtype: String,
    pub gene_name: String,
    pub error: EffectError,
}

/// Group hits by (name, svtype, gene_name), deduplicating the observed
/// (element_type, hit_type) string pairs per group. Tag validation is
/// deferred so a lenient caller can drop one bad group without losing
/// the rest of the batch.
fn group_hits(
    records: impl IntoIterator<Item = OverlapRecord>,
) -> FxHashMap<GroupKey, FxHashSet<(String, String)>> {
    let mut groups: FxHashMap<GroupKey, FxHashSet<(String, String)>> = FxHashMap::default();
    for rec in records {
        groups
            .entry((rec.name, rec.svtype, rec.gene_name))
            .or_default()
            .insert((rec.element_type, rec.hit_type));
    }
    groups
}

/// Parse one group's string pairs into a typed disruption record.
fn build_record(pairs: &FxHashSet<(String, String)>) -> Result<DisruptionRecord, EffectError> {
    let mut record = DisruptionRecord::new();
    for (element, kind) in pairs {
        record.insert(element.parse()?, kind.parse()?);
    }
    Ok(record)
}

fn sorted_groups(
    records: impl IntoIterator<Item = OverlapRecord>,
) -> Vec<(GroupKey, FxHashSet<(String, String)>)> {
    let mut groups: Vec<_> = group_hits(records).into_iter().collect();
    groups.sort_by(|a, b| a.0.cmp(&b.0));
    groups
}

///
/// Classify every (variant, gene) group in a batch of overlap hits.
///
/// Rows come back sorted by (name, svtype, gene_name), so re-running on
/// the same input reproduces the output byte for byte. The first
/// malformed group or unrecognized variant type aborts the whole batch.
///
pub fn classify_effects(
    records: impl IntoIterator<Item = OverlapRecord>,
) -> Result<Vec<GeneEffect>, EffectError> {
    let groups = sorted_groups(records);

    let mut rows = Vec::with_capacity(groups.len());
    for ((name, svtype, gene_name), pairs) in groups {
        let record = build_record(&pairs)?;
        let effect = classify_raw(&record, &svtype)?;
        rows.push(GeneEffect {
            name,
            svtype,
            gene_name,
            effect,
        });
    }

    Ok(rows)
}

///
/// Like [`classify_effects`], but a group that fails to classify is
/// reported in the second return value instead of aborting the batch.
/// The caller decides what to do with the skipped groups.
///
pub fn classify_effects_lenient(
    records: impl IntoIterator<Item = OverlapRecord>,
) -> (Vec<GeneEffect>, Vec<SkippedGroup>) {
    let groups = sorted_groups(records);

    let mut rows = Vec::with_capacity(groups.len());
    let mut skipped = Vec::new();
    for ((name, svtype, gene_name), pairs) in groups {
        let result = build_record(&pairs).and_then(|record| classify_raw(&record, &svtype));
        match result {
            Ok(effect) => rows.push(GeneEffect {
                name,
                svtype,
                gene_name,
                effect,
            }),
            Err(error) => skipped.push(SkippedGroup {
                name,
                svtype,
                gene_name,
                error,
            }),
        }
    }

    (rows, skipped)
}
