//! Variant-type-specific effect rule trees and their dispatcher.
//!
//! Each rule tree walks the overlapped element types in a fixed precedence
//! order (first match wins) and returns a single [`Effect`]. Which overlap
//! kinds matter differs per variant type: deletions and breakends are
//! disruptive wherever they touch, duplications only when an element is
//! fully enclosed, inversions when a breakpoint lands inside an element.

use svannot_core::errors::EffectError;
use svannot_core::models::ElementType::{Exon, Gene, Promoter, Transcript, Utr};
use svannot_core::models::OverlapKind::{BothInside, OneInside, Span};
use svannot_core::models::{DisruptionRecord, Effect, ElementType, SvType};

///
/// Classify the genic effect of one structural variant on one gene.
///
/// Pure function of the disruption record and variant type; `Bnd` and
/// `Ctx` share the breakend rule.
///
pub fn classify(record: &DisruptionRecord, svtype: SvType) -> Effect {
    match svtype {
        SvType::Del => classify_del(record),
        SvType::Dup => classify_dup(record),
        SvType::Inv => classify_inv(record),
        SvType::Bnd | SvType::Ctx => classify_bnd(record),
    }
}

///
/// Classify with the variant type still in its string form, as read from
/// an input table. A tag outside {DEL, DUP, INV, BND, CTX} fails with
/// [`EffectError::InvalidVariantType`].
///
pub fn classify_raw(record: &DisruptionRecord, svtype: &str) -> Result<Effect, EffectError> {
    Ok(classify(record, svtype.parse()?))
}

/// All deletion hits are disruptive; overlap kind is irrelevant.
fn classify_del(record: &DisruptionRecord) -> Effect {
    if record.hit(Exon) {
        return Effect::Lof;
    }
    if record.hit(Utr) {
        return Effect::Utr;
    }
    if record.hit(Transcript) {
        return Effect::Intronic;
    }
    if record.hit(Gene) {
        return Effect::GeneOther;
    }
    if record.hit(Promoter) {
        return Effect::Promoter;
    }

    Effect::NoEffect
}

/// Duplications disrupt only what they fully enclose.
fn classify_dup(record: &DisruptionRecord) -> Effect {
    if record.hit(Exon) {
        // duplication internal to exon
        if record.has(Exon, BothInside) {
            return Effect::Lof;
        }

        // duplication internal to gene, disrupting exon, is LoF;
        // duplication spanning the whole gene is copy gain;
        // anything else leaves one good copy
        if record.has(Gene, BothInside) {
            return Effect::Lof;
        }
        if record.has(Gene, Span) {
            return Effect::CopyGain;
        }
        return Effect::DupPartial;
    }

    if record.has(Utr, BothInside) {
        return Effect::Utr;
    }

    if record.has(Transcript, BothInside) {
        return Effect::Intronic;
    }

    if record.hit(Gene) {
        // hit gene boundary but not transcript/exon, likely due to
        // filtering to canonical transcript
        return Effect::GeneOther;
    }

    if record.has(Promoter, BothInside) {
        return Effect::Promoter;
    }

    Effect::NoEffect
}

/// One or both breakpoints inside an element.
fn breakpoint_inside(record: &DisruptionRecord, element: ElementType) -> bool {
    record.has(element, BothInside) || record.has(element, OneInside)
}

/// Inversions are disruptive when a breakpoint falls within a genic
/// element; spanning an element without touching it is not.
fn classify_inv(record: &DisruptionRecord) -> Effect {
    if record.hit(Exon) {
        // breakpoint disrupts exon -> LoF
        if breakpoint_inside(record, Exon) {
            return Effect::Lof;
        }

        // exon only spanned, but gene itself disrupted -> LoF
        if breakpoint_inside(record, Gene) {
            return Effect::Lof;
        }

        // inversion spanning the gene
        return Effect::InvSpan;
    }

    if breakpoint_inside(record, Utr) {
        return Effect::Utr;
    }

    if record.has(Transcript, BothInside) {
        return Effect::Intronic;
    }

    if record.hit(Gene) {
        // hit gene boundary but not transcript/exon, likely due to
        // filtering to canonical transcript
        return Effect::GeneOther;
    }

    if breakpoint_inside(record, Promoter) {
        return Effect::Promoter;
    }

    Effect::NoEffect
}

/// A breakpoint anywhere in a transcript is already loss-of-function, so
/// the breakend precedence differs: transcript outranks gene outranks UTR.
fn classify_bnd(record: &DisruptionRecord) -> Effect {
    if record.hit(Exon) {
        return Effect::Lof;
    }
    if record.hit(Transcript) {
        return Effect::Lof;
    }
    if record.hit(Gene) {
        return Effect::GeneOther;
    }
    if record.hit(Utr) {
        return Effect::Utr;
    }
    if record.hit(Promoter) {
        return Effect::Promoter;
    }

    Effect::NoEffect
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use svannot_core::models::OverlapKind;

    fn record(pairs: &[(ElementType, OverlapKind)]) -> DisruptionRecord {
        let mut r = DisruptionRecord::new();
        for (element, kind) in pairs {
            r.insert(*element, *kind);
        }
        r
    }

    #[rstest]
    #[case(SvType::Del)]
    #[case(SvType::Dup)]
    #[case(SvType::Inv)]
    #[case(SvType::Bnd)]
    #[case(SvType::Ctx)]
    fn test_empty_record_has_no_effect(#[case] svtype: SvType) {
        assert_eq!(classify(&DisruptionRecord::new(), svtype), Effect::NoEffect);
    }

    #[rstest]
    #[case(SvType::Del)]
    #[case(SvType::Dup)]
    #[case(SvType::Inv)]
    #[case(SvType::Bnd)]
    fn test_deterministic(#[case] svtype: SvType) {
        let r = record(&[(Exon, Span), (Gene, OneInside), (Utr, BothInside)]);
        assert_eq!(classify(&r, svtype), classify(&r, svtype));
    }

    //
    // DEL
    //

    #[rstest]
    #[case(BothInside)]
    #[case(OneInside)]
    #[case(Span)]
    fn test_del_exon_any_kind_is_lof(#[case] kind: OverlapKind) {
        assert_eq!(classify(&record(&[(Exon, kind)]), SvType::Del), Effect::Lof);
    }

    #[rstest]
    #[case(&[(Utr, Span)], Effect::Utr)]
    #[case(&[(Transcript, OneInside)], Effect::Intronic)]
    #[case(&[(Gene, OneInside)], Effect::GeneOther)]
    #[case(&[(Promoter, Span)], Effect::Promoter)]
    fn test_del_precedence_tail(
        #[case] pairs: &[(ElementType, OverlapKind)],
        #[case] expected: Effect,
    ) {
        assert_eq!(classify(&record(pairs), SvType::Del), expected);
    }

    #[test]
    fn test_del_utr_outranks_transcript() {
        let r = record(&[(Utr, OneInside), (Transcript, OneInside), (Gene, OneInside)]);
        assert_eq!(classify(&r, SvType::Del), Effect::Utr);
    }

    //
    // DUP
    //

    #[test]
    fn test_dup_exon_inside_is_lof() {
        let r = record(&[(Exon, BothInside)]);
        assert_eq!(classify(&r, SvType::Dup), Effect::Lof);
    }

    #[test]
    fn test_dup_gene_inside_is_lof() {
        // exon only spanned, but the dup is internal to the gene
        let r = record(&[(Exon, Span), (Gene, BothInside)]);
        assert_eq!(classify(&r, SvType::Dup), Effect::Lof);
    }

    #[test]
    fn test_dup_spanning_gene_is_copy_gain() {
        let r = record(&[(Exon, Span), (Gene, Span)]);
        assert_eq!(classify(&r, SvType::Dup), Effect::CopyGain);
    }

    #[test]
    fn test_dup_partial_overlap() {
        let r = record(&[(Exon, Span), (Gene, OneInside)]);
        assert_eq!(classify(&r, SvType::Dup), Effect::DupPartial);
    }

    #[test]
    fn test_dup_exon_without_gene_key_is_partial() {
        // upstream may not report a gene-body hit at all
        let r = record(&[(Exon, Span)]);
        assert_eq!(classify(&r, SvType::Dup), Effect::DupPartial);
    }

    #[test]
    fn test_dup_gene_only_is_gene_other() {
        // exon branch never fires without an exon key
        let r = record(&[(Gene, BothInside)]);
        assert_eq!(classify(&r, SvType::Dup), Effect::GeneOther);
    }

    #[test]
    fn test_dup_utr_requires_full_containment() {
        // UTR only spanned: falls through UTR and transcript to no_effect
        let r = record(&[(Utr, Span)]);
        assert_eq!(classify(&r, SvType::Dup), Effect::NoEffect);

        let r = record(&[(Utr, BothInside)]);
        assert_eq!(classify(&r, SvType::Dup), Effect::Utr);
    }

    #[rstest]
    #[case(&[(Transcript, BothInside)], Effect::Intronic)]
    #[case(&[(Transcript, Span)], Effect::NoEffect)]
    #[case(&[(Promoter, BothInside)], Effect::Promoter)]
    #[case(&[(Promoter, Span)], Effect::NoEffect)]
    fn test_dup_containment_only_steps(
        #[case] pairs: &[(ElementType, OverlapKind)],
        #[case] expected: Effect,
    ) {
        assert_eq!(classify(&record(pairs), SvType::Dup), expected);
    }

    #[test]
    fn test_dup_spanned_utr_falls_through_to_transcript() {
        let r = record(&[(Utr, Span), (Transcript, BothInside)]);
        assert_eq!(classify(&r, SvType::Dup), Effect::Intronic);
    }

    //
    // INV
    //

    #[rstest]
    #[case(BothInside)]
    #[case(OneInside)]
    fn test_inv_breakpoint_in_exon_is_lof(#[case] kind: OverlapKind) {
        assert_eq!(classify(&record(&[(Exon, kind)]), SvType::Inv), Effect::Lof);
    }

    #[test]
    fn test_inv_breakpoint_in_gene_rescues_lof() {
        let r = record(&[(Exon, Span), (Gene, OneInside)]);
        assert_eq!(classify(&r, SvType::Inv), Effect::Lof);
    }

    #[test]
    fn test_inv_spanning_gene() {
        let r = record(&[(Exon, Span), (Gene, Span)]);
        assert_eq!(classify(&r, SvType::Inv), Effect::InvSpan);

        // no gene key at all reads the same way
        let r = record(&[(Exon, Span)]);
        assert_eq!(classify(&r, SvType::Inv), Effect::InvSpan);
    }

    #[rstest]
    #[case(&[(Utr, OneInside)], Effect::Utr)]
    #[case(&[(Utr, Span)], Effect::NoEffect)]
    #[case(&[(Transcript, BothInside)], Effect::Intronic)]
    #[case(&[(Promoter, OneInside)], Effect::Promoter)]
    #[case(&[(Promoter, Span)], Effect::NoEffect)]
    fn test_inv_precedence_tail(
        #[case] pairs: &[(ElementType, OverlapKind)],
        #[case] expected: Effect,
    ) {
        assert_eq!(classify(&record(pairs), SvType::Inv), expected);
    }

    #[test]
    fn test_inv_transcript_one_inside_falls_to_gene() {
        // only full containment counts as intronic; the gene-body hit
        // that accompanies a real transcript hit catches the rest
        let r = record(&[(Transcript, OneInside), (Gene, OneInside)]);
        assert_eq!(classify(&r, SvType::Inv), Effect::GeneOther);
    }

    //
    // BND / CTX
    //

    #[rstest]
    #[case(BothInside)]
    #[case(OneInside)]
    #[case(Span)]
    fn test_bnd_transcript_any_kind_is_lof(#[case] kind: OverlapKind) {
        let r = record(&[(Transcript, kind)]);
        assert_eq!(classify(&r, SvType::Bnd), Effect::Lof);
    }

    #[test]
    fn test_bnd_gene_outranks_utr() {
        let r = record(&[(Gene, OneInside), (Utr, BothInside)]);
        assert_eq!(classify(&r, SvType::Bnd), Effect::GeneOther);
    }

    #[rstest]
    #[case(&[(Exon, OneInside), (Transcript, OneInside)], Effect::Lof)]
    #[case(&[(Gene, OneInside)], Effect::GeneOther)]
    #[case(&[(Utr, OneInside)], Effect::Utr)]
    #[case(&[(Promoter, BothInside)], Effect::Promoter)]
    fn test_bnd_precedence(
        #[case] pairs: &[(ElementType, OverlapKind)],
        #[case] expected: Effect,
    ) {
        assert_eq!(classify(&record(pairs), SvType::Bnd), expected);
    }

    #[test]
    fn test_ctx_matches_bnd() {
        let r = record(&[(Transcript, Span), (Gene, Span)]);
        assert_eq!(classify(&r, SvType::Ctx), classify(&r, SvType::Bnd));
    }

    //
    // dispatcher
    //

    #[test]
    fn test_classify_raw_dispatches() {
        let r = record(&[(Exon, BothInside)]);
        assert_eq!(classify_raw(&r, "DEL").unwrap(), Effect::Lof);
        assert_eq!(classify_raw(&r, "DUP").unwrap(), Effect::Lof);
    }

    #[test]
    fn test_classify_raw_rejects_unknown_type() {
        let r = record(&[(Exon, BothInside)]);
        let res = classify_raw(&r, "XYZ");
        assert!(matches!(res, Err(EffectError::InvalidVariantType(_))));
    }
}
