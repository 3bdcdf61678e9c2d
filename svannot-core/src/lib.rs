//! Core library for svannot: tools for annotating the predicted genic
//! effects of structural variants.
//!
//! This crate holds the shared data models (variant types, genic element
//! types, overlap kinds, effect labels, per-gene disruption records) and
//! small file utilities used by the higher-level crates. Classification
//! logic lives in `svannot-effects`; the command line interface lives in
//! `svannot-cli`.

pub mod errors;
pub mod models;
pub mod utils;
