//! Tab-separated input and output tables for the batch driver.
//!
//! The input is a header-bearing TSV of raw overlap hits (one row per
//! observed (variant, gene, element, kind) intersection); the output is
//! one row per (variant, gene) pair with its effect label attached.
//! Column positions are resolved from the header, so extra columns and
//! arbitrary column order are tolerated.

use std::io::{BufRead, Write};

use svannot_core::errors::TableError;
use svannot_core::models::{GeneEffect, OverlapRecord};

use crate::consts::{EFFECT_HEADER, HIT_COLUMNS};

/// Positions of the required hit columns within an input header.
struct HitColumns {
    name: usize,
    svtype: usize,
    gene_name: usize,
    element_type: usize,
    hit_type: usize,
}

impl HitColumns {
    fn from_header(header: &str) -> Result<Self, TableError> {
        let fields: Vec<&str> = header.split('\t').collect();
        let position = |col: &str| {
            fields
                .iter()
                .position(|f| *f == col)
                .ok_or_else(|| TableError::MissingColumn(col.to_string()))
        };

        Ok(HitColumns {
            name: position(HIT_COLUMNS[0])?,
            svtype: position(HIT_COLUMNS[1])?,
            gene_name: position(HIT_COLUMNS[2])?,
            element_type: position(HIT_COLUMNS[3])?,
            hit_type: position(HIT_COLUMNS[4])?,
        })
    }

    fn parse_row(&self, line: &str, lineno: usize) -> Result<OverlapRecord, TableError> {
        let fields: Vec<&str> = line.split('\t').collect();
        let get = |idx: usize| {
            fields
                .get(idx)
                .map(|f| f.to_string())
                .ok_or(TableError::ShortRow(lineno))
        };

        Ok(OverlapRecord {
            name: get(self.name)?,
            svtype: get(self.svtype)?,
            gene_name: get(self.gene_name)?,
            element_type: get(self.element_type)?,
            hit_type: get(self.hit_type)?,
        })
    }
}

///
/// Read raw overlap hits from a header-bearing TSV.
///
/// Blank lines are skipped. Missing required columns and rows shorter
/// than the header are reported with `TableError`.
///
pub fn read_hits<R: BufRead>(reader: R) -> Result<Vec<OverlapRecord>, TableError> {
    let mut lines = reader.lines();
    let header = lines.next().ok_or(TableError::EmptyFile)??;
    let columns = HitColumns::from_header(&header)?;

    let mut records = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        // lineno is 1-based and counts the header
        records.push(columns.parse_row(&line, i + 2)?);
    }

    Ok(records)
}

///
/// Write the classified effects table, header included.
///
pub fn write_effects<W: Write>(rows: &[GeneEffect], writer: &mut W) -> Result<(), TableError> {
    writeln!(writer, "{}", EFFECT_HEADER)?;
    for row in rows {
        writeln!(writer, "{}", row)?;
    }
    writer.flush()?;

    Ok(())
}
