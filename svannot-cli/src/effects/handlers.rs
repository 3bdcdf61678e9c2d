use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use indicatif::{ProgressBar, ProgressStyle};

use svannot_core::utils::get_dynamic_reader_w_stdin;
use svannot_effects::aggregate::{classify_effects, classify_effects_lenient};
use svannot_effects::table::{read_hits, write_effects};

pub fn run_effects(matches: &ArgMatches) -> Result<()> {
    let hits_file = matches
        .get_one::<String>("hits")
        .expect("A path to an overlap hits file is required.");

    let output = matches.get_one::<String>("output");
    let skip_invalid = matches.get_flag("skip-invalid");

    let reader = get_dynamic_reader_w_stdin(hits_file)?;
    let records = read_hits(reader)
        .with_context(|| format!("Failed to read overlap hits from {}", hits_file))?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Classifying {} overlap hits", records.len()));

    let rows = if skip_invalid {
        let (rows, skipped) = classify_effects_lenient(records);
        for group in &skipped {
            eprintln!(
                "Skipping {} / {} / {}: {}",
                group.name, group.svtype, group.gene_name, group.error
            );
        }
        rows
    } else {
        classify_effects(records)?
    };

    pb.finish_with_message(format!("Classified {} (variant, gene) pairs", rows.len()));

    let mut writer: Box<dyn Write> = match output {
        Some(path) => {
            let file = File::create(Path::new(path))
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };

    write_effects(&rows, &mut writer)?;

    Ok(())
}
