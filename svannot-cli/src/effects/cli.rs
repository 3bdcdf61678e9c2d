use clap::{Command, arg};

pub use svannot_effects::consts::EFFECTS_CMD;

pub fn create_effects_cli() -> Command {
    Command::new(EFFECTS_CMD)
        .author("Databio")
        .about("Classify the genic effect of each (variant, gene) pair from an overlap hits table.")
        .arg_required_else_help(true)
        .arg(arg!(<hits> "Tab-separated overlap hits (name, svtype, gene_name, element_type, hit_type); '-' for stdin, .gz supported"))
        .arg(arg!(-o --output <output> "Where to write the effects table (default: stdout)"))
        .arg(arg!(--"skip-invalid" "Warn and drop groups with malformed records or unknown variant types instead of aborting"))
}
