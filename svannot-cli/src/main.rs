mod effects;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "svannot";
    pub const BIN_NAME: &str = "svannot";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Annotate the predicted genic effects of structural variants from precomputed element overlaps.")
        .subcommand_required(true)
        .subcommand(effects::cli::create_effects_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // EFFECTS
        //
        Some((effects::cli::EFFECTS_CMD, matches)) => {
            effects::handlers::run_effects(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
