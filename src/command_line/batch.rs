use std::io::Write;

use crate::batch::{process_csv, BatchEnvelope, BatchRequest};
use crate::command_line::list_arg;
use crate::command_line::prelude::*;
use crate::filters::split_names;

pub const NAME: &str = "batch";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Append descriptor and filter columns to a CSV file")
        .arg(
            Arg::new("input")
                .required(true)
                .long("input")
                .short('i')
                .num_args(1),
        )
        .arg(
            Arg::new("output")
                .help("Defaults to stdout")
                .required(false)
                .long("output")
                .short('o')
                .num_args(1),
        )
        .arg(
            Arg::new("smiles-column")
                .help("Defaults to the last column")
                .required(false)
                .long("smiles-column")
                .short('c')
                .num_args(1),
        )
        .arg(list_arg(
            "properties",
            "Comma separated descriptor keys, or \"all\" (default: molecular_weight)",
        ))
        .arg(list_arg("filters", "Comma separated filters, or \"all\""))
}

pub fn action(matches: &ArgMatches, featurizer: &Featurizer) -> eyre::Result<()> {
    let input = matches
        .get_one::<String>("input")
        .ok_or(eyre::eyre!("Failed to extract input path"))?;
    let output = matches.get_one::<String>("output");

    let request = BatchRequest {
        csv_content: std::fs::read_to_string(input)?,
        smiles_column: matches.get_one::<String>("smiles-column").cloned(),
        properties: matches.get_one::<String>("properties").map(|p| split_names(p)),
        filters: matches.get_one::<String>("filters").map(|f| split_names(f)),
    };

    let success = match process_csv(featurizer, &request) {
        BatchEnvelope::Success(success) => success,
        BatchEnvelope::Failure { error } => return Err(eyre::eyre!(error)),
    };

    match output {
        Some(output) => {
            std::fs::write(output, &success.result)?;
            log::info!("{}, wrote {}", success.message, output);
        }
        None => std::io::stdout().lock().write_all(success.result.as_bytes())?,
    }

    log::info!(
        "structure column {}, added columns: {}",
        success.structure_column,
        success.properties_added.join(", ")
    );

    Ok(())
}
