use crate::command_line::prelude::*;
use crate::command_line::{list_arg, write_json};
use crate::filters::RuleSetSelection;

pub const NAME: &str = "compute";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Compute descriptors and filters for one SMILES")
        .arg(
            Arg::new("smiles")
                .required(true)
                .long("smiles")
                .short('s')
                .num_args(1),
        )
        .arg(list_arg("filters", "Comma separated filters, or \"all\""))
}

pub fn action(matches: &ArgMatches, featurizer: &Featurizer) -> eyre::Result<()> {
    let smiles = matches
        .get_one::<String>("smiles")
        .ok_or(eyre::eyre!("Failed to extract smiles"))?;
    let selection = matches
        .get_one::<String>("filters")
        .map(|f| RuleSetSelection::parse_list(f))
        .unwrap_or_default();

    let record = featurizer.compute_features(smiles, &selection);
    write_json(&record)
}
