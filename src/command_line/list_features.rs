use crate::command_line::prelude::*;
use crate::command_line::write_json;
use crate::filters::RuleSetName;

pub const NAME: &str = "list-features";

pub fn command() -> Command {
    Command::new(NAME).about("List descriptors and filters")
}

pub fn action(_matches: &ArgMatches, featurizer: &Featurizer) -> eyre::Result<()> {
    let filters = RuleSetName::ALL
        .iter()
        .map(|r| {
            serde_json::json!({
                "name": r.as_str(),
                "description": r.description(),
                "result_key": r.result_key(),
            })
        })
        .collect::<Vec<_>>();

    write_json(&serde_json::json!({
        "toolkit": featurizer.toolkit().name(),
        "properties": featurizer.list_descriptors(),
        "filters": filters,
    }))
}
