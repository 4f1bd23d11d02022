use std::sync::Arc;

use molprops::command_line::{self, prelude::*};
use molprops::toolkit::rdkit_toolkit::RdkitToolkit;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let matches = command_line::app().get_matches();
    let options = command_line::featurizer_options(&matches)?;
    let featurizer = Featurizer::with_options(Arc::new(RdkitToolkit::new()), &options);

    match matches.subcommand() {
        Some((command_line::compute::NAME, m)) => command_line::compute::action(m, &featurizer),
        Some((command_line::batch::NAME, m)) => command_line::batch::action(m, &featurizer),
        Some((command_line::list_features::NAME, m)) => {
            command_line::list_features::action(m, &featurizer)
        }
        Some((command_line::rest_api_server::NAME, m)) => {
            command_line::rest_api_server::action(m, featurizer).await
        }
        Some((other, _)) => Err(eyre::eyre!("can't handle {}", other)),
        None => Err(eyre::eyre!("no command given")),
    }
}
