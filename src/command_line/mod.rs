use std::io::Write;

use crate::engine::FeaturizerOptions;

pub mod batch;
pub mod compute;
pub mod list_features;
pub mod rest_api_server;

pub mod prelude {
    pub use clap::{Arg, ArgAction, ArgMatches, Command};

    pub use crate::engine::{Featurizer, FeaturizerOptions};
}

use prelude::*;

/// Top-level command with every subcommand and the engine options.
pub fn app() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .subcommand_required(true)
        .arg(
            Arg::new("no-auxiliary")
                .help("Do not register toolkit fragment counters as descriptors")
                .long("no-auxiliary")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("auxiliary-prefix")
                .help("Prefix of toolkit capabilities registered as auxiliary descriptors")
                .long("auxiliary-prefix")
                .global(true)
                .num_args(1)
                .default_value(crate::toolkit::fragments::FRAGMENT_PREFIX),
        )
        .subcommand(compute::command())
        .subcommand(batch::command())
        .subcommand(list_features::command())
        .subcommand(rest_api_server::command())
}

pub fn featurizer_options(matches: &ArgMatches) -> eyre::Result<FeaturizerOptions> {
    let auxiliary_prefix = matches
        .get_one::<String>("auxiliary-prefix")
        .ok_or(eyre::eyre!("Failed to extract auxiliary prefix"))?;

    Ok(FeaturizerOptions {
        auxiliary_descriptors: !matches.get_flag("no-auxiliary"),
        auxiliary_prefix: auxiliary_prefix.clone(),
    })
}

pub(crate) fn write_json<T: serde::Serialize>(value: &T) -> eyre::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub(crate) fn list_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(false)
        .long(name)
        .num_args(1)
}
