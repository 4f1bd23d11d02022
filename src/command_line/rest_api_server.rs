use crate::command_line::prelude::*;
use crate::rest_api::openapi_server::{output_spec, run_api_service};

pub const NAME: &str = "rest-api-server";

pub fn command() -> Command {
    Command::new(NAME)
        .about("Serve the REST API with a Swagger UI")
        .arg(
            Arg::new("bind")
                .num_args(1)
                .required(false)
                .short('b')
                .long("bind")
                .default_value("localhost:3000"),
        )
        .arg(
            Arg::new("server-url")
                .num_args(1)
                .required(false)
                .short('u')
                .long("server-url")
                .default_value("http://localhost:3000"),
        )
        .subcommand(
            Command::new("spec").arg(
                Arg::new("output")
                    .help("Write the openapi JSON to this file, for generating clients")
                    .required(true)
                    .short('o')
                    .long("output")
                    .num_args(1),
            ),
        )
}

pub async fn action(matches: &ArgMatches, featurizer: Featurizer) -> eyre::Result<()> {
    let server_url = matches
        .get_one::<String>("server-url")
        .ok_or(eyre::eyre!("Failed to extract server url"))?;

    match matches.subcommand() {
        None => {
            let bind = matches
                .get_one::<String>("bind")
                .ok_or(eyre::eyre!("Failed to extract bind address"))?;
            run_api_service(bind, server_url, featurizer).await
        }
        Some(("spec", args)) => {
            let output = args
                .get_one::<String>("output")
                .ok_or(eyre::eyre!("Failed to extract output path"))?;
            output_spec(server_url, output)
        }
        Some((other, _args)) => Err(eyre::eyre!("can't handle {}", other)),
    }
}
