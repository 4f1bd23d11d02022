use poem::{listener::TcpListener, EndpointExt, Route, Server};
use poem_openapi::{ContactObject, OpenApiService};

use crate::engine::Featurizer;
use crate::rest_api::api::ApiV1;

pub const API_PREFIX: &str = "/api";

pub fn api_service(server_url: &str, prefix: &str) -> OpenApiService<ApiV1, ()> {
    OpenApiService::new(ApiV1::default(), "molprops", env!("CARGO_PKG_VERSION"))
        .server(format!("{server_url}{prefix}"))
        .description("molprops: molecular descriptors and drug-likeness filters")
        .contact(ContactObject::new().name("molprops"))
}

pub async fn run_api_service(
    bind: &str,
    server_url: &str,
    featurizer: Featurizer,
) -> eyre::Result<()> {
    let api_service = api_service(server_url, API_PREFIX);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec();

    log::info!("listening on {}", bind);

    Server::new(TcpListener::bind(bind))
        .run(
            Route::new()
                .at(
                    "/api/v1/openapi.json",
                    poem::endpoint::make_sync(move |_| spec.clone()),
                )
                .nest(API_PREFIX, api_service)
                .nest("/", ui)
                .data(featurizer),
        )
        .await?;

    Ok(())
}

pub fn output_spec(server_url: &str, output: &str) -> eyre::Result<()> {
    let spec = api_service(server_url, API_PREFIX).spec();
    std::fs::write(output, spec)?;
    log::info!("wrote openapi spec to {}", output);
    Ok(())
}
