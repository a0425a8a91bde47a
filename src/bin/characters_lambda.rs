use std::env;

use aws_lambda_events::event::apigw::ApiGatewayProxyRequest;
use characters_graphql::config::Config;
use characters_graphql::{schema, Characters, Context, GraphQLHandler};
use envconfig::Envconfig;
use failure::Fail;
use lambda_runtime::{handler_fn, Context as LambdaContext, Error};
use log::{info, LevelFilter};

fn init_logger() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_module("characters_graphql", LevelFilter::Info);
    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logger();

    let config = Config::init_from_env()?;
    let characters = match &config.data_path {
        Some(path) => Characters::from_path(path),
        None => Characters::sample(),
    }
    .map_err(Fail::compat)?;
    info!(
        "serving {} characters, playground at {}",
        characters.len(),
        config.endpoint
    );

    let handler = GraphQLHandler::new(schema(), Context::new(characters))
        .endpoint(&config.endpoint)
        .debug(config.debug);
    lambda_runtime::run(handler_fn(
        move |req: ApiGatewayProxyRequest, _: LambdaContext| {
            let response = handler.call(req);
            async move { Ok::<_, Error>(response.await) }
        },
    ))
    .await?;
    Ok(())
}
