use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::fmt::format::FmtSpan;

use brandconnect_server::{routes, Config, Error, FixtureStore, Store};

#[actix_web::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    let config = Config::from_env();
    info!("serving mock api on {}", config.bind_address);
    info!("backend url for diagnostics: {}", config.backend_url);

    let bind_address = config.bind_address.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(config.clone()))
            .app_data(Data::new(Box::new(FixtureStore) as Box<dyn Store>))
            .wrap(TracingLogger::default())
            .configure(routes)
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
