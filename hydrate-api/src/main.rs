mod config;
mod routes;

use std::error::Error;

use actix_web::{middleware::Logger, App, HttpServer};
use log::info;

use crate::config::Config;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let config = Config::from_env()?;
    info!(
        "Serving {} on http://{}:{}",
        config.static_dir.display(),
        config.host,
        config.port
    );

    let static_dir = config.static_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(|cfg| routes::configure(cfg, &static_dir))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
