use crate::app::App;
use crate::config::AppConfig;
use crate::router::respond;
use astra::Server;
use tracing::{error, info};

mod api;
mod app;
mod config;
mod domain;
mod errors;
mod logging;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    logging::init_tracing();

    // 1️⃣ Load configuration and the listing catalog
    let app = match AppConfig::load().and_then(App::from_config) {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "startup failed");
            std::process::exit(1);
        }
    };

    // 2️⃣ Start the server
    let addr = app.config.addr;
    info!(%addr, workers = app.config.max_workers, "starting server");

    let server = Server::bind(&addr).max_workers(app.config.max_workers);

    // 3️⃣ Serve requests, passing the app state into the closure
    let result = server.serve(move |req, _info| respond(req, &app));

    match result {
        Ok(()) => info!("server shut down cleanly"),
        Err(e) => {
            error!(error = %e, "server ended with error");
            std::process::exit(1);
        }
    }
}
