use actix_web::HttpServer;
use anyhow::Context;
use log::{error, info};

use tg_api::{app, config};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    config::load_dotenv();

    let app_config = match config::load() {
        Ok(app_config) => app_config,
        Err(e) => {
            // Logging is not configured yet
            eprintln!("Refusing to start: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logger
    config::init_logging(&app_config.logging);

    if let Err(e) = config::validate(&app_config) {
        error!("Refusing to start: {}", e);
        return Err(e.into());
    }

    info!("Starting TokenGate API Server ({})", app_config.environment);

    let services = app::build_services(&app_config.auth)
        .context("Failed to initialise token services")?;

    let bind_address = app_config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let environment = app_config.environment;
    let state = services.state;
    let validator = services.validator;

    let mut server = HttpServer::new(move || {
        app::create_app(state.clone(), validator.clone(), environment)
    });
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
