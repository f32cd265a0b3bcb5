use matric::{
    config::Config,
    model::{app::AppState, rate_limit::StatusCheckLimiter},
    router, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let hubtel = match startup::build_hubtel_client(&config) {
        Ok(hubtel) => hubtel,
        Err(e) => {
            eprintln!("Hubtel client error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Database error: {}", e);
            std::process::exit(1);
        }
    };

    let session = startup::session_layer();

    let state = AppState {
        db,
        hubtel,
        status_checks: StatusCheckLimiter::default(),
        application_fee: config.application_fee,
    };

    let router = router::routes().with_state(state).layer(session);

    let addr = format!("0.0.0.0:{}", config.port);

    tracing::info!("Starting server on {}", addr);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, router).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
