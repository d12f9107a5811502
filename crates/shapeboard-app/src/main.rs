//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting Shapeboard");

    let result = shapeboard_app::AppConfig::from_env()
        .map_err(shapeboard_app::AppError::from)
        .and_then(|config| pollster::block_on(shapeboard_app::App::run(config)));

    if let Err(err) = result {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
