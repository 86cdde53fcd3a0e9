use dotenvy::dotenv;
use log::info;
use ticket_order_server::{config::ServerConfig, server::run_server};

#[actix_web::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let config = match ServerConfig::try_from_env() {
        Ok(config) => config,
        Err(e) => {
            // Serving without credentials is not an option.
            eprintln!("{e}");
            std::process::exit(1);
        },
    };

    info!("🚀️ Starting ticket order server on {}:{}", config.host, config.port);
    match run_server(config).await {
        Ok(_) => println!("Bye!"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
