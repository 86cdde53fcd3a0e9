use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::info;
use ticket_order_engine::{OrderApi, SqliteOrderStore};

use crate::{
    config::{ServerConfig, WebhookOptions},
    errors::ServerError,
    routes::{configure_webhook, health},
};

const MAX_DB_CONNECTIONS: u32 = 25;

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteOrderStore::new_with_url(&config.database_url, MAX_DB_CONNECTIONS)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    // Migrations run before the socket binds. If the store is unusable the process must not
    // accept any request.
    db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("🗃️ Order store ready at {}", db.url());
    let srv = create_server_instance(&config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: &ServerConfig, db: SqliteOrderStore) -> Result<Server, ServerError> {
    let options = WebhookOptions::from_config(config);
    let srv = HttpServer::new(move || {
        let orders_api = OrderApi::new(db.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("tos::access_log"))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(options))
            .service(health)
            .configure(configure_webhook::<SqliteOrderStore>)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}
