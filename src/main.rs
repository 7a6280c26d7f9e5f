use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use std::fs::metadata;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use log4rs::init_file;

mod apis;
mod cores;
mod configs;
mod utils;

use crate::apis::api_doc::ApiDoc;
use crate::configs::settings::Config;
use crate::cores::text_models::ggml::GgmlLoader;
use crate::cores::text_models::model_controller::ModelLoader;

#[cfg(test)]
mod test;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let log_config_path = if metadata("/etc/inferd/log4rs.yaml").is_ok() {
        "/etc/inferd/log4rs.yaml".to_string()
    } else {
        format!("{}/src/configs/log4rs.yaml", env!("CARGO_MANIFEST_DIR"))
    };
    init_file(&log_config_path, Default::default())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("Log setup failed: {}", e)))?;

    let config = Config::load_config()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, format!("Config load failed: {}", e)))?;

    // Loader and config are injected app data, handlers hold no globals
    let loader: Arc<dyn ModelLoader> = Arc::new(GgmlLoader::new(&config.runtime_endpoint));
    let loader_data = web::Data::from(loader);
    let config_data = web::Data::new(config.clone());

    // Set the port number
    let port = config.port;
    println!("Starting server on port {}", port);

    // Start the HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin() // cors
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec!["Content-Type", "Authorization", "User-Agent"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(config_data.clone())
            .app_data(loader_data.clone())
            .configure(apis::models_api::completions::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()))
    })
    .bind((config.host.clone(), port))?
    .run()
    .await
}
