// main.rs
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::JsonConfig;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

mod controllers;
mod db;
mod models;

// Endereço fixo do listener HTTP; o banco vem de variáveis de ambiente.
const ENDERECO: (&str, u16) = ("0.0.0.0", 3000);

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("iniciando servidor...");

    let pool = match db::establish_connection().await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Falha ao inicializar pool do banco: {:?}", e);
            std::process::exit(1);
        }
    };

    log::info!("servidor escutando em http://{}:{}", ENDERECO.0, ENDERECO.1);

    HttpServer::new(move || {
        // CORS aberto para desenvolvimento: qualquer origem
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION]);

        let json_config = JsonConfig::default().error_handler(|err, _req| {
            log::error!("JSON payload error: {}", err);
            actix_web::error::ErrorBadRequest(format!("Payload error: {}", err))
        });

        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(json_config)
            .wrap(cors)
            .wrap(Logger::default())
            .service(controllers::resposta_controller::salvar_resposta)
            .service(controllers::resposta_controller::listar_respostas)
    })
    .bind(ENDERECO)?
    .run()
    .await
}
