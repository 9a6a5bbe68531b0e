use dotenv::dotenv;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};
use std::env;

fn var_obrigatoria(nome: &str) -> Result<String, sqlx::Error> {
    env::var(nome)
        .map_err(|_| sqlx::Error::Configuration(format!("{} não encontrado no .env", nome).into()))
}

pub async fn establish_connection() -> Result<Pool<Postgres>, sqlx::Error> {
    dotenv().ok();

    let porta: u16 = var_obrigatoria("DB_PORT")?
        .parse()
        .map_err(|_| sqlx::Error::Configuration("DB_PORT inválida".into()))?;

    let opcoes = PgConnectOptions::new()
        .host(&var_obrigatoria("DB_HOST")?)
        .port(porta)
        .username(&var_obrigatoria("DB_USER")?)
        .password(&var_obrigatoria("DB_PASSWORD")?)
        .database(&var_obrigatoria("DB_NAME")?);

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(opcoes)
        .await
        .map_err(|e| {
            log::error!("Falha ao criar pool do banco: {:?}", e);
            e
        })?;

    Ok(pool)
}
