// src/controllers/resposta_controller.rs
use crate::models::resposta::{FiltroRespostas, NovaResposta, Resposta};

use actix_web::{get, post, web, HttpResponse};
use chrono::NaiveDateTime;
use serde_json::json;
use sqlx::PgPool;

const SEM_OBSERVACAO: &str = "Sem observação";
const SEM_SUGESTAO: &str = "Sem sugestão";

/// Valor de filtro carregado como parâmetro posicional da query.
/// O texto da condição nunca recebe valor vindo do usuário.
#[derive(Debug, Clone, PartialEq)]
pub enum Filtro {
    Texto(String),
    Inteiro(i32),
    Momento(NaiveDateTime),
}

// Campo ausente ou vazio recebe o texto padrão.
fn preencher(campo: &Option<String>, padrao: &str) -> String {
    match campo.as_deref() {
        Some(texto) if !texto.is_empty() => texto.to_string(),
        _ => padrao.to_string(),
    }
}

/// Junta os quatro comentários livres em um único texto rotulado,
/// persistido desnormalizado na coluna `comentario_completo`.
fn montar_comentario_completo(dados: &NovaResposta) -> String {
    format!(
        "Atendimento: {}\nCaixa: {}\nEntrega: {}\nSugestão final: {}",
        preencher(&dados.comentario_atendimento, SEM_OBSERVACAO),
        preencher(&dados.comentario_caixa, SEM_OBSERVACAO),
        preencher(&dados.comentario_entrega, SEM_OBSERVACAO),
        preencher(&dados.sugestao, SEM_SUGESTAO),
    )
    .trim()
    .to_string()
}

/// Monta a query de listagem dinamicamente: cada filtro presente vira uma
/// condição AND com placeholder posicional; o valor vai para a lista de binds.
fn montar_filtros(filtros: &FiltroRespostas) -> (String, Vec<Filtro>) {
    let mut query = String::from("SELECT * FROM respostas WHERE 1=1");
    let mut params: Vec<Filtro> = Vec::new();

    if let Some(motivo) = &filtros.motivo_contato {
        params.push(Filtro::Texto(motivo.clone()));
        query.push_str(&format!(" AND motivo_contato = ${}", params.len()));
    }

    if let Some(nota) = filtros.atendimento {
        params.push(Filtro::Inteiro(nota));
        query.push_str(&format!(" AND atendimento = ${}", params.len()));
    }

    // Datas viram limites de dia inteiro: início às 00:00:00, fim às 23:59:59
    if let Some(inicio) = filtros.data_inicio {
        params.push(Filtro::Momento(inicio.and_hms_opt(0, 0, 0).unwrap()));
        query.push_str(&format!(" AND data_criacao >= ${}", params.len()));
    }

    if let Some(fim) = filtros.data_fim {
        params.push(Filtro::Momento(fim.and_hms_opt(23, 59, 59).unwrap()));
        query.push_str(&format!(" AND data_criacao <= ${}", params.len()));
    }

    query.push_str(" ORDER BY data_criacao DESC");

    (query, params)
}

// Salva uma resposta da pesquisa
#[post("/api/respostas")]
pub async fn salvar_resposta(
    pool: web::Data<PgPool>,
    dados: web::Json<NovaResposta>,
) -> HttpResponse {
    let comentario_completo = montar_comentario_completo(&dados);

    let resultado = sqlx::query(
        r#"
        INSERT INTO respostas (
            nome, email, telefone, motivo_contato,
            atendimento, atendimento_caixa, entrega,
            comentario_atendimento, comentario_caixa,
            comentario_entrega, sugestao, comentario_completo
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#,
    )
    .bind(&dados.nome)
    .bind(&dados.email)
    .bind(&dados.telefone)
    .bind(&dados.motivo_contato)
    .bind(dados.atendimento)
    .bind(dados.atendimento_caixa)
    .bind(dados.entrega)
    .bind(&dados.comentario_atendimento)
    .bind(&dados.comentario_caixa)
    .bind(&dados.comentario_entrega)
    .bind(&dados.sugestao)
    .bind(&comentario_completo)
    .execute(pool.get_ref())
    .await;

    match resultado {
        Ok(_) => HttpResponse::Created().json(json!({
            "message": "Resposta salva com sucesso"
        })),
        Err(e) => {
            log::error!("Erro ao salvar resposta: {:?}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Erro ao salvar a resposta"
            }))
        }
    }
}

// Lista respostas com filtros opcionais, sempre das mais recentes para as mais antigas
#[get("/api/respostas")]
pub async fn listar_respostas(
    pool: web::Data<PgPool>,
    filtros: web::Query<FiltroRespostas>,
) -> HttpResponse {
    let (query, params) = montar_filtros(&filtros);

    let mut consulta = sqlx::query_as::<_, Resposta>(&query);
    for param in &params {
        consulta = match param {
            Filtro::Texto(valor) => consulta.bind(valor),
            Filtro::Inteiro(valor) => consulta.bind(valor),
            Filtro::Momento(valor) => consulta.bind(valor),
        };
    }

    match consulta.fetch_all(pool.get_ref()).await {
        Ok(respostas) => HttpResponse::Ok().json(respostas),
        Err(e) => {
            log::error!(
                "Erro ao buscar respostas (query: {} | params: {:?}): {:?}",
                query,
                params,
                e
            );
            HttpResponse::InternalServerError().json(json!({
                "error": "Erro ao buscar a resposta"
            }))
        }
    }
}
