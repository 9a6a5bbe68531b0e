// src/models/resposta.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Linha persistida da tabela `respostas`.
#[derive(Debug, Serialize, FromRow)]
pub struct Resposta {
    pub id: i32,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub motivo_contato: Option<String>,
    pub atendimento: Option<i32>,
    pub atendimento_caixa: Option<i32>,
    pub entrega: Option<i32>,
    pub comentario_atendimento: Option<String>,
    pub comentario_caixa: Option<String>,
    pub comentario_entrega: Option<String>,
    pub sugestao: Option<String>,
    pub comentario_completo: Option<String>,
    pub data_criacao: NaiveDateTime,
}

/// Corpo do POST — todos os campos são opcionais, sem validação de presença.
#[derive(Debug, Default, Deserialize)]
pub struct NovaResposta {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub motivo_contato: Option<String>,
    pub atendimento: Option<i32>,
    pub atendimento_caixa: Option<i32>,
    pub entrega: Option<i32>,
    pub comentario_atendimento: Option<String>,
    pub comentario_caixa: Option<String>,
    pub comentario_entrega: Option<String>,
    pub sugestao: Option<String>,
}

/// Filtros do GET, tipados na borda: valor não numérico ou data malformada
/// é rejeitado pelo extractor antes de chegar na montagem da query.
#[derive(Debug, Default, Deserialize)]
pub struct FiltroRespostas {
    pub motivo_contato: Option<String>,
    pub atendimento: Option<i32>,
    pub data_inicio: Option<NaiveDate>,
    pub data_fim: Option<NaiveDate>,
}
