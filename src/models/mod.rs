pub mod resposta;
