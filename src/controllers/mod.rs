pub mod resposta_controller;
