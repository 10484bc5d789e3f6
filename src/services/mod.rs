// src/services/mod.rs
pub mod aluno_service;
pub mod disciplina_service;
