// src/lib.rs

// --- Declaração dos Módulos ---
pub mod config;
pub mod db;
pub mod error;
pub mod importacao;
pub mod models;
pub mod services;
pub mod state;
pub mod web;
