//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! Este módulo implementa el servidor TCP que:
//! 1. Escucha en el puerto configurado
//! 2. Acepta conexiones entrantes
//! 3. Lee y parsea requests HTTP
//! 4. Genera y envía responses HTTP
//!
//! Cada conexión se atiende de forma independiente y sin estado
//! compartido entre requests.

pub mod tcp;

// Re-exportar para facilitar el uso
pub use tcp::Server;
