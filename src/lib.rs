//! # Hello Server
//! src/lib.rs
//!
//! Servidor HTTP/1.0 minimalista implementado desde cero. Sirve una página
//! "Hello world" con color de fondo configurable y un endpoint de liveness
//! (`/healthz`) para orquestadores externos.
//!
//! ## Arquitectura
//!
//! El servidor está dividido en módulos especializados:
//! - `http`: Parsing y manejo del protocolo HTTP/1.0
//! - `config`: Configuración explícita (CLI + variables de entorno)
//! - `server`: Lógica del servidor TCP y manejo de conexiones
//! - `router`: Enrutamiento explícito de (método, path) a handlers
//! - `handlers`: Implementación de los dos handlers y el render de la página
//!
//! ## Ejemplo de uso
//!
//! ```ignore
//! use hello_server::server::Server;
//! use hello_server::config::Config;
//!
//! let config = Config::default();
//! let server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod http;
pub mod config;
pub mod server;
pub mod router;
pub mod handlers;
