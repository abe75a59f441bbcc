//! # Hello Server - Entry Point
//! src/main.rs
//!
//! Punto de entrada del servidor HTTP/1.0.
//!
//! Construye la configuración una sola vez (CLI + variables de entorno)
//! y arranca el servidor. Un fallo al hacer bind es fatal: se reporta
//! por stderr y el proceso termina con código 1.

use hello_server::config::Config;
use hello_server::server::Server;

fn main() {
    // Crear configuración (CLI flags o variables de entorno, con defaults).
    // Un PORT no numérico se rechaza aquí, antes de intentar el bind.
    let config = Config::new();

    config.print_summary();

    // Crear el servidor
    let server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        eprintln!("💥 Error fatal: {}", e);
        std::process::exit(1);
    }
}
