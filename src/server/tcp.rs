//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Implementación del servidor TCP que maneja múltiples conexiones
//! simultáneas usando threads. Cada conexión se procesa en su propio
//! thread: los handlers no comparten estado mutable, así que no hace
//! falta ninguna disciplina de locking.
//!
//! Un fallo de bind (puerto ocupado, puerto privilegiado) es fatal y se
//! propaga como `io::Error` hasta `main`. No hay reintentos.

use crate::config::Config;
use crate::handlers;
use crate::http::{Method, Request, Response, StatusCode};
use crate::router::Router;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

/// Servidor HTTP/1.0 con dos rutas fijas
pub struct Server {
    config: Arc<Config>,
    router: Arc<Router>,
}

impl Server {
    /// Crea el servidor y registra el mapeo explícito de rutas
    ///
    /// Solo existen dos rutas; cualquier otra combinación (método, path)
    /// cae en la rama por defecto del router (404).
    pub fn new(config: Config) -> Self {
        let mut router = Router::new();

        router.register(Method::GET, "/", handlers::index_handler);
        router.register(Method::GET, "/healthz", handlers::healthz_handler);

        Self {
            config: Arc::new(config),
            router: Arc::new(router),
        }
    }

    /// Hace bind en la dirección configurada y atiende conexiones
    /// indefinidamente
    ///
    /// Emite una única línea a stdout indicando el puerto una vez que el
    /// listener está activo. Un error de bind se propaga al llamador.
    pub fn run(self) -> std::io::Result<()> {
        let address = self.config.address();
        let listener = TcpListener::bind(&address)?;

        println!("[+] Servidor escuchando en el puerto {}", self.config.port);

        self.serve(listener)
    }

    /// Bucle de accept sobre un listener ya creado
    ///
    /// Separado de `run` para que los tests puedan usar un listener en
    /// un puerto efímero. Errores al aceptar una conexión individual se
    /// reportan por stderr y no tumban el bucle.
    pub fn serve(&self, listener: TcpListener) -> std::io::Result<()> {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);
                    let config = Arc::clone(&self.config);

                    thread::spawn(move || {
                        if let Err(e) = Self::handle_connection(stream, router, config) {
                            eprintln!("   ❌ Error en conexión: {}", e);
                        }
                    });
                }
                Err(e) => {
                    eprintln!("   ❌ Error al aceptar conexión: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión: read → parse → route → write → close
    ///
    /// Un request que no parsea produce 400; el resto del dispatch es
    /// responsabilidad del router. La conexión se cierra al terminar
    /// (HTTP/1.0, `Connection: close`).
    fn handle_connection(
        mut stream: TcpStream,
        router: Arc<Router>,
        config: Arc<Config>,
    ) -> std::io::Result<()> {
        let mut buffer = [0u8; 8192];
        let bytes_read = stream.read(&mut buffer)?;

        if bytes_read == 0 {
            // El peer cerró sin enviar nada
            return Ok(());
        }

        let response = match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => {
                println!("   → {} {}", request.method().as_str(), request.path());
                router.route(&request, &config)
            }
            Err(e) => {
                let mut response =
                    Response::error(StatusCode::BadRequest, &format!("Invalid request: {}", e));
                response.add_header("Connection", "close");
                response
            }
        };

        stream.write_all(&response.to_bytes())?;
        stream.flush()?;

        println!("   ← {}", response.status());

        Ok(())
    }
}

#[cfg(test)]
mod server_tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread;

    fn ephemeral_listener() -> TcpListener {
        TcpListener::bind("127.0.0.1:0").expect("bind")
    }

    /// Acepta una conexión y la procesa con la configuración dada
    fn serve_one(listener: TcpListener, config: Config) -> thread::JoinHandle<()> {
        let server = Server::new(config);
        let router = Arc::clone(&server.router);
        let config = Arc::clone(&server.config);
        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            Server::handle_connection(stream, router, config).unwrap();
        })
    }

    fn send_raw(addr: std::net::SocketAddr, raw: &[u8]) -> String {
        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(raw).unwrap();
        client.shutdown(std::net::Shutdown::Write).unwrap();

        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[test]
    fn test_handle_connection_healthz_ok() {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();
        let t = serve_one(listener, Config::default());

        let text = send_raw(addr, b"GET /healthz HTTP/1.0\r\n\r\n");

        assert!(text.contains("200 OK"));
        assert!(text.ends_with("\r\n\r\nok"));

        t.join().unwrap();
    }

    #[test]
    fn test_handle_connection_index_uses_color() {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();

        let mut config = Config::default();
        config.color = "#ff0000".to_string();
        let t = serve_one(listener, config);

        let text = send_raw(addr, b"GET / HTTP/1.0\r\n\r\n");

        assert!(text.contains("200 OK"));
        assert!(text.contains("Content-Type: text/html; charset=utf-8"));
        assert!(text.contains("background:#ff0000;"));
        assert!(text.contains("Hello world"));

        t.join().unwrap();
    }

    #[test]
    fn test_handle_connection_unknown_route() {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();
        let t = serve_one(listener, Config::default());

        let text = send_raw(addr, b"GET /nonexistent HTTP/1.0\r\n\r\n");

        assert!(text.contains("404 Not Found"));
        assert!(text.contains("Route not found"));

        t.join().unwrap();
    }

    #[test]
    fn test_handle_connection_parse_error() {
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();
        let t = serve_one(listener, Config::default());

        // Enviar bytes no-HTTP para disparar error de parseo
        let text = send_raw(addr, b"\x00\x01\x02\x03garbage");

        assert!(text.contains("400 Bad Request"));
        assert!(text.contains("Invalid request"));

        t.join().unwrap();
    }

    #[test]
    fn test_handle_connection_peer_closed_immediately() {
        // Cubre la rama bytes_read == 0
        let listener = ephemeral_listener();
        let addr = listener.local_addr().unwrap();
        let t = serve_one(listener, Config::default());

        // Cliente que conecta y cierra inmediatamente sin mandar datos
        drop(TcpStream::connect(addr).unwrap());

        t.join().unwrap();
    }
}
