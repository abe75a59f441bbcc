//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Este módulo implementa el router que mapea pares (método, path) HTTP
//! a handlers específicos.
//!
//! ## Arquitectura
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! El router examina el método y el path del request y lo dirige al
//! handler apropiado. El mapeo es explícito: cualquier combinación
//! (método, path) no registrada cae en la rama por defecto y retorna
//! 404 Not Found.

use crate::config::Config;
use crate::http::{Method, Request, Response, StatusCode};

/// Tipo de función handler
///
/// Un handler recibe el Request y la configuración del proceso
/// (construida una sola vez al arranque) y retorna una Response.
/// Los handlers nunca leen el entorno directamente.
pub type Handler = fn(&Request, &Config) -> Response;

/// Router que mapea (método, path) a handlers
pub struct Router {
    /// Mapa de (método, path) → handler
    routes: Vec<(Method, String, Handler)>,
}

impl Router {
    /// Crea un nuevo router vacío
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Registra una ruta con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::router::Router;
    /// use hello_server::config::Config;
    /// use hello_server::http::{Method, Request, Response, StatusCode};
    ///
    /// fn ok_handler(_req: &Request, _config: &Config) -> Response {
    ///     Response::new(StatusCode::Ok).with_body("ok")
    /// }
    ///
    /// let mut router = Router::new();
    /// router.register(Method::GET, "/healthz", ok_handler);
    /// ```
    pub fn register(&mut self, method: Method, path: &str, handler: Handler) {
        self.routes.push((method, path.to_string(), handler));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    ///
    /// Si no hay handler registrado para el par (método, path), cae en
    /// la rama por defecto: 404 Not Found.
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::router::Router;
    /// use hello_server::config::Config;
    /// use hello_server::http::Request;
    ///
    /// let router = Router::new();
    /// let config = Config::default();
    ///
    /// let raw = b"GET /nope HTTP/1.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    /// let response = router.route(&request, &config); // 404
    /// ```
    pub fn route(&self, request: &Request, config: &Config) -> Response {
        let method = request.method();
        let path = request.path();

        // Buscar handler para este (método, path)
        for (route_method, route_path, handler) in &self.routes {
            if *route_method == method && route_path == path {
                // Encontramos el handler, ejecutarlo
                let mut response = handler(request, config);
                // Agregar headers comunes a todas las respuestas
                self.add_common_headers(&mut response);
                return response;
            }
        }

        // Rama por defecto: no hay handler para esta combinación
        let mut response = Response::error(
            StatusCode::NotFound,
            &format!("Route not found: {} {}", method.as_str(), path),
        );
        self.add_common_headers(&mut response);
        response
    }

    /// Agrega headers comunes a todas las respuestas
    fn add_common_headers(&self, response: &mut Response) {
        response.add_header("Server", "hello-server/0.1");
        response.add_header("Connection", "close");
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
