//! # Handlers del Servidor
//! src/handlers/mod.rs
//!
//! Este módulo contiene los dos handlers que expone el servidor:
//!
//! - `index_handler` (`GET /`): página HTML "Hello world" con el color de
//!   fondo configurado
//! - `healthz_handler` (`GET /healthz`): liveness check para orquestadores
//!
//! Cada handler es una función que recibe el Request y la configuración
//! del proceso y retorna una Response. Ningún handler puede fallar:
//! la página se renderiza por sustitución de string y el check de
//! liveness es constante.

use crate::config::Config;
use crate::http::{Request, Response, StatusCode};

/// Plantilla de la página principal
///
/// El marcador `{color}` se sustituye tal cual por el valor configurado
/// en `APP_COLOR`. Mantenemos el HTML como const para no depender de un
/// motor de templates.
const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"><title>Hello</title>
  <style>
    html,body{height:100%;margin:0}
    body{
      background:{color};
      color:#fff;
      display:flex;justify-content:center;align-items:center;
      font-family:system-ui,Arial,sans-serif;font-size:3rem
    }
  </style>
</head>
<body><h1>Hello world</h1></body></html>"#;

/// Renderiza la página principal con el color de fondo indicado
///
/// # Ejemplo
/// ```
/// use hello_server::handlers::render_index;
///
/// let page = render_index("#112233");
/// assert!(page.contains("background:#112233;"));
/// assert!(page.contains("Hello world"));
/// ```
pub fn render_index(color: &str) -> String {
    INDEX_TEMPLATE.replace("{color}", color)
}

/// Handler para `GET /`
///
/// Retorna 200 con `Content-Type: text/html; charset=utf-8` y el
/// documento HTML completo. No hay condiciones de error: el color
/// configurado se sustituye verbatim en el bloque de estilo inline.
pub fn index_handler(_req: &Request, config: &Config) -> Response {
    Response::html(&render_index(&config.color))
}

/// Handler para `GET /healthz`
///
/// Retorna 200 con body exactamente `ok`. Siempre tiene éxito mientras
/// el proceso esté vivo; no establece `Content-Type` (solo la página
/// principal lo hace).
pub fn healthz_handler(_req: &Request, _config: &Config) -> Response {
    Response::new(StatusCode::Ok).with_body("ok")
}
