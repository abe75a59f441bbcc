//! # Configuración del Servidor
//! src/config.rs
//!
//! Este módulo define la configuración del servidor con soporte para
//! argumentos CLI y variables de entorno. La configuración se construye
//! una sola vez al arranque y se pasa por referencia al servidor; los
//! handlers nunca leen el entorno directamente.
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./hello_server --port 4000 --color "#ff0000"
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! PORT=4000 APP_COLOR="#ff0000" ./hello_server
//! ```

use clap::Parser;

/// Puerto por defecto si no se especifica `PORT`
pub const DEFAULT_PORT: u16 = 3000;

/// Color de fondo por defecto si no se especifica `APP_COLOR`
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// Configuración del servidor HTTP/1.0
///
/// Nota sobre `PORT` malformado: clap parsea el valor tipado (`u16`),
/// así que un puerto no numérico o fuera de rango se rechaza al arranque
/// con un mensaje claro, en vez de heredar el comportamiento ambiguo
/// del bind.
#[derive(Debug, Clone, Parser)]
#[command(name = "hello_server")]
#[command(about = "Servidor HTTP/1.0 'Hello world' con color de fondo configurable")]
#[command(version = "0.1.0")]
pub struct Config {
    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "3000", env = "PORT")]
    pub port: u16,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "0.0.0.0", env = "HOST")]
    pub host: String,

    /// Color CSS de fondo de la página principal (se sustituye tal cual
    /// en el bloque de estilo inline)
    #[arg(long, default_value = "#FFFFFF", env = "APP_COLOR")]
    pub color: String,
}

impl Config {
    /// Crea una nueva configuración parseando argumentos CLI y entorno
    ///
    /// # Ejemplo
    /// ```ignore
    /// use hello_server::config::Config;
    ///
    /// let config = Config::new();
    /// println!("Server listening on {}", config.address());
    /// ```
    pub fn new() -> Self {
        Config::parse().normalize()
    }

    /// Normaliza valores "falsy" heredados del entorno
    ///
    /// Un `APP_COLOR` vacío o solo espacios cae al color por defecto,
    /// igual que si la variable no estuviera definida.
    pub fn normalize(mut self) -> Self {
        if self.color.trim().is_empty() {
            self.color = DEFAULT_COLOR.to_string();
        }
        self
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```
    /// use hello_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:3000");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Retorna errores si hay valores inválidos
    pub fn validate(&self) -> Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("Host must not be empty".to_string());
        }
        if self.color.trim().is_empty() {
            return Err("Color must not be empty".to_string());
        }
        Ok(())
    }

    /// Imprime un resumen de la configuración
    pub fn print_summary(&self) {
        println!("=================================");
        println!("  Hello HTTP/1.0 Server");
        println!("=================================");
        println!();
        println!("⚙️  Configuración:");
        println!("   Puerto: {}", self.port);
        println!("   Host: {}", self.host);
        println!("   Color: {}", self.color);
        println!();
    }
}

impl Default for Config {
    /// Configuración por defecto
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: "0.0.0.0".to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}
