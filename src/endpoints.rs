//! Routing table for the upstream services.
//!
//! The browser build reaches the services same-origin through the
//! reverse proxy, which rewrites `/api/usuarios...` and
//! `/api/cursos...` to the user and course services and attaches the
//! permissive CORS headers. The native build skips the proxy and talks
//! to the service base URLs directly.

const DEFAULT_USUARIOS_BASE: &str = "http://localhost:8004";
const DEFAULT_CURSOS_BASE: &str = "http://localhost:8002";

#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    usuarios_base: String,
    cursos_base: String,
}

impl Endpoints {
    pub fn new(usuarios_base: impl Into<String>, cursos_base: impl Into<String>) -> Self {
        Endpoints {
            usuarios_base: usuarios_base.into(),
            cursos_base: cursos_base.into(),
        }
    }

    /// Empty bases: every path stays `/api/...` and the reverse proxy
    /// does the rewriting. This is what the browser build uses.
    pub fn same_origin() -> Self {
        Endpoints::new("", "")
    }

    /// Native default, overridable per service via
    /// `USUARIOS_SERVICE_URL` and `CURSOS_SERVICE_URL`.
    pub fn from_env() -> Self {
        let usuarios = std::env::var("USUARIOS_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_USUARIOS_BASE.to_string());
        let cursos = std::env::var("CURSOS_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_CURSOS_BASE.to_string());
        Endpoints::new(usuarios, cursos)
    }

    pub fn usuarios(&self) -> String {
        format!("{}/api/usuarios", self.usuarios_base)
    }

    pub fn usuario(&self, id: i64) -> String {
        format!("{}/api/usuarios/{id}", self.usuarios_base)
    }

    pub fn cursos(&self) -> String {
        format!("{}/api/cursos", self.cursos_base)
    }

    pub fn curso(&self, id: i64) -> String {
        format!("{}/api/cursos/{id}", self.cursos_base)
    }

    /// A single enrollment link; DELETE here removes the link.
    pub fn curso_usuario(&self, curso_id: i64, usuario_id: i64) -> String {
        format!(
            "{}/api/cursos/{curso_id}/usuarios/{usuario_id}",
            self.cursos_base
        )
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::new(DEFAULT_USUARIOS_BASE, DEFAULT_CURSOS_BASE)
    }
}
