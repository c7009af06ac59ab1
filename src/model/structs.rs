use serde::{Deserialize, Serialize};

// Shared wire structures; field names follow the upstream services'
// JSON (Spanish, camelCase where renamed).

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    // ISO date; the backend may append a T.. time suffix
    #[serde(rename = "fechaNacimiento")]
    pub fecha_nacimiento: String,
    #[serde(
        default,
        rename = "creadoEn",
        skip_serializing_if = "Option::is_none"
    )]
    pub creado_en: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct EnrollmentLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "usuarioId")]
    pub usuario_id: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub nombre: String,
    pub descripcion: String,
    pub creditos: i32,
    #[serde(
        default,
        rename = "cursoUsuarios",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub curso_usuarios: Vec<EnrollmentLink>,
}

/// Transient per-page message shown after the last operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(m) | Notice::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

impl User {
    /// "nombre apellido" as rendered in listings and link rows.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.nombre, self.apellido)
    }
}
