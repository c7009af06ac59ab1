//! Presentational form state for the two entity editors.
//!
//! Forms hold string-typed field state plus the per-field error map.
//! Submitting revalidates every field; editing a field clears only
//! that field's pending error.

use std::collections::BTreeMap;

use crate::model::structs::{Course, User};
use crate::validation;

/// Field name → user-facing message. Ordered so rendering and tests
/// see a stable field order.
pub type FormErrors = BTreeMap<&'static str, String>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: String,
    pub fecha_nacimiento: String,
    pub errors: FormErrors,
}

impl UserForm {
    pub fn new() -> Self {
        UserForm::default()
    }

    /// Prefill for editing; the date keeps only its `YYYY-MM-DD` part.
    pub fn from_user(user: &User) -> Self {
        UserForm {
            nombre: user.nombre.clone(),
            apellido: user.apellido.clone(),
            email: user.email.clone(),
            telefono: user.telefono.clone(),
            fecha_nacimiento: user
                .fecha_nacimiento
                .split('T')
                .next()
                .unwrap_or_default()
                .to_string(),
            errors: FormErrors::new(),
        }
    }

    pub fn set_nombre(&mut self, value: &str) {
        self.nombre = value.to_string();
        self.errors.remove("nombre");
    }

    pub fn set_apellido(&mut self, value: &str) {
        self.apellido = value.to_string();
        self.errors.remove("apellido");
    }

    pub fn set_email(&mut self, value: &str) {
        self.email = value.to_string();
        self.errors.remove("email");
    }

    /// Non-digits are dropped and the value capped at 10 characters,
    /// matching the input mask of the original form.
    pub fn set_telefono(&mut self, value: &str) {
        self.telefono = value.chars().filter(char::is_ascii_digit).take(10).collect();
        self.errors.remove("telefono");
    }

    pub fn set_fecha_nacimiento(&mut self, value: &str) {
        self.fecha_nacimiento = value.to_string();
        self.errors.remove("fecha_nacimiento");
    }

    /// Recomputes the full error map; true when the form is clean.
    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::new();
        if let Some(msg) = validation::min_len(&self.nombre, 2, "El nombre") {
            errors.insert("nombre", msg);
        }
        if let Some(msg) = validation::min_len(&self.apellido, 2, "El apellido") {
            errors.insert("apellido", msg);
        }
        if let Some(msg) = validation::email(&self.email) {
            errors.insert("email", msg);
        }
        if let Some(msg) = validation::telefono(&self.telefono) {
            errors.insert("telefono", msg);
        }
        if let Some(msg) = validation::fecha_nacimiento(&self.fecha_nacimiento) {
            errors.insert("fecha_nacimiento", msg);
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Entity to send; id and creation timestamp stay backend-owned.
    pub fn payload(&self) -> User {
        User {
            id: None,
            nombre: self.nombre.clone(),
            apellido: self.apellido.clone(),
            email: self.email.clone(),
            telefono: self.telefono.clone(),
            fecha_nacimiento: self.fecha_nacimiento.clone(),
            creado_en: None,
        }
    }

    pub fn reset(&mut self) {
        *self = UserForm::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseForm {
    pub nombre: String,
    pub descripcion: String,
    pub creditos: i32,
    pub errors: FormErrors,
}

impl CourseForm {
    pub fn new() -> Self {
        CourseForm::default()
    }

    pub fn from_course(course: &Course) -> Self {
        CourseForm {
            nombre: course.nombre.clone(),
            descripcion: course.descripcion.clone(),
            creditos: course.creditos,
            errors: FormErrors::new(),
        }
    }

    pub fn set_nombre(&mut self, value: &str) {
        self.nombre = value.to_string();
        self.errors.remove("nombre");
    }

    pub fn set_descripcion(&mut self, value: &str) {
        self.descripcion = value.to_string();
        self.errors.remove("descripcion");
    }

    pub fn set_creditos(&mut self, value: i32) {
        self.creditos = value;
        self.errors.remove("creditos");
    }

    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::new();
        if let Some(msg) = validation::min_len(&self.nombre, 3, "El nombre") {
            errors.insert("nombre", msg);
        }
        if let Some(msg) = validation::min_len(&self.descripcion, 10, "La descripción") {
            errors.insert("descripcion", msg);
        }
        if let Some(msg) = validation::creditos(self.creditos) {
            errors.insert("creditos", msg);
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// The link list is never part of a form submission; the backend
    /// owns it.
    pub fn payload(&self) -> Course {
        Course {
            id: None,
            nombre: self.nombre.clone(),
            descripcion: self.descripcion.clone(),
            creditos: self.creditos,
            curso_usuarios: Vec::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = CourseForm::default();
    }
}
