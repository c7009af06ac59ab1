//! Page lifecycle tests against a scripted in-memory backend mounted
//! at the `RequestApi` seam. The mock counts every call so the
//! "rejected locally, no request issued" properties are assertable.

use std::cell::{Cell, RefCell};

use aula_admin_core::app::courses::CoursesPage;
use aula_admin_core::app::enrollments::EnrollmentsPage;
use aula_admin_core::app::users::UsersPage;
use aula_admin_core::error::{ErrorKind, Result};
use aula_admin_core::interface::RequestApi;
use aula_admin_core::model::structs::{Course, EnrollmentLink, Notice, User};
use serde_json::Value;

#[derive(Default)]
struct MockBackend {
    users: RefCell<Vec<User>>,
    courses: RefCell<Vec<Course>>,
    next_id: Cell<i64>,
    calls: Cell<u32>,
    fail_users: Cell<bool>,
    fail_courses: Cell<bool>,
}

impl MockBackend {
    fn new() -> Self {
        let backend = MockBackend::default();
        backend.next_id.set(100);
        backend
    }

    fn seed_user(self, user: User) -> Self {
        self.users.borrow_mut().push(user);
        self
    }

    fn seed_course(self, course: Course) -> Self {
        self.courses.borrow_mut().push(course);
        self
    }

    fn calls(&self) -> u32 {
        self.calls.get()
    }

    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }

    fn assign_id(&self) -> i64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn unavailable() -> aula_admin_core::error::Error {
        ErrorKind::ApiError {
            status: 503,
            message: "Service Unavailable".to_string(),
        }
        .into()
    }
}

impl RequestApi for MockBackend {
    async fn fetch_users(&self) -> Result<Value> {
        self.record();
        if self.fail_users.get() {
            return Err(Self::unavailable());
        }
        Ok(serde_json::to_value(&*self.users.borrow())?)
    }

    async fn create_user(&self, user: &User) -> Result<Value> {
        self.record();
        let mut stored = user.clone();
        stored.id = Some(self.assign_id());
        stored.creado_en = Some("2026-01-01T00:00:00".to_string());
        self.users.borrow_mut().push(stored.clone());
        Ok(serde_json::to_value(stored)?)
    }

    async fn update_user(&self, id: i64, user: &User) -> Result<Value> {
        self.record();
        let mut users = self.users.borrow_mut();
        let Some(existing) = users.iter_mut().find(|u| u.id == Some(id)) else {
            return Err(ErrorKind::ApiError {
                status: 404,
                message: "Usuario no encontrado".to_string(),
            }
            .into());
        };
        *existing = user.clone();
        Ok(serde_json::to_value(user)?)
    }

    async fn delete_user(&self, id: i64) -> Result<Value> {
        self.record();
        self.users.borrow_mut().retain(|u| u.id != Some(id));
        Ok(Value::Null)
    }

    async fn fetch_courses(&self) -> Result<Value> {
        self.record();
        if self.fail_courses.get() {
            return Err(Self::unavailable());
        }
        Ok(serde_json::to_value(&*self.courses.borrow())?)
    }

    async fn create_course(&self, course: &Course) -> Result<Value> {
        self.record();
        let mut stored = course.clone();
        stored.id = Some(self.assign_id());
        self.courses.borrow_mut().push(stored.clone());
        Ok(serde_json::to_value(stored)?)
    }

    async fn update_course(&self, id: i64, course: &Course) -> Result<Value> {
        self.record();
        let mut courses = self.courses.borrow_mut();
        let Some(existing) = courses.iter_mut().find(|c| c.id == Some(id)) else {
            return Err(ErrorKind::ApiError {
                status: 404,
                message: "El curso no existe".to_string(),
            }
            .into());
        };
        // The backend keeps the link list; update bodies never carry it.
        let links = existing.curso_usuarios.clone();
        *existing = course.clone();
        existing.curso_usuarios = links;
        Ok(serde_json::to_value(&*existing)?)
    }

    async fn delete_course(&self, id: i64) -> Result<Value> {
        self.record();
        self.courses.borrow_mut().retain(|c| c.id != Some(id));
        Ok(Value::Null)
    }

    async fn enroll_user(&self, curso_id: i64, user: &User) -> Result<Value> {
        self.record();
        let mut courses = self.courses.borrow_mut();
        let Some(course) = courses.iter_mut().find(|c| c.id == Some(curso_id)) else {
            return Err(ErrorKind::ApiError {
                status: 500,
                message: "El curso no existe".to_string(),
            }
            .into());
        };
        course.curso_usuarios.push(EnrollmentLink {
            id: Some(self.assign_id()),
            usuario_id: user.id.expect("enrolled user carries an id"),
        });
        Ok(serde_json::to_value(user)?)
    }

    async fn remove_enrollment(&self, curso_id: i64, usuario_id: i64) -> Result<Value> {
        self.record();
        let mut courses = self.courses.borrow_mut();
        if let Some(course) = courses.iter_mut().find(|c| c.id == Some(curso_id)) {
            course.curso_usuarios.retain(|cu| cu.usuario_id != usuario_id);
        }
        Ok(Value::Null)
    }
}

fn usuario(id: i64, nombre: &str) -> User {
    User {
        id: Some(id),
        nombre: nombre.to_string(),
        apellido: "Mora".to_string(),
        email: format!("{}@espe.edu.ec", nombre.to_lowercase()),
        telefono: "0998765432".to_string(),
        fecha_nacimiento: "1998-04-02".to_string(),
        creado_en: Some("2024-03-01T10:15:00".to_string()),
    }
}

fn curso(id: i64, nombre: &str, usuarios: &[i64]) -> Course {
    Course {
        id: Some(id),
        nombre: nombre.to_string(),
        descripcion: "Descripción de prueba suficientemente larga".to_string(),
        creditos: 4,
        curso_usuarios: usuarios
            .iter()
            .enumerate()
            .map(|(i, &usuario_id)| EnrollmentLink {
                id: Some(i as i64 + 1),
                usuario_id,
            })
            .collect(),
    }
}

fn fill_valid_user_form(page: &mut UsersPage) {
    page.form.set_nombre("Ana");
    page.form.set_apellido("Mora");
    page.form.set_email("ana.mora@espe.edu.ec");
    page.form.set_telefono("0998765432");
    page.form.set_fecha_nacimiento("1998-04-02");
}

#[tokio::test]
async fn create_then_list_includes_the_new_user() {
    let backend = MockBackend::new();
    let mut page = UsersPage::new();

    fill_valid_user_form(&mut page);
    page.submit(&backend).await;

    assert_eq!(
        page.notice,
        Some(Notice::Success("Usuario creado exitosamente".to_string()))
    );
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.users[0].email, "ana.mora@espe.edu.ec");
    assert!(page.users[0].id.is_some());
    // Form cleared after a successful create.
    assert!(page.form.nombre.is_empty());
}

#[tokio::test]
async fn nine_digit_phone_is_rejected_without_a_network_call() {
    let backend = MockBackend::new();
    let mut page = UsersPage::new();

    fill_valid_user_form(&mut page);
    page.form.set_telefono("099876543");
    page.submit(&backend).await;

    assert_eq!(backend.calls(), 0);
    assert!(page.form.errors.contains_key("telefono"));
    assert!(page.users.is_empty());
}

#[tokio::test]
async fn delete_then_list_excludes_the_deleted_user() {
    let backend = MockBackend::new()
        .seed_user(usuario(1, "Ana"))
        .seed_user(usuario(2, "Luis"));
    let mut page = UsersPage::new();

    page.load(&backend).await;
    assert_eq!(page.users.len(), 2);

    page.delete(&backend, 1).await;

    assert_eq!(
        page.notice,
        Some(Notice::Success("Usuario eliminado exitosamente".to_string()))
    );
    assert!(page.users.iter().all(|u| u.id != Some(1)));
    assert_eq!(page.users.len(), 1);
}

#[tokio::test]
async fn submit_with_editing_id_updates_instead_of_creating() {
    let backend = MockBackend::new().seed_user(usuario(1, "Ana"));
    let mut page = UsersPage::new();

    page.load(&backend).await;
    let original = page.users[0].clone();
    page.edit(&original);
    page.form.set_nombre("Anabel");
    page.submit(&backend).await;

    assert_eq!(
        page.notice,
        Some(Notice::Success("Usuario actualizado exitosamente".to_string()))
    );
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.users[0].nombre, "Anabel");
    // The backend-owned creation timestamp survives the edit.
    assert_eq!(page.users[0].creado_en, original.creado_en);
    assert_eq!(page.editing_id, None);
}

#[tokio::test]
async fn failed_load_keeps_the_previous_list() {
    let backend = MockBackend::new().seed_user(usuario(1, "Ana"));
    let mut page = UsersPage::new();

    page.load(&backend).await;
    assert_eq!(page.users.len(), 1);

    backend.fail_users.set(true);
    page.load(&backend).await;

    assert_eq!(page.users.len(), 1);
    assert!(page.notice.as_ref().is_some_and(Notice::is_error));
}

#[tokio::test]
async fn out_of_range_credits_are_rejected_without_a_network_call() {
    let backend = MockBackend::new();
    let mut page = CoursesPage::new();

    page.form.set_nombre("Redes");
    page.form.set_descripcion("Fundamentos de redes de datos");

    for creditos in [0, 11] {
        page.form.set_creditos(creditos);
        page.submit(&backend).await;
        assert!(page.form.errors.contains_key("creditos"));
    }
    assert_eq!(backend.calls(), 0);

    page.form.set_creditos(4);
    page.submit(&backend).await;
    assert_eq!(
        page.notice,
        Some(Notice::Success("Curso creado exitosamente".to_string()))
    );
    assert_eq!(page.courses.len(), 1);
}

#[tokio::test]
async fn course_update_does_not_duplicate_the_course() {
    let backend = MockBackend::new().seed_course(curso(3, "Redes", &[7]));
    let mut page = CoursesPage::new();

    page.load(&backend).await;
    let original = page.courses[0].clone();
    page.edit(&original);
    page.form.set_creditos(6);
    page.submit(&backend).await;

    assert_eq!(page.courses.len(), 1);
    assert_eq!(page.courses[0].creditos, 6);
    // Links survive an update; the form never sends them.
    assert_eq!(page.courses[0].curso_usuarios.len(), 1);
}

#[tokio::test]
async fn duplicate_enrollment_short_circuits_locally() {
    let backend = MockBackend::new()
        .seed_user(usuario(7, "Ana"))
        .seed_course(curso(3, "Redes", &[7]));
    let mut page = EnrollmentsPage::new();

    page.load(&backend).await;
    let before = backend.calls();

    page.select_usuario(Some(7));
    page.select_curso(Some(3));
    page.enroll(&backend).await;

    assert_eq!(backend.calls(), before);
    assert_eq!(
        page.notice,
        Some(Notice::Error(
            "El usuario ya está inscrito en este curso.".to_string()
        ))
    );
    // The existing link is untouched.
    assert_eq!(page.courses[0].curso_usuarios.len(), 1);
}

#[tokio::test]
async fn enroll_posts_the_user_and_reloads() {
    let backend = MockBackend::new()
        .seed_user(usuario(7, "Ana"))
        .seed_course(curso(3, "Redes", &[]));
    let mut page = EnrollmentsPage::new();

    page.load(&backend).await;
    page.select_usuario(Some(7));
    page.select_curso(Some(3));
    page.enroll(&backend).await;

    assert_eq!(
        page.notice,
        Some(Notice::Success("Inscripción realizada con éxito".to_string()))
    );
    assert_eq!(page.courses[0].curso_usuarios.len(), 1);
    assert_eq!(page.courses[0].curso_usuarios[0].usuario_id, 7);
    assert_eq!(page.selected_usuario, None);
    assert_eq!(page.selected_curso, None);
}

#[tokio::test]
async fn enrolling_an_unknown_user_fails_locally() {
    let backend = MockBackend::new().seed_course(curso(3, "Redes", &[]));
    let mut page = EnrollmentsPage::new();

    page.load(&backend).await;
    let before = backend.calls();

    page.select_usuario(Some(99));
    page.select_curso(Some(3));
    page.enroll(&backend).await;

    assert_eq!(backend.calls(), before);
    assert_eq!(
        page.notice,
        Some(Notice::Error("Usuario no encontrado".to_string()))
    );
}

#[tokio::test]
async fn enrollments_load_degrades_per_fetch() {
    let backend = MockBackend::new()
        .seed_user(usuario(7, "Ana"))
        .seed_course(curso(3, "Redes", &[]));
    backend.fail_courses.set(true);
    let mut page = EnrollmentsPage::new();

    page.load(&backend).await;

    assert_eq!(page.users.len(), 1);
    assert!(page.courses.is_empty());
}

#[tokio::test]
async fn remove_enrollment_reloads_the_link_list() {
    let backend = MockBackend::new()
        .seed_user(usuario(7, "Ana"))
        .seed_course(curso(3, "Redes", &[7]));
    let mut page = EnrollmentsPage::new();

    page.load(&backend).await;
    page.remove(&backend, 3, 7).await;

    assert_eq!(
        page.notice,
        Some(Notice::Success("Inscripción eliminada con éxito".to_string()))
    );
    assert!(page.courses[0].curso_usuarios.is_empty());
}

#[tokio::test]
async fn course_choices_gray_out_enrolled_courses() {
    let backend = MockBackend::new()
        .seed_user(usuario(7, "Ana"))
        .seed_course(curso(3, "Redes", &[7]))
        .seed_course(curso(4, "Bases de Datos", &[]));
    let mut page = EnrollmentsPage::new();

    page.load(&backend).await;
    let choices = page.course_choices(Some(7));

    assert_eq!(choices.len(), 2);
    assert!(choices[0].disabled);
    assert_eq!(choices[0].label, "Redes (Ya inscrito)");
    assert!(!choices[1].disabled);
    assert_eq!(choices[1].label, "Bases de Datos");
}

#[tokio::test]
async fn changing_a_selection_clears_the_rejection() {
    let backend = MockBackend::new()
        .seed_user(usuario(7, "Ana"))
        .seed_course(curso(3, "Redes", &[7]));
    let mut page = EnrollmentsPage::new();

    page.load(&backend).await;
    page.select_usuario(Some(7));
    page.select_curso(Some(3));
    page.enroll(&backend).await;
    assert!(page.notice.as_ref().is_some_and(Notice::is_error));

    page.select_curso(None);
    assert_eq!(page.notice, None);
}

#[tokio::test]
async fn server_rejection_surfaces_the_mensaje_field() {
    let backend = MockBackend::new().seed_user(usuario(7, "Ana"));
    let mut page = UsersPage::new();

    page.load(&backend).await;
    // Editing a user the backend no longer knows produces its message.
    let mut ghost = usuario(8, "Luis");
    ghost.creado_en = None;
    page.edit(&ghost);
    page.submit(&backend).await;

    let Some(Notice::Error(message)) = &page.notice else {
        panic!("expected an error notice");
    };
    assert!(message.contains("Usuario no encontrado"));
    assert_eq!(page.editing_id, Some(8));
}
