//! Enrollment management page: cross-references the user list with
//! each course's embedded link list, guards against duplicate
//! enrollment locally, and manages link creation/removal.

use crate::enrollment;
use crate::error::{ErrorKind, Result};
use crate::interface::RequestApi;
use crate::model::dtos::CourseChoice;
use crate::model::structs::{Course, Notice, User};

#[derive(Debug, Default)]
pub struct EnrollmentsPage {
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub selected_usuario: Option<i64>,
    pub selected_curso: Option<i64>,
    pub notice: Option<Notice>,
}

impl EnrollmentsPage {
    pub fn new() -> Self {
        EnrollmentsPage::default()
    }

    /// Users and courses are independent; both fetches are issued
    /// concurrently and joined before rendering. A failed fetch
    /// degrades to an empty list for that entity only.
    pub async fn load<C: RequestApi>(&mut self, client: &C) {
        let (users, courses) = futures::join!(
            super::fetch_user_list(client),
            super::fetch_course_list(client)
        );

        self.users = users.unwrap_or_else(|e| {
            log::error!("error loading users: {e}");
            Vec::new()
        });
        self.courses = courses.unwrap_or_else(|e| {
            log::error!("error loading courses: {e}");
            Vec::new()
        });
    }

    /// Changing either selection dismisses a pending rejection.
    pub fn select_usuario(&mut self, id: Option<i64>) {
        self.selected_usuario = id;
        self.clear_error();
    }

    pub fn select_curso(&mut self, id: Option<i64>) {
        self.selected_curso = id;
        self.clear_error();
    }

    fn clear_error(&mut self) {
        if self.notice.as_ref().is_some_and(Notice::is_error) {
            self.notice = None;
        }
    }

    /// Enroll the selected user in the selected course. The duplicate
    /// guard runs first and rejects locally, before any request: it is
    /// advisory only, the backend is not re-consulted for a race.
    pub async fn enroll<C: RequestApi>(&mut self, client: &C) {
        self.notice = None;

        match self.try_enroll(client).await {
            Ok(()) => {
                self.selected_usuario = None;
                self.selected_curso = None;
                self.notice = Some(Notice::Success(
                    "Inscripción realizada con éxito".to_string(),
                ));
                self.load(client).await;
            }
            Err(e) => {
                log::error!("error creating enrollment: {e}");
                self.notice = Some(Notice::Error(match *e.inner {
                    ErrorKind::ValidationError(message) => message,
                    _ => "Error al realizar la inscripción. Por favor, intente nuevamente."
                        .to_string(),
                }));
            }
        }
    }

    async fn try_enroll<C: RequestApi>(&self, client: &C) -> Result<()> {
        let (Some(usuario_id), Some(curso_id)) = (self.selected_usuario, self.selected_curso)
        else {
            return Err(
                ErrorKind::ValidationError("Seleccione un usuario y un curso.".to_string()).into(),
            );
        };

        if enrollment::is_enrolled(&self.courses, usuario_id, curso_id) {
            return Err(ErrorKind::ValidationError(
                "El usuario ya está inscrito en este curso.".to_string(),
            )
            .into());
        }

        // Enrollment is modeled upstream as POSTing the full user JSON
        // to the course resource, so the user is resolved from the
        // local snapshot first.
        let user = self
            .users
            .iter()
            .find(|u| u.id == Some(usuario_id))
            .ok_or_else(|| ErrorKind::ValidationError("Usuario no encontrado".to_string()))?;

        client.enroll_user(curso_id, user).await?;
        Ok(())
    }

    /// Remove one enrollment link, then resynchronize.
    pub async fn remove<C: RequestApi>(&mut self, client: &C, curso_id: i64, usuario_id: i64) {
        match client.remove_enrollment(curso_id, usuario_id).await {
            Ok(_) => {
                self.load(client).await;
                self.notice = Some(Notice::Success(
                    "Inscripción eliminada con éxito".to_string(),
                ));
            }
            Err(e) => {
                log::error!("error deleting enrollment: {e}");
                self.notice = Some(Notice::Error(format!(
                    "Error al eliminar la inscripción: {e}"
                )));
            }
        }
    }

    /// Course picker rows for the given user; already-enrolled courses
    /// come back disabled and labeled "(Ya inscrito)".
    pub fn course_choices(&self, usuario_id: Option<i64>) -> Vec<CourseChoice> {
        let enrolled = usuario_id
            .map(|id| enrollment::enrolled_course_ids(&self.courses, id))
            .unwrap_or_default();

        self.courses
            .iter()
            .filter_map(|c| {
                c.id.map(|id| CourseChoice {
                    curso_id: id,
                    label: if enrolled.contains(&id) {
                        format!("{} (Ya inscrito)", c.nombre)
                    } else {
                        c.nombre.clone()
                    },
                    disabled: enrolled.contains(&id),
                })
            })
            .collect()
    }

    /// Display name for a link row.
    pub fn user_name(&self, usuario_id: i64) -> String {
        self.users
            .iter()
            .find(|u| u.id == Some(usuario_id))
            .map(User::full_name)
            .unwrap_or_else(|| "Usuario no encontrado".to_string())
    }
}
