//! Course administration page: list, create, edit, delete.

use crate::error::Result;
use crate::forms::CourseForm;
use crate::interface::RequestApi;
use crate::model::structs::{Course, Notice};

#[derive(Debug, Default)]
pub struct CoursesPage {
    pub courses: Vec<Course>,
    pub form: CourseForm,
    pub editing_id: Option<i64>,
    pub notice: Option<Notice>,
}

impl CoursesPage {
    pub fn new() -> Self {
        CoursesPage::default()
    }

    pub async fn load<C: RequestApi>(&mut self, client: &C) {
        match super::fetch_course_list(client).await {
            Ok(courses) => self.courses = courses,
            Err(e) => {
                log::error!("error loading courses: {e}");
                self.notice = Some(Notice::Error(
                    "Error al cargar los cursos. Por favor, intente nuevamente.".to_string(),
                ));
            }
        }
    }

    pub async fn submit<C: RequestApi>(&mut self, client: &C) {
        self.notice = None;
        if !self.form.validate() {
            return;
        }

        let editing = self.editing_id.is_some();
        match self.save(client).await {
            Ok(message) => {
                self.form.reset();
                self.editing_id = None;
                self.notice = Some(Notice::Success(message.to_string()));
                self.load(client).await;
            }
            Err(e) => {
                log::error!("error saving course: {e}");
                let action = if editing { "actualizar" } else { "crear" };
                self.notice = Some(Notice::Error(format!("Error al {action} el curso: {e}")));
            }
        }
    }

    async fn save<C: RequestApi>(&self, client: &C) -> Result<&'static str> {
        if let Some(id) = self.editing_id {
            let mut course = self.form.payload();
            course.id = Some(id);
            client.update_course(id, &course).await?;
            Ok("Curso actualizado exitosamente")
        } else {
            client.create_course(&self.form.payload()).await?;
            Ok("Curso creado exitosamente")
        }
    }

    pub fn edit(&mut self, course: &Course) {
        self.form = CourseForm::from_course(course);
        self.editing_id = course.id;
        self.notice = None;
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
        self.editing_id = None;
    }

    pub async fn delete<C: RequestApi>(&mut self, client: &C, id: i64) {
        self.notice = None;
        match client.delete_course(id).await {
            Ok(_) => {
                self.notice = Some(Notice::Success("Curso eliminado exitosamente".to_string()));
                self.load(client).await;
            }
            Err(e) => {
                log::error!("error deleting course: {e}");
                self.notice = Some(Notice::Error(format!("Error al eliminar el curso: {e}")));
            }
        }
    }
}
