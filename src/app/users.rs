//! User administration page: list, create, edit, delete.

use crate::error::Result;
use crate::forms::UserForm;
use crate::interface::RequestApi;
use crate::model::structs::{Notice, User};

#[derive(Debug, Default)]
pub struct UsersPage {
    pub users: Vec<User>,
    pub form: UserForm,
    pub editing_id: Option<i64>,
    pub notice: Option<Notice>,
}

impl UsersPage {
    pub fn new() -> Self {
        UsersPage::default()
    }

    /// Replaces the list on success; a failed fetch keeps the previous
    /// list and surfaces a notice instead.
    pub async fn load<C: RequestApi>(&mut self, client: &C) {
        match super::fetch_user_list(client).await {
            Ok(users) => self.users = users,
            Err(e) => {
                log::error!("error loading users: {e}");
                self.notice = Some(Notice::Error(
                    "Error al cargar los usuarios. Por favor, intente nuevamente.".to_string(),
                ));
            }
        }
    }

    /// Create or update depending on `editing_id`. Validation failures
    /// stay on the form and no request is issued. Success clears the
    /// form and re-fetches the list; there are no optimistic updates.
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
                log::error!("error saving user: {e}");
                let action = if editing { "actualizar" } else { "crear" };
                self.notice = Some(Notice::Error(format!("Error al {action} el usuario: {e}")));
            }
        }
    }

    async fn save<C: RequestApi>(&self, client: &C) -> Result<&'static str> {
        if let Some(id) = self.editing_id {
            let mut user = self.form.payload();
            user.id = Some(id);
            // The creation timestamp is backend-owned; an edit resends
            // the one the listing already carries.
            user.creado_en = self
                .users
                .iter()
                .find(|u| u.id == Some(id))
                .and_then(|u| u.creado_en.clone());
            client.update_user(id, &user).await?;
            Ok("Usuario actualizado exitosamente")
        } else {
            client.create_user(&self.form.payload()).await?;
            Ok("Usuario creado exitosamente")
        }
    }

    pub fn edit(&mut self, user: &User) {
        self.form = UserForm::from_user(user);
        self.editing_id = user.id;
        self.notice = None;
    }

    pub fn cancel_edit(&mut self) {
        self.form.reset();
        self.editing_id = None;
    }

    /// Confirmation is the caller's job; this issues the delete and
    /// reloads.
    pub async fn delete<C: RequestApi>(&mut self, client: &C, id: i64) {
        self.notice = None;
        match client.delete_user(id).await {
            Ok(_) => {
                self.notice = Some(Notice::Success("Usuario eliminado exitosamente".to_string()));
                self.load(client).await;
            }
            Err(e) => {
                log::error!("error deleting user: {e}");
                self.notice = Some(Notice::Error(format!("Error al eliminar el usuario: {e}")));
            }
        }
    }
}
