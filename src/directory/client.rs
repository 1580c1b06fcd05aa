use super::{
    api::UserApi,
    confirm::{Confirm, DELETE_PROMPT},
    error::{Failure, FormError},
    types::{Field, User, UserForm},
};
use tracing::{debug, info, instrument, warn};

/// Status line shown above the table. Each operation replaces it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Added,
    Updated,
    Deleted,
    Failed(Failure),
}

impl Banner {
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            Self::Added => "User added successfully!",
            Self::Updated => "User updated successfully!",
            Self::Deleted => "User deleted successfully!",
            Self::Failed(failure) => failure.message(),
        }
    }

    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saved {
    Created,
    Updated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deletion {
    Deleted,
    Declined,
}

/// Everything the user sees: the fetched list, the form and the status line.
///
/// The list is only ever replaced by a fetch. Every mutation is followed by a
/// fresh [`DirectoryClient::list`] instead of patching it locally. A new client
/// is loading until its first fetch completes.
#[derive(Debug)]
pub struct DirectoryClient<A> {
    api: A,
    users: Vec<User>,
    form: UserForm,
    banner: Option<Banner>,
    loading: bool,
}

impl<A: UserApi> DirectoryClient<A> {
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            users: Vec::new(),
            form: UserForm::default(),
            banner: None,
            loading: true,
        }
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    #[must_use]
    pub fn form(&self) -> &UserForm {
        &self.form
    }

    #[must_use]
    pub fn banner(&self) -> Option<Banner> {
        self.banner
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn editing(&self) -> Option<i64> {
        self.form.editing
    }

    #[must_use]
    pub fn find(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Fetch the collection and replace the list. On failure the previous
    /// list stays visible.
    ///
    /// # Errors
    /// Returns [`Failure::Fetch`] if the collection could not be read.
    #[instrument(skip(self))]
    pub async fn list(&mut self) -> Result<(), Failure> {
        self.loading = true;
        let result = self.api.list().await;
        self.loading = false;

        match result {
            Ok(users) => {
                debug!("list replaced with {} users", users.len());
                self.users = users;
                Ok(())
            }
            Err(e) => {
                warn!("Error fetching users: {}", e);
                Err(self.fail(Failure::Fetch))
            }
        }
    }

    /// Create or update the user described by the form.
    ///
    /// Nothing is sent unless every field is filled in. On success the form
    /// goes back to create mode and the list is fetched again.
    ///
    /// # Errors
    /// Returns [`Failure::Validation`] for an incomplete form and
    /// [`Failure::Save`] if the remote call failed. The form is kept in both cases.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<Saved, Failure> {
        let Some(user) = self.form.to_user() else {
            return Err(self.fail(Failure::Validation));
        };

        let result = match self.form.editing {
            Some(id) => self.api.update(id, &user).await.map(|()| Saved::Updated),
            None => self.api.create(&user).await.map(|()| Saved::Created),
        };

        let saved = match result {
            Ok(saved) => saved,
            Err(e) => {
                warn!("Error saving user {}: {}", user.id, e);
                return Err(self.fail(Failure::Save));
            }
        };

        info!("user {} saved: {:?}", user.id, saved);

        self.form = UserForm::default();
        self.banner = Some(match saved {
            Saved::Created => Banner::Added,
            Saved::Updated => Banner::Updated,
        });

        // the save stands even if the refresh fails; the banner reports the latter
        let _ = self.list().await;

        Ok(saved)
    }

    /// Load `user` into the form and switch to update mode.
    pub fn begin_edit(&mut self, user: &User) {
        self.form = UserForm::editing(user);
        self.banner = None;
    }

    /// Drop the draft and go back to create mode. No request is made.
    pub fn cancel_edit(&mut self) {
        self.form = UserForm::default();
        self.banner = None;
    }

    /// Change one field of the draft.
    ///
    /// # Errors
    /// Returns [`FormError::IdLocked`] when changing the id while editing.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        self.form.set(field, value)
    }

    /// Delete user `id` once `confirm` agrees, then fetch the list again.
    ///
    /// # Errors
    /// Returns [`Failure::Delete`] if the remote call failed.
    #[instrument(skip(self, confirm))]
    pub async fn delete<C>(&mut self, id: i64, confirm: &mut C) -> Result<Deletion, Failure>
    where
        C: Confirm + ?Sized,
    {
        if !confirm.confirm(DELETE_PROMPT).await {
            debug!("delete of user {} declined", id);
            return Ok(Deletion::Declined);
        }

        if let Err(e) = self.api.delete(id).await {
            warn!("Error deleting user {}: {}", id, e);
            return Err(self.fail(Failure::Delete));
        }

        info!("user {} deleted", id);

        self.banner = Some(Banner::Deleted);
        let _ = self.list().await;

        Ok(Deletion::Deleted)
    }

    fn fail(&mut self, failure: Failure) -> Failure {
        self.banner = Some(Banner::Failed(failure));
        failure
    }
}
