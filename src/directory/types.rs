use super::error::FormError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A record of the remote collection. `id` is chosen by the client and is the key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// Editable field of the user form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Id,
    Name,
    Address,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Id, Self::Name, Self::Address];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Name",
            Self::Address => "Address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Address => "address",
        })
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "address" => Ok(Self::Address),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

/// Draft of a user plus the id of the record being edited, if any.
///
/// The fields are kept as text so an unset field is representable. The empty
/// draft (`UserForm::default()`) is create mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserForm {
    pub id: String,
    pub name: String,
    pub address: String,
    pub editing: Option<i64>,
}

impl UserForm {
    /// Form pre-filled from `user`, in update mode for its id.
    #[must_use]
    pub fn editing(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            address: user.address.clone(),
            editing: Some(user.id),
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Address => &self.address,
        }
    }

    /// Set one field of the draft.
    ///
    /// # Errors
    /// Returns [`FormError::IdLocked`] when changing the id of a record being edited.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        match field {
            Field::Id => {
                if let Some(id) = self.editing {
                    return Err(FormError::IdLocked(id));
                }
                self.id = value;
            }
            Field::Name => self.name = value,
            Field::Address => self.address = value,
        }
        Ok(())
    }

    /// True when every field holds something other than whitespace.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        Field::ALL
            .iter()
            .all(|&field| !self.get(field).trim().is_empty())
    }

    /// The user this draft describes, or `None` if a field is missing or the id
    /// is not a number. In update mode the editing target supplies the id.
    #[must_use]
    pub fn to_user(&self) -> Option<User> {
        if !self.is_complete() {
            return None;
        }

        let id = match self.editing {
            Some(id) => id,
            None => self.id.trim().parse().ok()?,
        };

        Some(User {
            id,
            name: self.name.clone(),
            address: self.address.clone(),
        })
    }
}
