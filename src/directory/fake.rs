//! In-memory [`UserApi`] that records every call.

use super::{api::UserApi, error::DirectoryError, types::User};
use async_trait::async_trait;
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    List,
    Create(User),
    Update(i64, User),
    Delete(i64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    List,
    Create,
    Update,
    Delete,
}

#[derive(Debug, Default)]
pub struct FakeApi {
    users: Mutex<Vec<User>>,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<Vec<Op>>,
}

impl FakeApi {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn fail(&self, op: Op) {
        self.failing.lock().unwrap().push(op);
    }

    pub fn recover(&self, op: Op) {
        self.failing.lock().unwrap().retain(|&o| o != op);
    }

    fn record(&self, call: Call, op: Op) -> Result<(), DirectoryError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&op) {
            return Err(DirectoryError::Status {
                status: 500,
                message: "boom".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserApi for FakeApi {
    async fn list(&self) -> Result<Vec<User>, DirectoryError> {
        self.record(Call::List, Op::List)?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create(&self, user: &User) -> Result<(), DirectoryError> {
        self.record(Call::Create(user.clone()), Op::Create)?;
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }

    async fn update(&self, id: i64, user: &User) -> Result<(), DirectoryError> {
        self.record(Call::Update(id, user.clone()), Op::Update)?;
        let mut users = self.users.lock().unwrap();
        if let Some(existing) = users.iter_mut().find(|u| u.id == id) {
            *existing = user.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), DirectoryError> {
        self.record(Call::Delete(id), Op::Delete)?;
        self.users.lock().unwrap().retain(|u| u.id != id);
        Ok(())
    }
}
