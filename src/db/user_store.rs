use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::error::StoreError;
use crate::models::User;

/// The in-memory user collection. Same shape as the task store but without
/// update operations; the relation from tasks is advisory only.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list_all(&self) -> HashMap<Uuid, User> {
        self.users.read().expect("user store lock poisoned").clone()
    }

    pub fn create(&self, id: Uuid, user: User) -> Uuid {
        self.users
            .write()
            .expect("user store lock poisoned")
            .insert(id, user);
        id
    }

    pub fn read(&self, id: Uuid) -> Result<User, StoreError> {
        self.users
            .read()
            .expect("user store lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.users
            .write()
            .expect("user store lock poisoned")
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub fn exists(&self, id: Uuid) -> bool {
        self.users
            .read()
            .expect("user store lock poisoned")
            .contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.users.read().expect("user store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
