use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::dtos::TaskPatch;
use crate::error::StoreError;
use crate::models::Task;

/// The authoritative in-memory task collection.
///
/// A single `RwLock` serializes access across actix-web workers, so the
/// observable semantics stay effectively sequential per identifier.
/// `partial_update` holds the write lock for its whole read-merge-write.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored task, keyed by id. Iteration order is not guaranteed.
    pub fn list_all(&self) -> HashMap<Uuid, Task> {
        self.tasks.read().expect("task store lock poisoned").clone()
    }

    /// The subset of tasks whose `completed` flag equals the argument.
    /// Returns an empty map when none match.
    pub fn list_by_completion(&self, completed: bool) -> HashMap<Uuid, Task> {
        self.tasks
            .read()
            .expect("task store lock poisoned")
            .iter()
            .filter(|(_, task)| task.completed == completed)
            .map(|(id, task)| (*id, task.clone()))
            .collect()
    }

    /// Insert `task` under `id` and return the id. Overwrites silently if
    /// the id already exists; the route layer generates a fresh id per call.
    pub fn create(&self, id: Uuid, task: Task) -> Uuid {
        self.tasks
            .write()
            .expect("task store lock poisoned")
            .insert(id, task);
        id
    }

    pub fn read(&self, id: Uuid) -> Result<Task, StoreError> {
        self.tasks
            .read()
            .expect("task store lock poisoned")
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Overwrite the whole record under `id`.
    pub fn replace(&self, id: Uuid, task: Task) -> Result<(), StoreError> {
        match self
            .tasks
            .write()
            .expect("task store lock poisoned")
            .get_mut(&id)
        {
            Some(existing) => {
                *existing = task;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    /// Merge only the fields supplied in `patch` into the record under `id`.
    pub fn partial_update(&self, id: Uuid, patch: TaskPatch) -> Result<(), StoreError> {
        match self
            .tasks
            .write()
            .expect("task store lock poisoned")
            .get_mut(&id)
        {
            Some(existing) => {
                patch.apply_to(existing);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    pub fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.tasks
            .write()
            .expect("task store lock poisoned")
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }

    pub fn exists(&self, id: Uuid) -> bool {
        self.tasks
            .read()
            .expect("task store lock poisoned")
            .contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.tasks.read().expect("task store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
