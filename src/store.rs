//! The task store: an id-to-task map mirrored to a key-value store.
//!
//! Every mutation rewrites the whole collection under one key. Reads hand out
//! copies, so nothing outside the store can change state without going
//! through a method that persists.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::StorageError;
use crate::storage::{KeyValueStore, Persistence};
use crate::task::{IdStrategy, Task, TaskId};

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "TASK";

pub type TaskMap = BTreeMap<TaskId, Task>;

/// In-memory task collection backed by a [`Persistence`] adapter.
pub struct TaskStore<S: KeyValueStore> {
    persistence: Persistence<S>,
    key: String,
    tasks: TaskMap,
    id_strategy: IdStrategy,
    rng: StdRng,
    persist_error: Option<StorageError>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Open a store on `storage` under the default key, hydrating from it.
    pub fn open(storage: S) -> Self {
        Self::with_options(storage, DEFAULT_STORAGE_KEY, IdStrategy::default(), StdRng::from_entropy())
    }

    /// Open a store with an explicit key, id strategy and random source.
    pub fn with_options(storage: S, key: &str, id_strategy: IdStrategy, rng: StdRng) -> Self {
        let persistence = Persistence::new(storage);
        let stored: TaskMap = persistence.read(key);
        let tasks = rekey(stored);
        tracing::debug!(key, count = tasks.len(), "hydrated task store");
        TaskStore {
            persistence,
            key: key.to_string(),
            tasks,
            id_strategy,
            rng,
            persist_error: None,
        }
    }

    /// Add a new pending task. The caller is responsible for rejecting empty titles.
    pub fn create_task(&mut self, title: impl Into<String>) -> Task {
        let id = self.id_strategy.next_id(&self.tasks, &mut self.rng);
        let task = Task::new(id, title);
        if let Some(prev) = self.tasks.insert(id, task.clone()) {
            tracing::warn!(id, replaced = %prev.title, "task id collision, previous task overwritten");
        }
        self.persist();
        task
    }

    /// Mark `id` done. Returns `false` (and does nothing) if it doesn't exist.
    pub fn complete_task(&mut self, id: TaskId) -> bool {
        match self.tasks.get_mut(&id) {
            Some(task) => {
                task.is_completed = true;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Remove `id`. Returns `false` (and does nothing) if it doesn't exist.
    pub fn delete_task(&mut self, id: TaskId) -> bool {
        if self.tasks.remove(&id).is_none() {
            return false;
        }
        self.persist();
        true
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    pub fn all_tasks(&self) -> TaskMap {
        self.tasks.clone()
    }

    pub fn completed_tasks(&self) -> TaskMap {
        self.filtered(|t| t.is_completed)
    }

    pub fn pending_tasks(&self) -> TaskMap {
        self.filtered(|t| !t.is_completed)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    /// The most recent failed write since the last call, if any. Mutations
    /// never fail themselves; callers that need durability check here.
    pub fn take_persist_error(&mut self) -> Option<StorageError> {
        self.persist_error.take()
    }

    /// Give back the underlying key-value store.
    pub fn into_storage(self) -> S {
        self.persistence.into_inner()
    }

    fn filtered(&self, keep: impl Fn(&Task) -> bool) -> TaskMap {
        self.tasks
            .iter()
            .filter(|(_, t)| keep(t))
            .map(|(&id, t)| (id, t.clone()))
            .collect()
    }

    fn persist(&mut self) {
        if let Err(e) = self.persistence.write(&self.key, &self.tasks) {
            tracing::error!(key = %self.key, error = %e, "failed to persist tasks");
            self.persist_error = Some(e);
        }
    }
}

/// Re-key a hydrated collection so every key equals its task's id.
fn rekey(stored: TaskMap) -> TaskMap {
    stored
        .into_iter()
        .map(|(key, task)| {
            if key != task.id {
                tracing::warn!(key, id = task.id, "stored key disagrees with task id, re-keying");
            }
            (task.id, task)
        })
        .collect()
}
