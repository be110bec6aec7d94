//! Task record and id generation.

use std::collections::BTreeMap;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub type TaskId = u64;

/// Exclusive upper bound of the random id range (ids fall in `0..=998`).
pub const RANDOM_ID_BOUND: TaskId = 999;

/// A single to-do item.
///
/// Serialized as `{"id": 3, "title": "...", "isCompleted": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl Task {
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task { id, title: title.into(), is_completed: false }
    }
}

/// How new task ids are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum IdStrategy {
    /// Uniform draw from `0..=998` with no uniqueness check. A clash replaces
    /// the existing task.
    #[default]
    Random,
    /// One past the largest id in use, or the smallest free id once the
    /// largest is `u64::MAX`. Never clashes.
    Sequential,
}

impl IdStrategy {
    /// Pick an id for a task about to be added to `tasks`.
    pub fn next_id<R: Rng>(self, tasks: &BTreeMap<TaskId, Task>, rng: &mut R) -> TaskId {
        match self {
            IdStrategy::Random => rng.gen_range(0..RANDOM_ID_BOUND),
            IdStrategy::Sequential => tasks
                .keys()
                .next_back()
                .map_or(Some(1), |max| max.checked_add(1))
                .unwrap_or_else(|| smallest_unused_id(tasks)),
        }
    }
}

/// Lowest id not present in `tasks`. Keys come back ascending, so the first
/// position that doesn't match its key is a gap.
fn smallest_unused_id(tasks: &BTreeMap<TaskId, Task>) -> TaskId {
    (0..)
        .zip(tasks.keys())
        .find(|&(expected, id)| expected != *id)
        .map_or(tasks.len() as TaskId, |(gap, _)| gap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_task_json_shape() {
        let t = Task::new(42, "Buy milk");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"id":42,"title":"Buy milk","isCompleted":false}"#);

        let back: Task = serde_json::from_str(r#"{"id":42,"title":"Buy milk","isCompleted":true}"#).unwrap();
        assert!(back.is_completed);
    }

    #[test]
    fn test_missing_completed_flag_defaults_false() {
        let t: Task = serde_json::from_str(r#"{"id":1,"title":"x"}"#).unwrap();
        assert!(!t.is_completed);
    }

    #[test]
    fn test_random_ids_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let tasks = BTreeMap::new();
        for _ in 0..2000 {
            let id = IdStrategy::Random.next_id(&tasks, &mut rng);
            assert!(id < RANDOM_ID_BOUND);
        }
    }

    #[test]
    fn test_sequential_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tasks = BTreeMap::new();
        assert_eq!(IdStrategy::Sequential.next_id(&tasks, &mut rng), 1);

        tasks.insert(5, Task::new(5, "a"));
        tasks.insert(2, Task::new(2, "b"));
        assert_eq!(IdStrategy::Sequential.next_id(&tasks, &mut rng), 6);
    }

    #[test]
    fn test_sequential_at_max_id_reuses_lowest_gap() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tasks = BTreeMap::new();
        tasks.insert(TaskId::MAX, Task::new(TaskId::MAX, "last"));
        assert_eq!(IdStrategy::Sequential.next_id(&tasks, &mut rng), 0);

        tasks.insert(0, Task::new(0, "a"));
        tasks.insert(1, Task::new(1, "b"));
        tasks.insert(3, Task::new(3, "c"));
        assert_eq!(IdStrategy::Sequential.next_id(&tasks, &mut rng), 2);
    }
}
