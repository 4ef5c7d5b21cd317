//! Task ID interning.
//!
//! Maps opaque task ID strings to dense integer positions so the graph can be
//! stored in plain vectors. Positions are handed out in first-appearance order,
//! which is the order every tie-break in the engine is anchored to.

use rustc_hash::FxHashMap;

/// Interned task ID (u32 for compact storage).
pub type TaskIdInt = u32;

/// String interner that maps task ID strings to positions.
#[derive(Debug, Clone)]
pub struct TaskIndex {
    to_int: FxHashMap<String, TaskIdInt>,
    from_int: Vec<String>,
}

impl TaskIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_int: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_int: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string, returning its position.
    /// If already interned, returns the existing position.
    pub fn intern(&mut self, s: &str) -> TaskIdInt {
        if let Some(&id) = self.to_int.get(s) {
            return id;
        }
        let id = self.from_int.len() as TaskIdInt;
        self.from_int.push(s.to_string());
        self.to_int.insert(s.to_string(), id);
        id
    }

    #[inline]
    pub fn get(&self, s: &str) -> Option<TaskIdInt> {
        self.to_int.get(s).copied()
    }

    #[inline]
    pub fn resolve(&self, id: TaskIdInt) -> Option<&str> {
        self.from_int.get(id as usize).map(|s| s.as_str())
    }

    /// Resolve a sequence of positions back to owned task IDs.
    pub fn resolve_all(&self, ids: &[TaskIdInt]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| self.resolve(id))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.from_int.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_int.is_empty()
    }
}

impl Default for TaskIndex {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
