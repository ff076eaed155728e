use pawfeed_domain::{Reminder, ID};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Read-through cache over reminder list queries, keyed by family group.
///
/// Owned by the context rather than being a module-level variable: mutating
/// use cases call `invalidate` for the touched group so the next read goes
/// back to the store.
#[derive(Clone)]
pub struct ReminderQueryCache {
    entries: Arc<Mutex<HashMap<ID, Vec<Reminder>>>>,
}

impl ReminderQueryCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn get(&self, group_id: &ID) -> Option<Vec<Reminder>> {
        let entries = self.entries.lock().unwrap();
        entries.get(group_id).cloned()
    }

    pub fn set(&self, group_id: &ID, reminders: Vec<Reminder>) {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(group_id.clone(), reminders);
    }

    pub fn invalidate(&self, group_id: &ID) {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(group_id);
    }
}

impl Default for ReminderQueryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caches_per_group_and_invalidates() {
        let cache = ReminderQueryCache::new();
        let group_1 = ID::new();
        let group_2 = ID::new();

        assert!(cache.get(&group_1).is_none());

        cache.set(&group_1, vec![Reminder::new(group_1.clone())]);
        cache.set(&group_2, Vec::new());
        assert_eq!(cache.get(&group_1).unwrap().len(), 1);
        assert_eq!(cache.get(&group_2).unwrap().len(), 0);

        cache.invalidate(&group_1);
        assert!(cache.get(&group_1).is_none());
        // Other groups are untouched
        assert!(cache.get(&group_2).is_some());
    }
}
