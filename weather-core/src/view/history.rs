use std::collections::VecDeque;

pub const HISTORY_CAPACITY: usize = 10;

/// One successful lookup: what was typed and the local time it resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub query: String,
    pub local_time: String,
}

impl HistoryEntry {
    pub fn new(query: impl Into<String>, local_time: impl Into<String>) -> Self {
        Self { query: query.into(), local_time: local_time.into() }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}  -  {}", self.query, self.local_time)
    }
}

/// Most-recent-first list of lookups, capped; the oldest entry drops off.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { entries: VecDeque::with_capacity(capacity), capacity }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(i: usize) -> HistoryEntry {
        HistoryEntry::new(format!("city-{i}"), "2023-11-14 23:13")
    }

    #[test]
    fn newest_entry_comes_first() {
        let mut history = History::new();
        history.push(entry(1));
        history.push(entry(2));

        let queries: Vec<_> = history.iter().map(|e| e.query.as_str()).collect();
        assert_eq!(queries, ["city-2", "city-1"]);
        assert_eq!(history.latest().unwrap().query, "city-2");
    }

    #[test]
    fn oldest_entry_is_evicted_at_capacity() {
        let mut history = History::new();
        for i in 0..11 {
            history.push(entry(i));
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.latest().unwrap().query, "city-10");
        assert!(history.iter().all(|e| e.query != "city-0"));
        assert_eq!(history.iter().last().unwrap().query, "city-1");
    }

    #[test]
    fn zero_capacity_still_keeps_latest() {
        let mut history = History::with_capacity(0);
        history.push(entry(1));
        history.push(entry(2));

        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().query, "city-2");
    }

    #[test]
    fn display_joins_query_and_time() {
        assert_eq!(entry(3).to_string(), "city-3  -  2023-11-14 23:13");
    }
}
