//! Status log shown beneath the editor panels.
use std::collections::VecDeque;

/// Severity level for status messages.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
        }
    }
}

/// Bounded buffer of status messages; the oldest entry is dropped when full.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Info));
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Warning));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, MessageLevel::Error));
    }

    /// Newest entries first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_when_full() {
        let mut log = MessageLog::new(2);
        log.info("one");
        log.warn("two");
        log.error("three");

        let texts: Vec<_> = log.recent(10).map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["three", "two"]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn zero_capacity_still_keeps_one() {
        let mut log = MessageLog::new(0);
        log.info("kept");
        assert_eq!(log.recent(1).next().unwrap().level, MessageLevel::Info);
    }
}
