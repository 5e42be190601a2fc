use parking_lot::Mutex;
use std::{
    collections::VecDeque,
    sync::Arc,
};

const CAPACITY: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

/// The global notification area shared by all controllers of a
/// platform.  Only the most recent notices are retained.
#[derive(Clone, Debug, Default)]
pub struct Notifier {
    notices: Arc<Mutex<VecDeque<Notice>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(Level::Info, message.into())
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Level::Error, message.into())
    }

    fn push(&self, level: Level, message: String) {
        let mut notices = self.notices.lock();
        if notices.len() >= CAPACITY {
            notices.pop_front();
        }
        notices.push_back(Notice { level, message });
    }

    /// Take every pending notice, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        self.notices.lock().drain(..).collect()
    }

    pub fn last_error(&self) -> Option<String> {
        self.notices.lock()
            .iter()
            .rev()
            .find(|notice| notice.level == Level::Error)
            .map(|notice| notice.message.clone())
    }

    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_between_clones() {
        let notifier = Notifier::new();
        let other = notifier.clone();
        other.error("failed");
        notifier.info("saved");
        assert_eq!(notifier.len(), 2);
        assert_eq!(notifier.last_error().as_deref(), Some("failed"));
        assert_eq!(other.drain(), vec![
            Notice { level: Level::Error, message: "failed".to_string() },
            Notice { level: Level::Info, message: "saved".to_string() },
        ]);
        assert!(notifier.is_empty());
    }

    #[test]
    fn bounded() {
        let notifier = Notifier::new();
        for i in 0..CAPACITY + 5 {
            notifier.info(format!("{i}"));
        }
        let notices = notifier.drain();
        assert_eq!(notices.len(), CAPACITY);
        assert_eq!(notices[0].message, "5");
    }
}
