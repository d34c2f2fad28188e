use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use url::Url;

/// A URL pending visit, paired with its discovery depth.
#[derive(Debug, Clone)]
pub struct FrontierEntry {
    pub url: Url,
    pub depth: usize,
}

/// FIFO worklist plus visited set. The queue and the set live behind one
/// lock so `offer` is a single atomic check-and-insert: a URL can be
/// enqueued at most once for the lifetime of the crawl.
pub struct Frontier {
    inner: Mutex<Inner>,
}

struct Inner {
    queue: VecDeque<FrontierEntry>,
    visited: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                queue: VecDeque::new(),
                visited: HashSet::new(),
            }),
        }
    }

    /// Enqueues the entry unless its URL was already offered. Returns
    /// whether the entry was accepted.
    pub fn offer(&self, entry: FrontierEntry) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if !inner.visited.insert(entry.url.as_str().to_string()) {
            return false;
        }
        inner.queue.push_back(entry);
        true
    }

    /// Dequeues in FIFO order; `None` means the frontier is exhausted.
    pub fn take(&self) -> Option<FrontierEntry> {
        self.inner.lock().unwrap().queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().unwrap().queue.is_empty()
    }

    /// How many distinct URLs have ever been offered.
    pub fn visited_count(&self) -> usize {
        self.inner.lock().unwrap().visited.len()
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
