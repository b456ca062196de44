// File: src/history.rs
// Purpose: History backends that navigation writes to and reads from

use crate::path::{join_base, normalize_base, strip_base};

/// How the current location was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationType {
    /// New entry added on top of history
    Push,
    /// Current entry overwritten
    Replace,
    /// Moved through existing entries (back / forward / go)
    Pop,
}

/// State stored alongside each history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryState {
    /// Index of the entry in the history stack
    pub position: usize,
    /// Whether the entry was written by a replace
    pub replaced: bool,
}

/// One entry of the history stack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Browser URL, base included
    pub url: String,
    pub state: HistoryState,
}

/// Browser-style history: a stack of URLs with a cursor
///
/// Implementations store URLs with the base prepended and report
/// [`location`](History::location) with the base stripped, so the router
/// only ever deals with app-relative URLs. None of the operations reload
/// anything; they only move the cursor or rewrite entries.
pub trait History {
    /// Normalized base path (`""` when served from the root)
    fn base(&self) -> &str;

    /// Current app-relative URL
    fn location(&self) -> String;

    /// State of the current entry
    fn state(&self) -> &HistoryState;

    /// Adds an entry after the cursor, dropping any forward entries
    fn push(&mut self, url: &str);

    /// Overwrites the current entry
    fn replace(&mut self, url: &str);

    /// Moves the cursor by `delta`; returns `false` (and stays put) when out of range
    fn go(&mut self, delta: isize) -> bool;

    /// Number of entries
    fn len(&self) -> usize;

    /// Whether history holds no entries
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory history stack
///
/// # Examples
///
/// ```
/// use session_router::{History, MemoryHistory};
///
/// let mut history = MemoryHistory::with_base("/app");
/// history.push("/abc123");
/// assert_eq!(history.location(), "/abc123");
/// assert_eq!(history.current_url(), "/app/abc123");
///
/// assert!(history.go(-1));
/// assert_eq!(history.location(), "/");
/// assert!(!history.go(-1));
/// ```
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    base: String,
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl MemoryHistory {
    /// History served from the root, starting at `/`
    pub fn new() -> Self {
        Self::with_base("")
    }

    /// History served under `base`, starting at the base itself
    pub fn with_base(base: &str) -> Self {
        let base = normalize_base(base);
        let entries = vec![HistoryEntry {
            url: join_base("/", &base),
            state: HistoryState {
                position: 0,
                replaced: false,
            },
        }];

        Self {
            base,
            entries,
            index: 0,
        }
    }

    /// Sets the URL of the initial entry, like a page loaded at that address
    pub fn starting_at(mut self, url: &str) -> Self {
        self.replace(url);
        self.entries[self.index].state.replaced = false;
        self
    }

    /// Browser URL of the current entry, base included
    pub fn current_url(&self) -> &str {
        &self.entries[self.index].url
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Cursor position
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl History for MemoryHistory {
    fn base(&self) -> &str {
        &self.base
    }

    fn location(&self) -> String {
        strip_base(self.current_url(), &self.base).into_owned()
    }

    fn state(&self) -> &HistoryState {
        &self.entries[self.index].state
    }

    fn push(&mut self, url: &str) {
        self.entries.truncate(self.index + 1);
        self.index += 1;
        self.entries.push(HistoryEntry {
            url: join_base(url, &self.base),
            state: HistoryState {
                position: self.index,
                replaced: false,
            },
        });
    }

    fn replace(&mut self, url: &str) {
        self.entries[self.index] = HistoryEntry {
            url: join_base(url, &self.base),
            state: HistoryState {
                position: self.index,
                replaced: true,
            },
        };
    }

    fn go(&mut self, delta: isize) -> bool {
        match self.index.checked_add_signed(delta) {
            Some(target) if delta != 0 && target < self.entries.len() => {
                self.index = target;
                true
            }
            _ => false,
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
