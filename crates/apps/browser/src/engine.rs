//! Address resolution, history stack, and simulated loading for one browser window.

use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Search endpoint used for input that does not look like an address.
pub const SEARCH_ENDPOINT: &str = "https://www.google.com/search?q=";

/// Query-component escape set: every byte except alphanumerics and `- _ . ! ~ * ' ( )`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Simulated network latency before the loading indicator clears.
pub const LOAD_DELAY: Duration = Duration::from_millis(500);

/// Resolves free-form address-bar input into a fully-qualified URL.
///
/// Input without a `.`, or with a space anywhere, becomes a search query. Everything else is
/// treated as an address and gets `https://` prepended unless it already has an http(s) scheme.
/// The rule is deliberately naive: `a.b` and `file.txt` resolve as addresses.
pub fn resolve_address(input: &str) -> String {
    let trimmed = input.trim();

    if !trimmed.contains('.') || trimmed.contains(' ') {
        return format!("{SEARCH_ENDPOINT}{}", utf8_percent_encode(trimmed, QUERY_COMPONENT));
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Cursor-addressed stack of resolved addresses.
///
/// `cursor` is `None` exactly when `entries` is empty.
pub struct NavigationHistory {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl NavigationHistory {
    /// Appends a resolved address, discarding any forward entries past the cursor.
    pub fn push(&mut self, resolved: String) {
        match self.cursor {
            Some(cursor) => self.entries.truncate(cursor + 1),
            None => self.entries.clear(),
        }
        self.entries.push(resolved);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Steps back one entry. Returns the new current address, or `None` at the oldest entry.
    pub fn back(&mut self) -> Option<&str> {
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                self.current()
            }
            _ => None,
        }
    }

    /// Steps forward one entry. Returns the new current address, or `None` at the newest entry.
    pub fn forward(&mut self) -> Option<&str> {
        match self.cursor {
            Some(cursor) if cursor + 1 < self.entries.len() => {
                self.cursor = Some(cursor + 1);
                self.current()
            }
            _ => None,
        }
    }

    /// Returns the address the cursor points at.
    pub fn current(&self) -> Option<&str> {
        self.cursor
            .and_then(|cursor| self.entries.get(cursor))
            .map(String::as_str)
    }

    /// Returns the cursor position, `None` while empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Returns every retained entry, oldest first.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether [`Self::back`] would move the cursor.
    pub fn can_go_back(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor > 0)
    }

    /// Whether [`Self::forward`] would move the cursor.
    pub fn can_go_forward(&self) -> bool {
        matches!(self.cursor, Some(cursor) if cursor + 1 < self.entries.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Observable load phase of a browser window.
pub enum LoadPhase {
    /// Nothing has been navigated to yet.
    Empty,
    /// A simulated load is in flight.
    Loading,
    /// The current address is displayed.
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the caller must schedule `BrowserSession::finish_loading` after the delay"]
/// Instruction to clear the loading flag once `delay` has elapsed.
pub struct LoadRequest {
    /// Time until the loading indicator clears.
    pub delay: Duration,
}

impl LoadRequest {
    fn start() -> Self {
        Self { delay: LOAD_DELAY }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Navigation state of one browser window: history, address-bar text, loading flag.
pub struct BrowserSession {
    history: NavigationHistory,
    address_text: String,
    loading: bool,
}

impl BrowserSession {
    /// Returns the text currently shown in the address bar.
    pub fn address_text(&self) -> &str {
        &self.address_text
    }

    /// Replaces the address-bar text as the user types.
    pub fn set_address_text(&mut self, text: impl Into<String>) {
        self.address_text = text.into();
    }

    /// Returns the resolved address currently displayed.
    pub fn current_address(&self) -> Option<&str> {
        self.history.current()
    }

    /// Returns the history stack.
    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Whether the loading indicator is visible.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the current load phase.
    pub fn phase(&self) -> LoadPhase {
        if self.loading {
            LoadPhase::Loading
        } else if self.history.current().is_some() {
            LoadPhase::Loaded
        } else {
            LoadPhase::Empty
        }
    }

    /// Resolves `raw`, pushes it onto history, and starts loading.
    pub fn navigate(&mut self, raw: &str) -> LoadRequest {
        self.history.push(resolve_address(raw));
        self.address_text = raw.to_string();
        self.start_loading()
    }

    /// Navigates to the address-bar text unless it is blank.
    pub fn submit(&mut self) -> Option<LoadRequest> {
        if self.address_text.trim().is_empty() {
            return None;
        }
        let raw = self.address_text.clone();
        Some(self.navigate(&raw))
    }

    /// Steps back in history and reloads the revealed entry.
    pub fn back(&mut self) -> Option<LoadRequest> {
        let address = self.history.back()?.to_string();
        self.address_text = address;
        Some(self.start_loading())
    }

    /// Steps forward in history and reloads the revealed entry.
    pub fn forward(&mut self) -> Option<LoadRequest> {
        let address = self.history.forward()?.to_string();
        self.address_text = address;
        Some(self.start_loading())
    }

    /// Restarts loading of the current address; history is untouched.
    pub fn refresh(&mut self) -> Option<LoadRequest> {
        self.history.current()?;
        Some(self.start_loading())
    }

    /// Clears the loading flag.
    ///
    /// Runs when any scheduled delay elapses. A stale timer from a superseded load may clear the
    /// flag early; the flag carries no request identity.
    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    /// Returns the address a disguised tab should show, if any.
    pub fn disguise_target(&self) -> Option<&str> {
        self.history.current()
    }

    fn start_loading(&mut self) -> LoadRequest {
        self.loading = true;
        LoadRequest::start()
    }
}
