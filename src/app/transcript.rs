pub const USER_LABEL: &str = "👤 Tú:";
pub const AI_LABEL: &str = "🤖 IA de JONY:";

/// One labeled block of the chat transcript.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    User(String),
    Response(String),
    /// Errors and export notices.
    Notice(String),
}

impl Entry {
    /// Text exactly as it appears in the chat panel.
    pub fn render(&self) -> String {
        match self {
            Entry::User(text) => format!("{USER_LABEL} {text}\n"),
            Entry::Response(text) => format!("{AI_LABEL}\n\n{text}\n"),
            Entry::Notice(text) => format!("{text}\n"),
        }
    }
}

/// Append-only log of the current conversation, in arrival order.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Full rendered text, as shown on screen and saved by the exporters.
    pub fn text(&self) -> String {
        self.entries.iter().map(Entry::render).collect()
    }
}
