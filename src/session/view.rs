//! Page projection of the session.
//!
//! The session never touches the page directly; it writes through a
//! [`SessionView`]. The browser build renders into DOM elements, the CLI
//! prints, tests record.

/// Status line, output line, and the button swap on connect.
pub trait SessionView {
    fn set_status(&mut self, status: &str);

    fn set_output(&mut self, output: &str);

    /// Hide the connect action and reveal the block-height action.
    fn show_connected(&mut self);
}

/// In-memory view that keeps the latest values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryView {
    pub status: String,
    pub output: String,
    pub connect_visible: bool,
    pub block_height_visible: bool,
    /// Every status written, oldest first.
    pub status_history: Vec<String>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self {
            connect_visible: true,
            ..Self::default()
        }
    }
}

impl SessionView for MemoryView {
    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
        self.status_history.push(status.to_string());
    }

    fn set_output(&mut self, output: &str) {
        self.output = output.to_string();
    }

    fn show_connected(&mut self) {
        self.connect_visible = false;
        self.block_height_visible = true;
    }
}

/// Prints status and output lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleView;

impl SessionView for ConsoleView {
    fn set_status(&mut self, status: &str) {
        println!("status: {}", status);
    }

    fn set_output(&mut self, output: &str) {
        println!("{}", output);
    }

    fn show_connected(&mut self) {}
}
