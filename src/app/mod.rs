mod actions;
mod event_handler;
mod pipeline;
mod state;
mod transcript;

pub use actions::{on_new_chat, on_save_pdf, on_send, on_save_text};
pub use event_handler::schedule_chat;
pub use state::AppState;
