use std::sync::Arc;

use gtk4::glib;

use super::transcript::{Entry, Transcript};
use crate::config::Config;
use crate::gemini::{GeminiClient, TextModel};
use crate::ui::window::MainWindowWidgets;

/// Messages handed from the send handler and worker tasks to the GTK main thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    User(String),
    Response(String),
    Error(String),
}

impl From<ChatEvent> for Entry {
    fn from(event: ChatEvent) -> Self {
        match event {
            ChatEvent::User(text) => Entry::User(text),
            ChatEvent::Response(text) => Entry::Response(text),
            ChatEvent::Error(text) => Entry::Notice(text),
        }
    }
}

/// Central application state. Lives on the GTK main thread inside Rc<RefCell<>>.
pub struct AppState {
    pub config: Config,
    pub tokio_rt: tokio::runtime::Runtime,
    pub model: Arc<dyn TextModel>,
    pub event_sender: async_channel::Sender<ChatEvent>,
    pub event_receiver: async_channel::Receiver<ChatEvent>,
    pub transcript: Transcript,
    pub poll_source: Option<glib::SourceId>,

    // UI handles
    pub main_window: Option<MainWindowWidgets>,
}

impl AppState {
    pub fn new(config: Config, tokio_rt: tokio::runtime::Runtime) -> Self {
        let model: Arc<dyn TextModel> = Arc::new(GeminiClient::new(
            config.api_key.clone(),
            config.settings.model.clone(),
        ));
        let (event_sender, event_receiver) = async_channel::unbounded();

        Self {
            config,
            tokio_rt,
            model,
            event_sender,
            event_receiver,
            transcript: Transcript::default(),
            poll_source: None,
            main_window: None,
        }
    }
}
