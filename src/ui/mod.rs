pub mod chat;
pub mod dialogs;
pub mod window;
