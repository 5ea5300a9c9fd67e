use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gtk4::glib;
use gtk4::prelude::*;

use super::state::{AppState, ChatEvent};
use super::transcript::{Entry, Transcript};
use crate::ui::chat::append_block;
use crate::ui::window::CHAT_PAGE;

/// How long the welcome page stays up before the chat panel replaces it.
pub const WELCOME_DELAY: Duration = Duration::from_secs(2);
const POLL_INTERVAL: Duration = Duration::from_millis(150);

/// Move every event currently in the queue into the transcript, in arrival order.
/// Never waits. Returns the index of the first entry that was added.
pub fn drain_events(rx: &async_channel::Receiver<ChatEvent>, transcript: &mut Transcript) -> usize {
    let first_new = transcript.len();
    while let Ok(event) = rx.try_recv() {
        transcript.push(event.into());
    }
    first_new
}

/// Append an entry to the transcript and show it in the chat panel.
pub fn append_entry(state: &mut AppState, entry: Entry) {
    if let Some(ref main) = state.main_window {
        append_block(&main.chat, &entry.render());
    }
    state.transcript.push(entry);
}

/// Swap the welcome page for the chat panel after [`WELCOME_DELAY`].
pub fn schedule_chat(state: &Rc<RefCell<AppState>>) {
    let state_clone = state.clone();
    glib::timeout_add_local_once(WELCOME_DELAY, move || show_chat(&state_clone));
}

fn show_chat(state: &Rc<RefCell<AppState>>) {
    if let Some(ref main) = state.borrow().main_window {
        main.stack.set_visible_child_name(CHAT_PAGE);
        main.chat.entry.grab_focus();
    }
    start_polling(state);
}

/// Drain the UI queue on a fixed tick for the lifetime of the window.
fn start_polling(state: &Rc<RefCell<AppState>>) {
    if state.borrow().poll_source.is_some() {
        return;
    }
    let state_clone = state.clone();
    let source = glib::timeout_add_local(POLL_INTERVAL, move || {
        poll_events(&state_clone);
        glib::ControlFlow::Continue
    });
    state.borrow_mut().poll_source = Some(source);
}

fn poll_events(state: &Rc<RefCell<AppState>>) {
    let mut guard = state.borrow_mut();
    let s = &mut *guard;
    let first_new = drain_events(&s.event_receiver, &mut s.transcript);

    if let Some(ref main) = s.main_window {
        for entry in &s.transcript.entries()[first_new..] {
            append_block(&main.chat, &entry.render());
        }
    }
}
