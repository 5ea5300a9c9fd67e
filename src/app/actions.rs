use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use gtk4::prelude::*;

use super::event_handler::append_entry;
use super::pipeline::{dispatch_problem, SendError};
use super::state::AppState;
use super::transcript::Entry;
use crate::export::{self, ExportError, PDF_FILE_NAME, TEXT_FILE_NAME};
use crate::ui::chat::clear_blocks;
use crate::ui::dialogs::{show_info, show_warning};

const NOTHING_TO_SAVE: &str = "No hay contenido para guardar.";

/// "Enviar" button and Enter in the input field.
pub fn on_send(state: &Rc<RefCell<AppState>>) {
    let s = state.borrow();
    let Some(ref main) = s.main_window else {
        return;
    };
    let input = main.chat.entry.text();

    match dispatch_problem(
        s.tokio_rt.handle(),
        s.model.clone(),
        &s.event_sender,
        input.as_str(),
    ) {
        Ok(_) => main.chat.entry.set_text(""),
        Err(e @ SendError::EmptyProblem) => show_warning(&main.window, "Aviso", &e.to_string()),
        Err(e) => log::error!("Could not dispatch problem: {e}"),
    }
}

/// "Nuevo Chat": forget the conversation shown so far.
pub fn on_new_chat(state: &Rc<RefCell<AppState>>) {
    let mut s = state.borrow_mut();
    s.transcript.clear();
    if let Some(ref main) = s.main_window {
        clear_blocks(&main.chat);
    }
    log::info!("Transcript cleared");
}

pub fn on_save_pdf(state: &Rc<RefCell<AppState>>) {
    let path = state.borrow().config.settings.export_dir.join(PDF_FILE_NAME);
    let result = export::save_pdf(&state.borrow().transcript.text(), &path);
    report_export(
        state,
        result,
        &path,
        format!("📄 PDF guardado como '{}'", path.display()),
        "❌ Error al guardar PDF",
    );
}

pub fn on_save_text(state: &Rc<RefCell<AppState>>) {
    let path = state.borrow().config.settings.export_dir.join(TEXT_FILE_NAME);
    let result = export::save_text(&state.borrow().transcript.text(), &path);
    report_export(
        state,
        result,
        &path,
        format!("💾 Conversación guardada en '{}'", path.display()),
        "❌ Error al guardar conversación",
    );
}

fn report_export(
    state: &Rc<RefCell<AppState>>,
    result: Result<(), ExportError>,
    path: &Path,
    success: String,
    failure_prefix: &str,
) {
    let mut s = state.borrow_mut();
    match result {
        Ok(()) => {
            log::info!("Exported transcript to {}", path.display());
            append_entry(&mut s, Entry::Notice(success));
        }
        Err(ExportError::NothingToSave) => {
            if let Some(ref main) = s.main_window {
                show_info(&main.window, "Info", NOTHING_TO_SAVE);
            }
        }
        Err(e) => {
            log::error!("Export to {} failed: {e}", path.display());
            append_entry(&mut s, Entry::Notice(format!("{failure_prefix}: {e}")));
        }
    }
}
