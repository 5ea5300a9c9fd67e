use gtk4::prelude::*;
use libadwaita::prelude::*;

/// Show a modal message with a single "Aceptar" button.
fn show_message(parent: &impl IsA<gtk4::Widget>, heading: &str, body: &str) {
    let dialog = libadwaita::AlertDialog::builder()
        .heading(heading)
        .body(body)
        .build();
    dialog.add_response("ok", "Aceptar");
    dialog.set_default_response(Some("ok"));

    let parent_widget: Option<&gtk4::Widget> = Some(parent.upcast_ref());
    dialog.choose(parent_widget, None::<&gtk4::gio::Cancellable>, |_response_id| {});
}

/// Blocking warning, used for invalid user input.
pub fn show_warning(parent: &impl IsA<gtk4::Widget>, heading: &str, body: &str) {
    log::warn!("{heading}: {body}");
    show_message(parent, &format!("⚠️ {heading}"), body);
}

pub fn show_info(parent: &impl IsA<gtk4::Widget>, heading: &str, body: &str) {
    show_message(parent, heading, body);
}

/// The "about" box opened from the logo.
pub fn show_about(parent: &impl IsA<gtk4::Widget>) {
    let body = format!(
        "🧠 IA de JONY - Resolución Inteligente\nVersión {}\n\n\
         Tu asistente para resolver problemas paso a paso con estilo, claridad y motivación.",
        env!("CARGO_PKG_VERSION")
    );
    show_message(parent, "Sobre IA de JONY", &body);
}
