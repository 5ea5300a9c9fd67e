use gtk4::prelude::*;

/// Handles returned from building the chat panel.
pub struct ChatWidgets {
    pub root: gtk4::Box,
    pub text_view: gtk4::TextView,
    pub end_mark: gtk4::TextMark,
    pub entry: gtk4::Entry,
    pub send_button: gtk4::Button,
    pub new_chat_button: gtk4::Button,
    pub save_pdf_button: gtk4::Button,
    pub save_text_button: gtk4::Button,
}

/// Build the transcript view, the input field and the action buttons.
pub fn build_chat_panel() -> ChatWidgets {
    let root = gtk4::Box::new(gtk4::Orientation::Vertical, 10);
    root.set_margin_start(20);
    root.set_margin_end(20);
    root.set_margin_top(20);
    root.set_margin_bottom(20);

    // --- Transcript ---
    let text_view = gtk4::TextView::builder()
        .editable(false)
        .cursor_visible(false)
        .wrap_mode(gtk4::WrapMode::WordChar)
        .left_margin(8)
        .right_margin(8)
        .top_margin(8)
        .bottom_margin(8)
        .build();
    let buffer = text_view.buffer();
    // Right gravity keeps the mark after anything inserted at the end.
    let end_mark = buffer.create_mark(Some("transcript-end"), &buffer.end_iter(), false);

    let scrolled = gtk4::ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .vexpand(true)
        .child(&text_view)
        .build();
    scrolled.add_css_class("card");
    root.append(&scrolled);

    // --- Input row ---
    let bottom = gtk4::Box::new(gtk4::Orientation::Horizontal, 6);

    let entry = gtk4::Entry::builder()
        .placeholder_text("Escribe aquí el problema...")
        .hexpand(true)
        .build();
    bottom.append(&entry);

    let send_button = action_button("📨 Enviar");
    send_button.add_css_class("suggested-action");
    let new_chat_button = action_button("🆕 Nuevo Chat");
    let save_pdf_button = action_button("📄 Guardar PDF");
    let save_text_button = action_button("💾 Guardar");

    for button in [&send_button, &new_chat_button, &save_pdf_button, &save_text_button] {
        bottom.append(button);
    }
    root.append(&bottom);

    ChatWidgets {
        root,
        text_view,
        end_mark,
        entry,
        send_button,
        new_chat_button,
        save_pdf_button,
        save_text_button,
    }
}

fn action_button(label: &str) -> gtk4::Button {
    gtk4::Button::builder()
        .label(label)
        .valign(gtk4::Align::Center)
        .build()
}

/// Append rendered transcript text and keep the newest line in view.
pub fn append_block(chat: &ChatWidgets, text: &str) {
    let buffer = chat.text_view.buffer();
    let mut end = buffer.end_iter();
    buffer.insert(&mut end, text);
    chat.text_view.scroll_mark_onscreen(&chat.end_mark);
}

pub fn clear_blocks(chat: &ChatWidgets) {
    chat.text_view.buffer().set_text("");
}
