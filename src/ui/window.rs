use gtk4::prelude::*;
use libadwaita::prelude::*;

use super::chat::{build_chat_panel, ChatWidgets};

pub const WINDOW_TITLE: &str = "🧠 IA de JONY - Resolución Inteligente";
pub const WELCOME_PAGE: &str = "welcome";
pub const CHAT_PAGE: &str = "chat";

const LOGO_PATH: &str = "ubuntu_logo.png";
const LOGO_SIZE: i32 = 30;

/// Handles returned from building the main window.
pub struct MainWindowWidgets {
    pub window: libadwaita::ApplicationWindow,
    pub stack: gtk4::Stack,
    pub chat: ChatWidgets,
    /// `None` when the logo image could not be loaded.
    pub logo_button: Option<gtk4::Button>,
}

/// Build the main window, showing the welcome page first.
pub fn build_main_window(app: &libadwaita::Application) -> MainWindowWidgets {
    let window = libadwaita::ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(1200)
        .default_height(800)
        .build();

    let toolbar_view = libadwaita::ToolbarView::new();
    let header = libadwaita::HeaderBar::new();

    let logo_button = build_logo_button();
    if let Some(ref button) = logo_button {
        header.pack_end(button);
    }
    toolbar_view.add_top_bar(&header);

    let welcome = gtk4::Label::new(Some("🧠 Bienvenido a tu inteligencia artificial"));
    welcome.add_css_class("title-1");
    welcome.set_halign(gtk4::Align::Center);
    welcome.set_valign(gtk4::Align::Center);

    let chat = build_chat_panel();

    let stack = gtk4::Stack::new();
    stack.set_transition_type(gtk4::StackTransitionType::Crossfade);
    stack.add_named(&welcome, Some(WELCOME_PAGE));
    stack.add_named(&chat.root, Some(CHAT_PAGE));
    stack.set_visible_child_name(WELCOME_PAGE);

    toolbar_view.set_content(Some(&stack));
    window.set_content(Some(&toolbar_view));

    MainWindowWidgets {
        window,
        stack,
        chat,
        logo_button,
    }
}

fn build_logo_button() -> Option<gtk4::Button> {
    let texture = match gtk4::gdk::Texture::from_filename(LOGO_PATH) {
        Ok(texture) => texture,
        Err(e) => {
            log::warn!("Could not load logo {LOGO_PATH}: {e}");
            return None;
        }
    };

    let image = gtk4::Image::from_paintable(Some(&texture));
    image.set_pixel_size(LOGO_SIZE);

    let button = gtk4::Button::builder()
        .child(&image)
        .tooltip_text("Sobre IA de JONY")
        .build();
    button.add_css_class("flat");
    Some(button)
}
