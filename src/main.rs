mod app;
mod config;
mod export;
mod gemini;
mod prompt;
mod reflow;
mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use gtk4::prelude::*;

use app::AppState;
use config::Config;

fn main() {
    env_logger::init();
    log::info!("IA de JONY starting");

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => fatal(&e),
    };
    log::info!(
        "Using model {} (exports go to {})",
        config.settings.model,
        config.settings.export_dir.display()
    );

    let tokio_rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => fatal(&e),
    };

    let state = Rc::new(RefCell::new(AppState::new(config, tokio_rt)));

    let application = libadwaita::Application::builder()
        .application_id("com.github.jony.ia-de-jony")
        .build();

    application.connect_activate(move |app| on_activate(app, &state));
    application.run();
}

fn fatal(err: &dyn std::fmt::Display) -> ! {
    log::error!("Fatal: {err}");
    eprintln!("Error: {err}");
    std::process::exit(1);
}

fn on_activate(app: &libadwaita::Application, state: &Rc<RefCell<AppState>>) {
    // A second launch just raises the existing window.
    if let Some(ref main) = state.borrow().main_window {
        main.window.present();
        return;
    }

    let main = ui::window::build_main_window(app);

    // Wire up the chat actions
    {
        let state_clone = state.clone();
        main.chat.send_button.connect_clicked(move |_| app::on_send(&state_clone));
    }
    {
        let state_clone = state.clone();
        main.chat.entry.connect_activate(move |_| app::on_send(&state_clone));
    }
    {
        let state_clone = state.clone();
        main.chat
            .new_chat_button
            .connect_clicked(move |_| app::on_new_chat(&state_clone));
    }
    {
        let state_clone = state.clone();
        main.chat
            .save_pdf_button
            .connect_clicked(move |_| app::on_save_pdf(&state_clone));
    }
    {
        let state_clone = state.clone();
        main.chat
            .save_text_button
            .connect_clicked(move |_| app::on_save_text(&state_clone));
    }

    // Logo opens the about box
    if let Some(ref logo) = main.logo_button {
        let window = main.window.clone();
        logo.connect_clicked(move |_| ui::dialogs::show_about(&window));
    }

    main.window.present();
    state.borrow_mut().main_window = Some(main);

    app::schedule_chat(state);
}
