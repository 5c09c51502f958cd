mod commands;
mod error;
mod state;

pub use error::SwimHubError;

pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .manage(state::PracticeLogState::new())
        .invoke_handler(tauri::generate_handler![
            commands::practice_log::sync_practice_log,
            commands::practice_log::add_practice_menu,
            commands::practice_log::remove_practice_menu,
            commands::practice_log::update_practice_menu,
            commands::practice_log::set_practice_menu_tags,
            commands::practice_log::open_practice_time_editor,
            commands::practice_log::practice_time_editor_request,
            commands::practice_log::current_practice_menu,
            commands::practice_log::save_practice_times,
            commands::practice_log::cancel_practice_time_editor,
            commands::practice_log::apply_practice_template,
            commands::practice_log::replace_practice_menus,
            commands::practice_log::prepare_practice_submit,
            commands::practice_log::mark_practice_submitted,
            commands::practice_log::practice_form_snapshot,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
