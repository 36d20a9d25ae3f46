//! To-Do Frontend Entry Point

use leptos::prelude::*;
use todo_ui::app::App;
use todo_ui::config::AppConfig;
use todo_ui::logging;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.log_level);
    log::info!("mounting {}", config.title);

    mount_to_body(move || view! { <App config=config /> });
}
