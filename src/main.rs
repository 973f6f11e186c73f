use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;

mod components;
mod config;
mod error;
mod i18n;
mod presenter;
mod preview;
mod session;

use components::FinderScreen;
use config::{AppConfig, StartupConfig};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();

    let config: StartupConfig = AppConfig::from_env();
    match &config {
        Ok(config) => log::info!("Using search backend at {}", config.base_url()),
        Err(e) => log::error!("{}", e),
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

fn init_logging() {
    #[cfg(target_os = "android")]
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("findme"),
    );

    #[cfg(not(target_os = "android"))]
    {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        FinderScreen {}
    }
}
