use dioxus::prelude::*;
use wallet::config::GateConfig;

fn main() {

    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let config = GateConfig::from_env();
    dioxus_logger::init(config.log_level).expect("failed to init logger");
    dioxus_logger::tracing::info!("starting base-bingo, account badge shown: {}", config.show_account);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::App()
}
