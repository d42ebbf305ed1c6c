// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod bingo;
pub mod compat;
mod components;
pub mod hooks;

use app_state::AppState;
use components::bingo_card::BingoCard;
use components::pico::Container;
use components::wallet_gate::WalletGate;
use wallet::config::GateConfig;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    html, body {
        min-height: 100%;
        margin: 0;
        padding: 0;
    }

    .app-main-container header {
        padding-top: 1rem;
    }

    /* --- WALLET GATE --- */
    .wallet-toolbar {
        justify-content: flex-end;
    }

    .account-badge {
        font-size: 0.8rem;
    }

    /* --- BINGO CARD --- */
    .bingo-grid {
        table-layout: fixed;
        max-width: 30rem;
        margin: 0 auto;
    }

    .bingo-grid th,
    .bingo-grid td {
        text-align: center;
    }

    .bingo-square {
        cursor: pointer;
        user-select: none;
        font-weight: bold;
    }

    .bingo-square.marked {
        background-color: color-mix(in srgb, var(--pico-primary), transparent 70%);
    }

    .bingo-square.winning {
        background-color: var(--pico-primary-background);
        color: var(--pico-primary-inverse);
    }

    .bingo-banner {
        text-align: center;
        font-size: 2rem;
        font-weight: bold;
        color: var(--pico-primary);
    }
"#;

    use_context_provider(|| AppState::new(GateConfig::from_env()));

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        link {
            rel: "stylesheet",
            href: PICO_CSS,
        }
        style {
            "{responsive_css}"
        }
        div {
            class: "app-main-container",
            Container {
                header {
                    WalletGate {
                        BingoCard {}
                    }
                }
            }
        }
    }
}
