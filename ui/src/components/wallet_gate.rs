//=============================================================================
// File: src/components/wallet_gate.rs
//=============================================================================
use dioxus::prelude::*;
use wallet::GateView;

use crate::app_state::AppState;
use crate::components::account_badge::AccountBadge;
use crate::components::empty_state::EmptyState;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_wallet_gate;

/// Renders `children` only while a wallet account is connected.
#[component]
pub fn WalletGate(children: Element) -> Element {
    let show_account = use_context::<AppState>().config.show_account;
    let gate = use_wallet_gate();

    match gate.view() {
        GateView::Checking => rsx! {
            div {
                class: "wallet-checking",
                style: "display: flex; align-items: center; justify-content: center; min-height: 80vh;",
                p { "aria-busy": "true", "Checking wallet..." }
            }
        },
        GateView::Disconnected { error } => rsx! {
            EmptyState {
                title: "Connect your MetaMask wallet to continue".to_string(),
                primary_action: rsx! {
                    Button {
                        on_click: move |_| gate.connect(),
                        "Connect MetaMask"
                    }
                    if let Some(error) = error {
                        p {
                            role: "alert",
                            style: "margin-top: 0.5rem; color: var(--pico-del-color);",
                            "{error}"
                        }
                    }
                },
            }
        },
        GateView::Connected { account } => rsx! {
            div {
                class: "wallet-connected",
                nav {
                    class: "wallet-toolbar",
                    ul {}
                    ul {
                        if show_account {
                            if let Some(account) = account {
                                li { AccountBadge { account } }
                            }
                        }
                        li {
                            Button {
                                button_type: ButtonType::Contrast,
                                outline: true,
                                on_click: move |_| gate.logout(),
                                "Log Out"
                            }
                        }
                    }
                }
                {children}
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use dioxus::dioxus_core::NoOpMutations;
    use dioxus::dioxus_core::VirtualDom;
    use futures::FutureExt;
    use wallet::config::GateConfig;
    use wallet::testing::FakeProvider;
    use wallet::EthereumProvider;
    use wallet::ProviderNotification;

    use super::*;

    const ALICE: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    thread_local! {
        static PROVIDER: RefCell<Option<Rc<dyn EthereumProvider>>> = const { RefCell::new(None) };
    }

    #[allow(non_snake_case)]
    fn GatedBoard() -> Element {
        use_context_provider(|| AppState::new(GateConfig::default()));
        use_context_provider(|| {
            PROVIDER
                .with_borrow(|provider| provider.clone())
                .expect("test installs a provider first")
        });
        rsx! {
            WalletGate {
                p { "board" }
            }
        }
    }

    fn mount(fake: &FakeProvider) -> VirtualDom {
        let provider: Rc<dyn EthereumProvider> = Rc::new(fake.clone());
        PROVIDER.with_borrow_mut(|slot| *slot = Some(provider));
        let mut dom = VirtualDom::new(GatedBoard);
        dom.rebuild_in_place();
        dom
    }

    // FakeProvider futures are always ready, so a few passes drain all work.
    fn settle(dom: &mut VirtualDom) {
        for _ in 0..8 {
            if dom.wait_for_work().now_or_never().is_none() {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
    }

    #[test]
    fn gate_follows_provider_events_and_releases_listeners() {
        let fake = FakeProvider::new().with_authorized([ALICE]);
        let mut dom = mount(&fake);
        assert_eq!(fake.listener_count(), 2);

        settle(&mut dom);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Log Out"), "{html}");
        assert!(html.contains("board"), "{html}");

        fake.emit(ProviderNotification::AccountsChanged(vec![]));
        settle(&mut dom);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Connect MetaMask"), "{html}");
        assert!(!html.contains("board"), "{html}");

        drop(dom);
        assert_eq!(fake.listener_count(), 0);
    }

    #[test]
    fn unauthorized_wallet_shows_the_connect_prompt() {
        let fake = FakeProvider::new();
        let mut dom = mount(&fake);

        settle(&mut dom);
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Connect your MetaMask wallet to continue"), "{html}");
        assert!(!html.contains("board"), "{html}");
    }
}
