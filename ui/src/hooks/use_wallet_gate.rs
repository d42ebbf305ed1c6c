//=============================================================================
// File: src/hooks/use_wallet_gate.rs
//=============================================================================
use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use futures::channel::mpsc::UnboundedSender;
use futures::StreamExt;
use wallet::gate;
use wallet::provider::subscribe;
use wallet::provider::ProviderSubscriptions;
use wallet::EthereumProvider;
use wallet::GateAction;
use wallet::GateView;
use wallet::ProviderNotification;
use wallet::SessionEvent;
use wallet::WalletSession;

use crate::compat;

type SubscriptionSlot = Rc<RefCell<Option<ProviderSubscriptions>>>;

/// Work queued for the gate's coroutine.
#[derive(Clone, Debug, PartialEq)]
pub enum GateCommand {
    /// Initial or repeated non-interactive check.
    Check,
    Connect,
    Logout,
    Notify(ProviderNotification),
}

#[derive(Clone, Copy)]
pub struct WalletGateHandle {
    session: Signal<WalletSession>,
    commands: Coroutine<GateCommand>,
}

impl WalletGateHandle {
    /// Subscribes the caller to session changes.
    pub fn view(&self) -> GateView {
        self.session.read().view()
    }

    pub fn connect(&self) {
        self.commands.send(GateCommand::Connect);
    }

    pub fn logout(&self) {
        self.commands.send(GateCommand::Logout);
    }
}

/// Owns a wallet session for the calling component.
///
/// Runs the initial check, listens for account and chain changes while the
/// component is mounted, and releases both listeners when it unmounts.
///
/// A provider placed in context as `Rc<dyn EthereumProvider>` takes
/// precedence over the platform lookup in [`compat::injected_provider`].
pub fn use_wallet_gate() -> WalletGateHandle {
    let from_context = try_use_context::<Rc<dyn EthereumProvider>>();
    let provider = use_hook(move || from_context.or_else(compat::injected_provider));
    let mut session = use_signal(WalletSession::new);

    let commands = use_coroutine({
        let provider = provider.clone();
        move |mut rx: UnboundedReceiver<GateCommand>| {
            let provider = provider.clone();
            async move {
                while let Some(command) = rx.next().await {
                    match command {
                        GateCommand::Check => spawn_check(provider.clone(), session),
                        GateCommand::Connect => {
                            session.write().apply(SessionEvent::ConnectStarted);
                            let provider = provider.clone();
                            spawn(async move {
                                let event = gate::connect(provider.as_deref()).await;
                                session.write().apply(event);
                            });
                        }
                        GateCommand::Logout => session.write().apply(gate::logout()),
                        GateCommand::Notify(notification) => {
                            match gate::on_notification(notification) {
                                GateAction::Apply(event) => session.write().apply(event),
                                GateAction::Recheck => spawn_check(provider.clone(), session),
                            }
                        }
                    }
                }
            }
        }
    });

    // Listeners live in this hook slot: dropped with the scope, or earlier by
    // `use_drop`, whichever comes first.
    let subscriptions = use_hook(|| {
        commands.send(GateCommand::Check);
        let subscriptions = provider
            .as_ref()
            .map(|provider| subscribe(provider, forward_to(commands.tx())));
        Rc::new(RefCell::new(subscriptions)) as SubscriptionSlot
    });

    use_drop(move || {
        if let Some(subs) = subscriptions.borrow_mut().take() {
            debug!("wallet gate unmounted, releasing {} listener(s)", subs.len());
        }
    });

    WalletGateHandle { session, commands }
}

// The provider calls back from outside the Dioxus runtime, so notifications
// go through the coroutine instead of writing the signal directly.
fn forward_to(tx: UnboundedSender<GateCommand>) -> impl Fn(ProviderNotification) + 'static {
    move |notification| {
        if let Err(e) = tx.unbounded_send(GateCommand::Notify(notification)) {
            debug!("wallet gate is gone, dropping {:?}", e.into_inner());
        }
    }
}

fn spawn_check(provider: Option<Rc<dyn EthereumProvider>>, mut session: Signal<WalletSession>) {
    spawn(async move {
        let event = gate::initialize(provider.as_deref()).await;
        session.write().apply(event);
    });
}
