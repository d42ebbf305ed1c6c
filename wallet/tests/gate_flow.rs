//! End-to-end gate flows against the fake provider, the way the `ui`
//! component drives them: run an operation, apply the event, read the view.

use std::cell::RefCell;
use std::rc::Rc;

use futures::executor::block_on;
use wallet::gate;
use wallet::provider::subscribe;
use wallet::testing::FakeProvider;
use wallet::Account;
use wallet::EthereumProvider;
use wallet::GateAction;
use wallet::GateView;
use wallet::ProviderError;
use wallet::ProviderNotification;
use wallet::RpcMethod;
use wallet::WalletSession;

const ALICE: &str = "0x52908400098527886e0f7030069857d2e4169ee7";
const BOB: &str = "0x8617e340b3d01fa5f11f306f4090fd50e238070d";

fn mounted(fake: &FakeProvider) -> WalletSession {
    let mut session = WalletSession::new();
    session.apply(block_on(gate::initialize(Some(fake))));
    session
}

#[test]
fn no_provider_never_shows_children() {
    let mut session = WalletSession::new();
    session.apply(block_on(gate::initialize(None)));
    assert_eq!(
        session.view(),
        GateView::Disconnected {
            error: Some("MetaMask is not installed.".into())
        }
    );

    // Pressing connect anyway keeps the same message.
    session.apply(wallet::SessionEvent::ConnectStarted);
    session.apply(block_on(gate::connect(None)));
    assert!(session.view().is_disconnected());
    assert_eq!(session.error.as_deref(), Some("MetaMask is not installed."));
}

#[test]
fn authorized_account_skips_connect_button() {
    let fake = FakeProvider::new().with_authorized([ALICE]);
    let session = mounted(&fake);
    assert_eq!(
        session.view(),
        GateView::Connected {
            account: Some(Account::new(ALICE))
        }
    );
    assert_eq!(fake.calls(), vec![RpcMethod::EthAccounts]);
}

#[test]
fn connect_moves_from_button_to_children() {
    let fake = FakeProvider::new().granting([ALICE]);
    let mut session = mounted(&fake);
    assert_eq!(session.view(), GateView::Disconnected { error: None });

    session.apply(wallet::SessionEvent::ConnectStarted);
    session.apply(block_on(gate::connect(Some(&fake))));
    assert!(session.view().is_connected());
    assert_eq!(session.account, Some(Account::new(ALICE)));
    assert_eq!(
        fake.calls(),
        vec![RpcMethod::EthAccounts, RpcMethod::EthRequestAccounts]
    );
}

#[test]
fn rejected_connect_stays_disconnected() {
    let fake = FakeProvider::new().granting([ALICE]);
    let mut session = mounted(&fake);

    fake.fail_next(RpcMethod::EthRequestAccounts, ProviderError::user_rejected());
    session.apply(wallet::SessionEvent::ConnectStarted);
    session.apply(block_on(gate::connect(Some(&fake))));
    assert_eq!(
        session.view(),
        GateView::Disconnected {
            error: Some("User rejected connection.".into())
        }
    );

    // A retry is allowed and succeeds.
    session.apply(wallet::SessionEvent::ConnectStarted);
    session.apply(block_on(gate::connect(Some(&fake))));
    assert!(session.view().is_connected());
    assert_eq!(session.error, None);
}

#[test]
fn logout_is_local_only() {
    let fake = FakeProvider::new().with_authorized([ALICE]);
    let mut session = mounted(&fake);
    let calls_before = fake.calls().len();

    session.apply(gate::logout());
    assert_eq!(session.view(), GateView::Disconnected { error: None });
    assert_eq!(fake.calls().len(), calls_before);
}

#[test]
fn notifications_drive_the_session() {
    let fake = FakeProvider::new().with_authorized([ALICE]);
    let provider: Rc<dyn EthereumProvider> = Rc::new(fake.clone());
    let session = Rc::new(RefCell::new(WalletSession::new()));
    session
        .borrow_mut()
        .apply(block_on(gate::initialize(Some(provider.as_ref()))));

    let subscriptions = {
        let session = session.clone();
        let recheck = provider.clone();
        subscribe(&provider, move |n| match gate::on_notification(n) {
            GateAction::Apply(event) => session.borrow_mut().apply(event),
            GateAction::Recheck => {
                let event = block_on(gate::check_connection(recheck.as_ref()));
                session.borrow_mut().apply(event);
            }
        })
    };

    fake.emit(ProviderNotification::AccountsChanged(vec![BOB.into()]));
    assert_eq!(session.borrow().account, Some(Account::new(BOB)));

    fake.emit(ProviderNotification::AccountsChanged(vec![]));
    assert!(session.borrow().view().is_disconnected());

    // The wallet still reports ALICE as authorized, so a chain switch reconnects.
    fake.emit(ProviderNotification::ChainChanged("0x2105".into()));
    assert_eq!(session.borrow().account, Some(Account::new(ALICE)));
    assert_eq!(
        fake.calls(),
        vec![RpcMethod::EthAccounts, RpcMethod::EthAccounts]
    );

    drop(subscriptions);
    assert_eq!(fake.listener_count(), 0);
}
