//=============================================================================
// File: src/components/account_badge.rs
//=============================================================================
use dioxus::prelude::*;
use wallet::Account;

#[derive(Props, PartialEq, Clone)]
pub struct AccountBadgeProps {
    pub account: Account,
}

/// The abbreviated connected address. Hover shows the full one.
#[component]
pub fn AccountBadge(props: AccountBadgeProps) -> Element {
    let full = props.account.to_string();
    let abbreviated = props.account.abbreviated();

    rsx! {
        code {
            class: "account-badge",
            title: "{full}",
            "{abbreviated}"
        }
    }
}
