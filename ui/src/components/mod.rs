//! Shared components for the app. Components are the building blocks of dioxus apps.
pub mod account_badge;
pub mod bingo_card;
pub mod empty_state;
pub mod pico;
pub mod wallet_gate;
