//=============================================================================
// File: src/components/bingo_card.rs
//=============================================================================
use dioxus::prelude::*;

use crate::bingo;
use crate::bingo::Square;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;

#[component]
pub fn BingoCard() -> Element {
    let mut card = use_signal(bingo::Card::random);
    let winning = use_memo(move || card.read().winning_lines());

    rsx! {
        Card {
            header {
                style: "display: flex; justify-content: space-between; align-items: center;",
                h3 { style: "margin: 0;", "Bingo" }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| card.set(bingo::Card::random()),
                    "New Card"
                }
            }

            if !winning.read().is_empty() {
                p { class: "bingo-banner", role: "status", "BINGO!" }
            }

            table {
                class: "bingo-grid",
                thead {
                    tr {
                        for letter in bingo::COLUMN_LETTERS {
                            th { scope: "col", "{letter}" }
                        }
                    }
                }
                tbody {
                    for row in 0..bingo::SIZE {
                        tr {
                            for col in 0..bingo::SIZE {
                                td {
                                    class: {
                                        let mut class = String::from("bingo-square");
                                        if card.read().is_marked(row, col) {
                                            class.push_str(" marked");
                                        }
                                        if winning.read().iter().any(|line| line.contains(row, col)) {
                                            class.push_str(" winning");
                                        }
                                        class
                                    },
                                    onclick: move |_| {
                                        card.write().toggle(row, col);
                                    },
                                    match card.read().square(row, col) {
                                        Square::Number(n) => rsx! { "{n}" },
                                        Square::Free => rsx! { "FREE" },
                                    }
                                }
                            }
                        }
                    }
                }
            }

            footer {
                Button {
                    button_type: ButtonType::Contrast,
                    outline: true,
                    on_click: move |_| card.write().reset(),
                    "Clear Marks"
                }
            }
        }
    }
}
