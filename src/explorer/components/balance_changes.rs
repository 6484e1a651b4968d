use maud::{Markup, html};

use crate::explorer::components::coins_stack::coins_stack;
use crate::explorer::components::links::address_link;
use crate::explorer::components::transaction_card::{card_section, transaction_card};
use crate::explorer::consts::COIN_DECIMALS;
use crate::explorer::pages::common::{coin_symbol, fmt_balance, parse_amount};
use crate::schemas::{BalanceChange, Network};

/// Distinct coin symbols, first-seen order.
pub fn distinct_symbols(changes: &[BalanceChange]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for c in changes {
        let sym = coin_symbol(&c.coin_type);
        if !out.contains(&sym) {
            out.push(sym);
        }
    }
    out
}

fn balance_change_entry(change: &BalanceChange) -> Markup {
    let positive = parse_amount(&change.amount).is_some_and(|a| a > 0);
    let color = if positive { "success-dark" } else { "issue-dark" };

    html! {
        div class="balance-change" {
            div class="balance-change-row" {
                span class="pbody medium steel-dark" { "Amount" }
                span class=(format!("pbody medium {color}")) {
                    @if positive { "+" }
                    (fmt_balance(&change.amount, COIN_DECIMALS)) " " (coin_symbol(&change.coin_type))
                }
            }
            @if let Some(recipient) = &change.recipient {
                div class="balance-change-row" {
                    span class="pbody medium steel-dark" { "Recipient" }
                    span class="mono" { (recipient) }
                }
            }
        }
    }
}

pub fn balance_changes(changes: Option<&[BalanceChange]>, network: Network) -> Markup {
    let Some(changes) = changes.filter(|c| !c.is_empty()) else {
        return html! {};
    };
    let owner = changes.first().map(|c| c.owner.as_str()).unwrap_or_default();
    let symbols = distinct_symbols(changes);

    let title = html! {
        div class="card-title-row" {
            h6 class="heading6 semibold steel-darker" { "Balance Changes" }
            (coins_stack(&symbols))
        }
    };
    let footer = (!owner.is_empty()).then(|| {
        html! {
            div class="card-footer-row" {
                span class="pbody medium steel-dark" { "Owner" }
                span class="pbody medium hero-dark" { (address_link(owner, network)) }
            }
        }
    });
    let body = html! {
        @for change in changes {
            (card_section(None, balance_change_entry(change)))
        }
    };

    transaction_card(title, footer, body)
}
