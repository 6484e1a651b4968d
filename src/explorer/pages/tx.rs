use maud::{Markup, html};

use crate::explorer::RenderOptions;
use crate::explorer::components::balance_changes::balance_changes;
use crate::explorer::components::layout::layout;
use crate::explorer::components::object_changes::object_changes;
use crate::schemas::TransactionSummary;

fn has_changes(summary: &TransactionSummary) -> bool {
    let balances = summary.balance_changes.as_ref().is_some_and(|b| !b.is_empty());
    let objects = summary.object_summary.as_ref().is_some_and(|o| {
        [&o.created, &o.mutated, &o.transferred].into_iter().flatten().any(|l| !l.is_empty())
    });
    balances || objects
}

/// Balance and object change cards for one transaction.
pub fn render_summary(summary: &TransactionSummary, opts: &RenderOptions) -> Markup {
    html! {
        div class="tx-summary" {
            @if has_changes(summary) {
                (balance_changes(summary.balance_changes.as_deref(), opts.network))
                (object_changes(summary.object_summary.as_ref(), opts))
            } @else {
                p class="muted" { "No balance or object changes." }
            }
        }
    }
}

/// Full HTML document for a transaction summary.
pub fn tx_page(summary: &TransactionSummary, opts: &RenderOptions) -> String {
    let title = match summary.digest.as_deref() {
        Some(d) => format!("Tx {d}"),
        None => "Transaction".to_string(),
    };

    layout(
        &title,
        opts.network,
        html! {
            div class="row" {
                h1 class="h1" { "Transaction" }
                @if let Some(digest) = &summary.digest {
                    span class="mono tx-page-id" { (digest) }
                }
            }
            (render_summary(summary, opts))
        },
    )
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_says_so() {
        let out = tx_page(&TransactionSummary::default(), &RenderOptions::default());
        assert!(out.starts_with("<!DOCTYPE html>"));
        assert!(out.contains("No balance or object changes."));
        assert!(out.contains("<title>Transaction | Sui Explorer</title>"));
    }

    #[test]
    fn full_summary_renders_both_blocks() {
        let summary: TransactionSummary = serde_json::from_str(
            r#"{
                "digest": "9XyZ",
                "balanceChanges": [
                    { "owner": "0xa", "coinType": "0x2::sui::SUI", "amount": "-1000" }
                ],
                "objectSummary": {
                    "mutated": [
                        { "objectId": "0x5", "objectType": "0x2::coin::Coin<0x2::sui::SUI>", "owner": { "AddressOwner": "0xa" } }
                    ]
                }
            }"#,
        )
        .expect("decode");
        let out = tx_page(&summary, &RenderOptions::default());
        assert!(out.contains("Balance Changes"));
        assert!(out.contains("Updated"));
        assert!(out.contains("9XyZ"));
        assert!(!out.contains("No balance or object changes."));
    }
}
