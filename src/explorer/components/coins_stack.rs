use maud::{Markup, html};

use crate::explorer::components::svg_assets::{icon_sui, icon_unstaked};
use crate::explorer::consts::SUI_SYMBOL;

pub fn coin_icon(symbol: &str) -> Markup {
    let native = symbol == SUI_SYMBOL;
    let class = if native { "coin-icon coin-icon-sui" } else { "coin-icon coin-icon-generic" };
    html! {
        span class=(class) title=(symbol) {
            @if native { (icon_sui()) } @else { (icon_unstaked()) }
        }
    }
}

/// Overlapping row of coin icons, one per symbol in the order given.
pub fn coins_stack(symbols: &[&str]) -> Markup {
    html! {
        div class="coins-stack" {
            @for symbol in symbols {
                div class="coins-stack-item" { (coin_icon(symbol)) }
            }
        }
    }
}
