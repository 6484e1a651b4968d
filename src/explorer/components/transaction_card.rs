use maud::{Markup, html};

/// Card frame used by every summary block on the transaction page.
pub fn transaction_card(title: Markup, footer: Option<Markup>, body: Markup) -> Markup {
    html! {
        div class="card tx-summary-card shadow sm" {
            div class="tx-summary-card-title" { (title) }
            div class="tx-summary-card-body" { (body) }
            @if let Some(f) = footer {
                div class="tx-summary-card-footer" { (f) }
            }
        }
    }
}

pub fn card_section(title: Option<Markup>, body: Markup) -> Markup {
    html! {
        section class="tx-summary-section" {
            @if let Some(t) = title {
                div class="tx-summary-section-title" { (t) }
            }
            (body)
        }
    }
}
