use maud::{Markup, html};

pub fn logo_wordmark() -> Markup {
    html! {
        svg class="logo-wordmark" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 96 24" aria-label="Sui Explorer" role="img" {
            path d="M9.7 3.2c2.6 3.3 4.3 5.9 4.3 8.7a6 6 0 0 1-12 0c0-2.8 1.7-5.4 4.3-8.7L8 1.2l1.7 2Z" fill="currentColor" {}
            text x="20" y="17" font-size="14" font-weight="600" fill="currentColor" { "Explorer" }
        }
    }
}

pub fn icon_chevron_right(class: &str) -> Markup {
    html! {
        svg class=(class) xmlns="http://www.w3.org/2000/svg" viewBox="0 0 12 12" aria-hidden="true" {
            path d="M4.5 2.5 8 6l-3.5 3.5" stroke="currentColor" stroke-width="1.5" fill="none" stroke-linecap="round" stroke-linejoin="round" {}
        }
    }
}

pub fn icon_sui() -> Markup {
    html! {
        svg class="coin-glyph" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" aria-hidden="true" {
            path d="M5 .8c1.5 1.9 2.5 3.4 2.5 5a2.5 2.5 0 0 1-5 0c0-1.6 1-3.1 2.5-5Z" fill="currentColor" {}
        }
    }
}

pub fn icon_unstaked() -> Markup {
    html! {
        svg class="coin-glyph" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10" aria-hidden="true" {
            circle cx="5" cy="5" r="3.5" stroke="currentColor" stroke-width="1.2" fill="none" {}
        }
    }
}
