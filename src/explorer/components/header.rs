use maud::{Markup, html};

use crate::explorer::components::links::link_with_query;
use crate::explorer::components::svg_assets::logo_wordmark;
use crate::schemas::Network;

fn search(network: Network) -> Markup {
    html! {
        form class="search-form" action="/search" method="get" role="search" {
            input class="search-input" type="search" name="q" placeholder="Search Addresses / Objects / Transactions" aria-label="Search";
            @if network != Network::default() {
                input type="hidden" name="network" value=(network.as_str());
            }
        }
    }
}

fn network_select(current: Network) -> Markup {
    html! {
        select class="network-select" name="network" aria-label="Network" {
            @for n in Network::ALL {
                option value=(n.as_str()) selected[n == current] { (n.label()) }
            }
        }
    }
}

pub fn header(network: Network) -> Markup {
    html! {
        header class="site-header" {
            div class="app header-row" {
                div class="header-logo" {
                    a data-testid="nav-logo-button" href=(link_with_query("/", network)) { (logo_wordmark()) }
                }
                div class="header-search" { (search(network)) }
                div class="header-network" { (network_select(network)) }
            }
        }
    }
}
