use maud::{Markup, html};

use crate::explorer::pages::common::short_id;
use crate::schemas::Network;

/// Internal href that keeps the selected network across navigation.
/// The default network is implied and left off.
pub fn link_with_query(path: &str, network: Network) -> String {
    if network == Network::default() {
        return path.to_string();
    }
    let sep = if path.contains('?') { '&' } else { '?' };
    format!("{path}{sep}network={}", network.as_str())
}

pub fn address_link(address: &str, network: Network) -> Markup {
    html! {
        a class="link mono" href=(link_with_query(&format!("/address/{address}"), network)) title=(address) {
            (short_id(address))
        }
    }
}

/// Link to an object page. `target` may carry its own query (`0x2?module=coin`).
pub fn object_link(target: &str, label: Option<&str>, network: Network) -> Markup {
    let text = match label {
        Some(l) => l.to_string(),
        None => short_id(target),
    };
    html! {
        a class="link mono" href=(link_with_query(&format!("/object/{target}"), network)) title=(target) {
            (text)
        }
    }
}
