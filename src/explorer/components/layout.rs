use maud::{DOCTYPE, Markup, html};

use crate::explorer::components::header::header;
use crate::schemas::Network;

pub fn layout(title: &str, network: Network, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Sui Explorer" }
                link rel="stylesheet" href="/static/style.css";
            }
            body {
                (header(network))
                main class="app" { (content) }
            }
        }
    }
}
