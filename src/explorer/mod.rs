pub mod components;
pub mod consts;
pub mod pages;

use crate::explorer::consts::DEFAULT_ITEMS_TO_SHOW;
use crate::schemas::Network;

/// Knobs shared by every component on a rendered page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub network: Network,
    pub items_to_show: usize,
    /// Start every expandable list in its expanded state.
    pub expand_all: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            network: Network::default(),
            items_to_show: DEFAULT_ITEMS_TO_SHOW,
            expand_all: false,
        }
    }
}
