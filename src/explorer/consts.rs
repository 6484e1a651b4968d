/// Visible rows in an object list before "Show All".
pub const DEFAULT_ITEMS_TO_SHOW: usize = 5;

pub const OBJECTS_ITEMS_LABEL: &str = "Objects";

/// Native coin decimals; every balance change is formatted with these.
pub const COIN_DECIMALS: u32 = 9;

pub const SUI_SYMBOL: &str = "SUI";

/// Max height class for list bodies that scroll once they overflow.
pub const CONTENT_WRAPPER_CLASS: &str = "expandable-scroll";

pub const ID_PREFIX_LEN: usize = 6;
pub const ID_SUFFIX_LEN: usize = 4;
