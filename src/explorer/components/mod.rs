pub mod balance_changes;
pub mod coins_stack;
pub mod expandable_list;
pub mod header;
pub mod layout;
pub mod links;
pub mod object_changes;
pub mod svg_assets;
pub mod transaction_card;
