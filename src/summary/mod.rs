pub mod expandable;
pub mod grouping;
