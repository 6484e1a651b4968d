pub mod config;
pub mod consts;
pub mod explorer;
pub mod schemas;
pub mod summary;
