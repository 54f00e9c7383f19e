pub mod api_utils;
pub mod components;
pub mod config;
pub mod data_context;
pub mod export;
pub mod icons;
pub mod list_state;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
