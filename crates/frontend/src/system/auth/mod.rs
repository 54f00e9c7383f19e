pub mod api;
pub mod client;
pub mod context;
pub mod guard;
pub mod storage;
