pub mod app_store;

pub use app_store::{AppStore, StoreAction};
