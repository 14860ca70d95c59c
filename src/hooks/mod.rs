pub mod use_store;
pub mod store_context;

pub use use_store::{use_store, use_store_state, UseStoreHandle};
pub use store_context::StoreProvider;
