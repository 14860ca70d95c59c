pub mod product;
pub mod favorites;

pub use product::ProductId;
pub use favorites::Favorites;
