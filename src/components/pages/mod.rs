pub mod home;
pub mod product;
pub mod cart;
pub mod category;
pub mod favorites;
pub mod not_found;

pub use home::HomePage;
pub use product::ProductPage;
pub use cart::CartPage;
pub use category::CategoryPage;
pub use favorites::FavoritesPage;
pub use not_found::NotFoundPage;
