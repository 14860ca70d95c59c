pub mod app;
pub mod header;
pub mod search_bar;
pub mod favorite_button;
pub mod scroll_to_top;
pub mod pages;

pub use app::App;
pub use header::Header;
pub use search_bar::SearchBar;
pub use favorite_button::FavoriteButton;
pub use scroll_to_top::ScrollToTop;
