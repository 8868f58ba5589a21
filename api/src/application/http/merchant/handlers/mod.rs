pub mod fetch_merchants;
pub mod filter_merchants;
pub mod get_merchant;
pub mod list_areas;
pub mod list_categories;
pub mod search_merchants;
