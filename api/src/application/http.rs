pub mod index;
pub mod merchant;
pub mod query_extractor;
pub mod server;
