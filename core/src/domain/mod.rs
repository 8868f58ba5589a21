pub mod common;
pub mod merchant;
