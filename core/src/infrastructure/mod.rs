pub mod db;
pub mod merchant;
