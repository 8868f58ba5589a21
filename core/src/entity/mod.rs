//! sea-orm entities for the tables read by the merchant service.

pub mod area;
pub mod mb_merchant;
pub mod mb_merchant_category;
pub mod mb_merchant_image;
