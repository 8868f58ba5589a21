pub mod handlers;
pub mod responses;
pub mod router;
pub mod validators;
