//! UIコンポーネント

pub mod header;
pub mod product_card;
pub mod product_form;
