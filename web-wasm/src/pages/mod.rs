//! 画面（一覧・詳細・編集・新規作成）

pub mod products_list;
pub mod product_detail;
pub mod product_edit;
pub mod product_new;
