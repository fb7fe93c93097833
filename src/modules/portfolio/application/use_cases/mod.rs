pub mod add_item;
pub mod create_portfolio;
pub mod delete_item;
pub mod delete_portfolio;
pub mod exists_portfolio;
pub mod get_portfolio;
pub mod reorder_items;
pub mod update_basic_info;
pub mod update_item;
