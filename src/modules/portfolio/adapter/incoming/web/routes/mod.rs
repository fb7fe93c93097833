mod add_item;
mod create_portfolio;
mod delete_item;
mod delete_portfolio;
mod exists_portfolio;
mod get_basic_info;
mod get_my_portfolio;
mod item_form;
mod reorder_items;
mod update_basic_info;
mod update_item;

pub use add_item::add_item_handler;
pub use create_portfolio::create_portfolio_handler;
pub use delete_item::delete_item_handler;
pub use delete_portfolio::delete_portfolio_handler;
pub use exists_portfolio::exists_portfolio_handler;
pub use get_basic_info::get_basic_info_handler;
pub use get_my_portfolio::get_my_portfolio_handler;
pub use reorder_items::reorder_items_handler;
pub use update_basic_info::update_basic_info_handler;
pub use update_item::update_item_handler;
