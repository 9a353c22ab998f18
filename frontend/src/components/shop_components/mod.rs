pub mod destination_card;
pub mod filter_sidebar;
pub mod shop_toolbar;
