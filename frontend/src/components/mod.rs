pub mod error_boundary;
pub mod favorites_provider;
pub mod footer;
pub mod home_components;
pub mod loading_indicator;
pub mod navbar;
pub mod shop_components;
