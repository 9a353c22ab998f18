pub mod about_page;
pub mod destination_detail_page;
pub mod faq_page;
pub mod home_page;
pub mod privacy_policy_page;
pub mod shop_page;
pub mod terms_of_service_page;
