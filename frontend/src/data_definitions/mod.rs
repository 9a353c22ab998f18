pub mod local_favorites;
pub mod url_param;
