use dioxus::prelude::*;

use common::catalog_filter::CatalogFilter;

use crate::components::navbar::Navbar;
use crate::data_definitions::url_param::UrlParam;
use crate::pages::about_page::AboutPage;
use crate::pages::destination_detail_page::DestinationDetailPage;
use crate::pages::faq_page::FaqPage;
use crate::pages::home_page::HomePage;
use crate::pages::privacy_policy_page::PrivacyPolicyPage;
use crate::pages::shop_page::ShopPage;
use crate::pages::terms_of_service_page::TermsOfServicePage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/shop/:filter")]
    ShopPage {
        filter: UrlParam<CatalogFilter>,
    },


    #[route("/destination/:destination_id")]
    DestinationDetailPage { destination_id: String },


    #[route("/about")]
    AboutPage {},

    #[route("/faq")]
    FaqPage {},

    #[route("/terms-of-service")]
    TermsOfServicePage {},

    #[route("/privacy-policy")]
    PrivacyPolicyPage {},

}

impl Route {
    pub fn shop_page_from_filter(filter: CatalogFilter) -> Self {
        Self::ShopPage {
            filter: UrlParam::from(filter),
        }
    }

    pub fn shop_page_default() -> Self {
        Self::shop_page_from_filter(CatalogFilter::default())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_page_paths_round_trip() {
        for route in [
            Route::AboutPage {},
            Route::FaqPage {},
            Route::TermsOfServicePage {},
            Route::PrivacyPolicyPage {},
        ] {
            let path = route.to_string();
            assert_eq!(path.parse::<Route>().unwrap(), route);
        }
        assert_eq!("/about".parse::<Route>().unwrap(), Route::AboutPage {});
        assert_eq!("/faq".parse::<Route>().unwrap(), Route::FaqPage {});
    }
}
