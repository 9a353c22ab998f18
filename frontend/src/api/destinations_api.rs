//! Client API calls for the destination catalog.

use common::destination::Destination;
use dioxus::prelude::*;




#[server]
pub async fn list_destinations() -> Result<Vec<Destination>, ServerFnError> {
    let x = backend::api::destinations::list_destinations().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn get_destination(destination_id: String) -> Result<Destination, ServerFnError> {
    let x = backend::api::destinations::get_destination(destination_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
