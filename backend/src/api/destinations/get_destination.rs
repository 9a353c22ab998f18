//! Single-record fetch for the detail page.

use common::destination::Destination;

use crate::api::destinations::destination_row::DestinationRow;
use crate::db_utils::records_service::fetch_table_rows;


pub async fn get_destination(destination_id: String) -> anyhow::Result<Destination> {
    let query = format!("select=*&id=eq.{}", destination_id);
    let rows: Vec<DestinationRow> = fetch_table_rows("destinations", &query).await?;
    let row = rows
        .into_iter()
        .next()
        .ok_or_else(|| anyhow::anyhow!("destination not found: {}", destination_id))?;
    Ok(Destination::from(row))
}
