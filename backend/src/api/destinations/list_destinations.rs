//! Wholesale fetch of the destination catalog.

use common::destination::Destination;

use crate::api::destinations::destination_row::DestinationRow;
use crate::db_utils::records_service::fetch_table_rows;


/// Fetch every destination record, newest first. Filtering and sorting both
/// happen on the client against this one batch.
pub async fn list_destinations() -> anyhow::Result<Vec<Destination>> {
    let rows: Vec<DestinationRow> =
        fetch_table_rows("destinations", "select=*&order=created_at.desc").await?;
    Ok(rows.into_iter().map(Destination::from).collect())
}
