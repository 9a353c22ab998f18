mod destination_row;
mod get_destination;
mod list_destinations;

pub use get_destination::get_destination;
pub use list_destinations::list_destinations;
