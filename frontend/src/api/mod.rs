pub mod destinations_api;
