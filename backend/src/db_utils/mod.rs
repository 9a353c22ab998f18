pub mod records_service;
