//! Backend library: server-side access to the hosted records service.

pub mod api;
pub mod db_utils;
