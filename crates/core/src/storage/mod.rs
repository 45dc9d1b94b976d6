pub mod gateway;
pub mod manager;
