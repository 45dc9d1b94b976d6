pub mod coerce;
pub mod document;
pub mod summary;
pub mod view;
