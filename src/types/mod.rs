pub mod analysis;
pub mod data_point;
pub mod date_range;
pub mod location;
pub mod weather_variable;
