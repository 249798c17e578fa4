pub mod cors;

pub use cors::access_control;
