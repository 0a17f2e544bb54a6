// Domain module: facility location records, the binary program and the backend contract

pub mod geometry;
pub mod mip_model;
pub mod models;
pub mod solver_service;
pub mod value_objects;

pub use geometry::*;
pub use mip_model::*;
pub use models::*;
pub use solver_service::*;
pub use value_objects::*;
