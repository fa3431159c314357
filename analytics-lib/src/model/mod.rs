//! Data model types

mod name;
mod row;
mod value;

pub use name::SERVICE_PREFIX;
pub use name::to_service;
pub use name::to_symbolic;
pub use row::Row;
pub use value::Value;
