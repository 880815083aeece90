mod dialect;
mod discover;
mod entity;
mod feature;
mod sql_type;
mod table_def;
mod tables;
mod type_map;

pub use ::anyhow::Context;
pub use dialect::*;
pub use discover::*;
pub use entity::*;
pub use feature::*;
pub use sql_type::*;
pub use table_def::*;
pub use tables::*;
pub use type_map::*;

pub type Result<T> = anyhow::Result<T>;
pub type Error = anyhow::Error;
