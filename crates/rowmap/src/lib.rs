pub mod db;
pub use db::Db;

pub mod driver;

mod model;
pub use model::Model;

mod record;
pub use record::Record;

pub mod schema;

pub mod stmt;
pub use stmt::{Find, FindAll, FindNumber};

pub use rowmap_core::{Config, Error, Result};
