mod find;
pub use find::Find;

mod find_all;
pub use find_all::FindAll;

mod find_number;
pub use find_number::FindNumber;

mod limit;
pub use limit::IntoLimit;

pub use rowmap_core::stmt::{Row, Value};
pub use rowmap_sql::stmt::Limit;
