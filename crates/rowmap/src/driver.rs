pub use rowmap_core::driver::{
    operation::{self, Execute, Query, Transaction},
    Connection, Driver, Operation, Response, Rows,
};

#[cfg(feature = "mysql")]
pub use rowmap_driver_mysql::MySQL;
