//! MySQL connection pool, schema management and error mapping

mod error;
mod in_memory;
mod pool;
mod schema;

pub use error::map_write_error;
pub use in_memory::InMemoryDatabase;
pub use pool::{connect_pool, MySqlDatabase};
pub use schema::MySqlSchemaManager;
