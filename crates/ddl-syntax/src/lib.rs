//! Extracts the key structure of a MySQL/MariaDB `CREATE TABLE` statement
//! and generates the `ALTER TABLE` statements that drop secondary indexes and
//! foreign keys before a bulk load and restore them afterwards.
//!
//! ```
//! use ddl_syntax::{TableDefinition, extract_first_create_table};
//!
//! let script = "-- dump\nCREATE TABLE `t` (`a` int, KEY `k` (`a`)) ENGINE=InnoDB;";
//! let table = TableDefinition::new(extract_first_create_table(script));
//!
//! assert_eq!(table.drop_secondary_indexes_sql(), "ALTER TABLE `t` DROP INDEX `k`");
//! ```

pub mod clause;
pub mod engine;
pub mod error;
pub mod lexer;
pub mod locator;
mod parser;
pub mod plan;
pub mod sqlgen;
pub mod table;

pub use engine::EngineSet;
pub use error::DdlError;
pub use locator::{CreateTableStatement, extract_first_create_table, locate_create_table};
pub use plan::{LoadPlan, PlanOptions};
pub use table::{ConstraintEntry, IndexEntry, IndexKind, TableDefinition};
