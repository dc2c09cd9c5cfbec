//! Integration tests for statement location, table parsing and SQL
//! generation against mysqldump-style scripts.

mod fixtures;
mod plan;
mod sqlgen;
