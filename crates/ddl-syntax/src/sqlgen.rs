//! `ALTER TABLE` generation for dropping and restoring keys around a load.

use crate::table::TableDefinition;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlterAction<'a> {
    DropConstraint(&'a str),
    DropIndex(&'a str),
    /// Re-adds a clause from its verbatim definition.
    Add(&'a str),
}

impl fmt::Display for AlterAction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlterAction::DropConstraint(name) => write!(f, "DROP CONSTRAINT {name}"),
            AlterAction::DropIndex(name) => write!(f, "DROP INDEX {name}"),
            AlterAction::Add(definition) => write!(f, "ADD {definition}"),
        }
    }
}

/// A single `ALTER TABLE` with comma-separated actions in the given order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlterTable<'a> {
    pub table: &'a str,
    pub actions: Vec<AlterAction<'a>>,
}

impl<'a> AlterTable<'a> {
    pub fn new(table: &'a str, actions: impl IntoIterator<Item = AlterAction<'a>>) -> Self {
        Self {
            table,
            actions: actions.into_iter().collect(),
        }
    }

    /// Renders the statement, or an empty string when there is nothing to do.
    pub fn render(&self) -> String {
        if self.actions.is_empty() {
            return String::new();
        }
        self.to_string()
    }
}

impl fmt::Display for AlterTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ALTER TABLE {}", self.table)?;
        for (i, action) in self.actions.iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{action}")?;
        }
        Ok(())
    }
}

impl TableDefinition {
    pub fn drop_constraints_sql(&self) -> String {
        self.alter(
            self.constraints
                .iter()
                .map(|c| AlterAction::DropConstraint(&c.name)),
        )
    }

    pub fn add_constraints_sql(&self) -> String {
        self.alter(self.constraints.iter().map(|c| AlterAction::Add(&c.definition)))
    }

    /// Skips the implicit clustering key of a primary-key-less table.
    pub fn drop_secondary_indexes_sql(&self) -> String {
        self.alter(self.droppable_indexes().map(|i| AlterAction::DropIndex(&i.name)))
    }

    /// Skips the implicit clustering key of a primary-key-less table.
    pub fn add_secondary_indexes_sql(&self) -> String {
        self.alter(self.droppable_indexes().map(|i| AlterAction::Add(&i.definition)))
    }

    fn alter<'a>(&'a self, actions: impl IntoIterator<Item = AlterAction<'a>>) -> String {
        AlterTable::new(&self.table_name, actions).render()
    }
}
