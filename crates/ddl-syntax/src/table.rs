//! Structured model of a single `CREATE TABLE` statement.
//!
//! Construction is best-effort: a statement missing some clause types simply
//! yields empty collections, and malformed input (unbalanced parentheses or
//! quotes) yields whatever could be read. Only the strict entry point reports
//! unbalanced input as an error.

use crate::{
    clause::{Clause, first_key_part, parse_clauses},
    engine::is_clustering_engine,
    error::DdlError,
    lexer::{Lexer, token::TokenKind},
    locator::{CreateTableStatement, locate_create_table},
};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    Primary,
    #[default]
    Plain,
    Unique,
    Fulltext,
    Spatial,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndexEntry {
    /// Identifier as written, quotes included. Unnamed indexes get the name
    /// the server would assign. Empty for the primary key.
    pub name: String,
    /// Verbatim clause text from the source statement.
    pub definition: String,
    pub kind: IndexKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConstraintEntry {
    pub name: String,
    /// Verbatim clause text, starting with `CONSTRAINT`.
    pub definition: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableDefinition {
    pub table_name: String,
    pub storage_engine: String,
    /// `definition` is empty when the table declares no primary key.
    pub primary_key: IndexEntry,
    pub secondary_indexes: Vec<IndexEntry>,
    pub constraints: Vec<ConstraintEntry>,
    /// First unique key of a primary-key-less table on a clustering engine.
    /// The engine clusters rows on it, so it is never dropped.
    pub non_pk_clustering_key_name: String,
    /// Position of that key in `secondary_indexes`.
    #[serde(skip)]
    pub non_pk_clustering_key: Option<usize>,
}

impl TableDefinition {
    /// Parses an isolated `CREATE TABLE` statement. Text that holds no
    /// `CREATE TABLE` at all produces an empty definition.
    pub fn new(statement: &str) -> Self {
        locate_create_table(statement)
            .map(|stmt| Self::from_statement(&stmt))
            .unwrap_or_default()
    }

    /// Parses the first `CREATE TABLE` found anywhere in `script`.
    pub fn from_script(script: &str) -> Option<Self> {
        locate_create_table(script).map(|stmt| Self::from_statement(&stmt))
    }

    /// Like [`TableDefinition::from_script`], but rejects a missing statement
    /// and a clause list that never closes.
    pub fn from_script_strict(script: &str) -> Result<Self, DdlError> {
        let stmt = locate_create_table(script).ok_or(DdlError::NoCreateTable)?;
        if !stmt.balanced {
            return Err(DdlError::UnbalancedParentheses {
                statement_offset: stmt.offset,
            });
        }
        Ok(Self::from_statement(&stmt))
    }

    pub fn from_statement(stmt: &CreateTableStatement<'_>) -> Self {
        let mut table = TableDefinition {
            table_name: stmt.name.to_string(),
            storage_engine: storage_engine(stmt.options).to_string(),
            primary_key: IndexEntry {
                kind: IndexKind::Primary,
                ..IndexEntry::default()
            },
            ..TableDefinition::default()
        };

        for clause in parse_clauses(stmt.body) {
            match clause {
                Clause::PrimaryKey { definition } if table.primary_key.definition.is_empty() => {
                    table.primary_key.definition = definition.to_string();
                }
                Clause::ForeignKey { name, definition } => {
                    table.constraints.push(ConstraintEntry {
                        name: name.to_string(),
                        definition: definition.to_string(),
                    });
                }
                Clause::Index {
                    name,
                    kind,
                    definition,
                } => {
                    table.secondary_indexes.push(IndexEntry {
                        name: name.to_string(),
                        definition: definition.to_string(),
                        kind,
                    });
                }
                other => trace!(clause = other.definition(), "Skipping clause"),
            }
        }

        assign_index_names(&mut table.secondary_indexes);

        if !table.has_primary_key()
            && is_clustering_engine(&table.storage_engine)
            && let Some(position) = table
                .secondary_indexes
                .iter()
                .position(|index| index.kind == IndexKind::Unique)
        {
            table.non_pk_clustering_key_name = table.secondary_indexes[position].name.clone();
            table.non_pk_clustering_key = Some(position);
        }

        debug!(
            table = %table.table_name,
            engine = %table.storage_engine,
            primary_key = table.has_primary_key(),
            indexes = table.secondary_indexes.len(),
            constraints = table.constraints.len(),
            "Parsed CREATE TABLE"
        );
        table
    }

    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.definition.is_empty()
    }

    /// Whether the secondary index at `position` is the implicit clustering key.
    pub fn is_clustering_key(&self, position: usize) -> bool {
        self.non_pk_clustering_key == Some(position)
    }

    /// Secondary indexes that may be dropped and re-added around a load.
    pub fn droppable_indexes(&self) -> impl Iterator<Item = &IndexEntry> {
        self.secondary_indexes
            .iter()
            .enumerate()
            .filter(move |(position, _)| !self.is_clustering_key(*position))
            .map(|(_, index)| index)
    }
}

/// Names unnamed indexes after their first column, the way MySQL does:
/// `_2`, `_3` and so on are appended while the name is taken. Names compare
/// case-insensitively and `PRIMARY` is reserved.
fn assign_index_names(indexes: &mut [IndexEntry]) {
    let mut taken: HashSet<String> = indexes
        .iter()
        .filter(|index| !index.name.is_empty())
        .map(|index| unquote(&index.name).to_lowercase())
        .collect();
    taken.insert("primary".to_string());

    for index in indexes.iter_mut().filter(|index| index.name.is_empty()) {
        let base = first_key_part(&index.definition).map_or_else(|| "functional_index".to_string(), unquote);
        let mut name = base.clone();
        let mut suffix = 2;
        while taken.contains(&name.to_lowercase()) {
            name = format!("{base}_{suffix}");
            suffix += 1;
        }
        taken.insert(name.to_lowercase());

        trace!(name = %name, definition = %index.definition, "Assigned name to unnamed index");
        index.name = format!("`{}`", name.replace('`', "``"));
    }
}

fn unquote(identifier: &str) -> String {
    match identifier.strip_prefix('`').and_then(|s| s.strip_suffix('`')) {
        Some(inner) => inner.replace("``", "`"),
        None => identifier.to_string(),
    }
}

/// Value of the `ENGINE` table option, with or without `=`.
fn storage_engine(options: &str) -> &str {
    let mut tokens = Lexer::significant(options).peekable();
    while let Some(token) = tokens.next() {
        if !token.is_keyword("ENGINE") {
            continue;
        }
        tokens.next_if(|t| t.kind == TokenKind::Equals);
        return match tokens.next() {
            Some(value) if value.kind == TokenKind::Word => value.lexeme,
            Some(value) if matches!(value.kind, TokenKind::QuotedIdent | TokenKind::String) => {
                value.lexeme.get(1..value.lexeme.len().saturating_sub(1)).unwrap_or("")
            }
            _ => "",
        };
    }
    ""
}
