//! Storage-engine recognition.

use serde::Serialize;
use std::fmt;

/// Engines that cluster rows on the primary key, or on the first unique key
/// when the table has none.
pub const CLUSTERING_ENGINES: &[&str] = &["InnoDB"];

pub fn is_clustering_engine(engine: &str) -> bool {
    CLUSTERING_ENGINES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(engine))
}

/// Set of storage engines a bulk-load plan applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EngineSet {
    Any,
    Only(Vec<String>),
}

impl EngineSet {
    /// Parses `*` or a comma-separated list such as `InnoDB, Aria`.
    pub fn parse(list: &str) -> Self {
        if list.trim() == "*" {
            return EngineSet::Any;
        }
        let engines = list
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        EngineSet::Only(engines)
    }

    pub fn contains(&self, engine: &str) -> bool {
        match self {
            EngineSet::Any => true,
            EngineSet::Only(engines) => engines.iter().any(|e| e.eq_ignore_ascii_case(engine)),
        }
    }
}

impl Default for EngineSet {
    fn default() -> Self {
        EngineSet::Only(CLUSTERING_ENGINES.iter().map(|e| e.to_string()).collect())
    }
}

impl fmt::Display for EngineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSet::Any => write!(f, "*"),
            EngineSet::Only(engines) => write!(f, "{}", engines.join(",")),
        }
    }
}
