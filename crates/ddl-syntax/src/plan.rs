//! Orders the generated `ALTER TABLE` statements around a bulk load.
//!
//! Before the load, foreign keys are dropped first because they may depend
//! on a secondary index; after the load, indexes come back before the
//! constraints that use them.

use crate::{engine::EngineSet, error::DdlError, table::TableDefinition};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanOptions {
    /// Engines the plan applies to. Tables on other engines get an empty plan.
    pub engines: EngineSet,
    pub drop_indexes: bool,
    pub drop_constraints: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            engines: EngineSet::default(),
            drop_indexes: true,
            drop_constraints: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadPlan {
    pub table_name: String,
    pub pre_load: Vec<String>,
    pub post_load: Vec<String>,
}

impl LoadPlan {
    pub fn new(table: &TableDefinition, options: &PlanOptions) -> Self {
        let mut plan = LoadPlan {
            table_name: table.table_name.clone(),
            ..LoadPlan::default()
        };

        if !options.engines.contains(&table.storage_engine) {
            debug!(
                table = %table.table_name,
                engine = %table.storage_engine,
                engines = %options.engines,
                "Engine not selected, keeping keys in place"
            );
            return plan;
        }

        let (drop_constraints, add_constraints) = if options.drop_constraints {
            (table.drop_constraints_sql(), table.add_constraints_sql())
        } else {
            Default::default()
        };
        let (drop_indexes, add_indexes) = if options.drop_indexes {
            (
                table.drop_secondary_indexes_sql(),
                table.add_secondary_indexes_sql(),
            )
        } else {
            Default::default()
        };

        plan.pre_load = [drop_constraints, drop_indexes]
            .into_iter()
            .filter(|sql| !sql.is_empty())
            .collect();
        plan.post_load = [add_indexes, add_constraints]
            .into_iter()
            .filter(|sql| !sql.is_empty())
            .collect();

        debug!(
            table = %plan.table_name,
            pre_load = plan.pre_load.len(),
            post_load = plan.post_load.len(),
            "Built load plan"
        );
        plan
    }

    pub fn from_script(script: &str, options: &PlanOptions) -> Result<Self, DdlError> {
        let table = TableDefinition::from_script(script).ok_or(DdlError::NoCreateTable)?;
        Ok(Self::new(&table, options))
    }

    pub fn is_empty(&self) -> bool {
        self.pre_load.is_empty() && self.post_load.is_empty()
    }
}
