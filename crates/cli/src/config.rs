use crate::{env::EnvManager, error::CliError};
use ddl_syntax::{EngineSet, PlanOptions};

pub const ENGINES_VAR: &str = "LOADKEYS_ENGINES";
pub const SKIP_INDEXES_VAR: &str = "LOADKEYS_SKIP_INDEXES";
pub const SKIP_CONSTRAINTS_VAR: &str = "LOADKEYS_SKIP_CONSTRAINTS";

/// Command-line values that take precedence over the environment.
#[derive(Debug, Clone, Default)]
pub struct PlanOverrides {
    pub engines: Option<String>,
    pub skip_indexes: bool,
    pub skip_constraints: bool,
}

pub fn plan_options(env: &EnvManager, overrides: &PlanOverrides) -> Result<PlanOptions, CliError> {
    let engines = match overrides.engines.as_deref().or(env.get(ENGINES_VAR)) {
        Some(list) => EngineSet::parse(list),
        None => EngineSet::default(),
    };

    let skip_indexes = overrides.skip_indexes || env.get_flag(SKIP_INDEXES_VAR)?.unwrap_or(false);
    let skip_constraints =
        overrides.skip_constraints || env.get_flag(SKIP_CONSTRAINTS_VAR)?.unwrap_or(false);

    Ok(PlanOptions {
        engines,
        drop_indexes: !skip_indexes,
        drop_constraints: !skip_constraints,
    })
}
