use crate::error::CliError;
use ddl_syntax::LoadPlan;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct FilePlan {
    pub file: String,
    #[serde(flatten)]
    pub plan: LoadPlan,
}

/// Plain SQL listing of a set of plans, one commented section per file.
pub struct SqlReport<'a>(pub &'a [FilePlan]);

impl fmt::Display for SqlReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for FilePlan { file, plan } in self.0 {
            writeln!(f, "-- {} ({file})", plan.table_name)?;
            if plan.is_empty() {
                writeln!(f, "-- nothing to do")?;
                continue;
            }
            writeln!(f, "-- before load")?;
            for sql in &plan.pre_load {
                writeln!(f, "{sql};")?;
            }
            writeln!(f, "-- after load")?;
            for sql in &plan.post_load {
                writeln!(f, "{sql};")?;
            }
        }
        Ok(())
    }
}

pub async fn write_json<T: Serialize>(value: &T, output: Option<String>) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => tokio::fs::write(path, json).await?,
        None => println!("{json}"),
    }
    Ok(())
}

pub async fn print_plans(plans: &[FilePlan], json: bool) -> Result<(), CliError> {
    if json {
        write_json(&plans, None).await
    } else {
        print!("{}", SqlReport(plans));
        Ok(())
    }
}
