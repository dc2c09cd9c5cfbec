use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Print the first CREATE TABLE statement of a dump script
    Extract {
        #[arg(long, help = "Dump script path")]
        file: String,
    },
    /// Print the parsed table definition as JSON
    Inspect {
        #[arg(long, help = "Dump script path")]
        file: String,

        #[arg(
            long,
            help = "If specified, writes the JSON to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print the statements to run before and after a bulk load
    Plan {
        #[arg(long = "file", required = true, help = "Dump script path, may be repeated")]
        files: Vec<String>,

        #[arg(long, help = "Print the plans as JSON instead of SQL")]
        json: bool,

        /// Storage engines to optimize: "*" or a comma-separated list
        #[arg(long)]
        engines: Option<String>,

        #[arg(long, help = "Leave secondary indexes in place")]
        skip_indexes: bool,

        #[arg(long, help = "Leave foreign keys in place")]
        skip_constraints: bool,

        #[arg(long, help = "Load LOADKEYS_* settings from this env file")]
        env_file: Option<String>,
    },
}
