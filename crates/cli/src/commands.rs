use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the upsert statement for a target/source pair and execute it
    Merge {
        #[arg(long, help = "Target table: <catalog>.<namespace>.<name>")]
        target: String,

        #[arg(
            long,
            help = "Source table: <catalog>.<namespace>.<name> or <namespace>.<name>"
        )]
        source: String,

        #[arg(long = "key", help = "Key column; repeat for composite keys")]
        keys: Vec<String>,

        #[arg(long, help = "Reserved options as JSON, e.g. 'null' or '{}'")]
        options: Option<String>,

        #[arg(long, help = "Connection string")]
        conn_str: String,
    },
    /// Generate and print the statement without executing it
    Render {
        #[arg(long, help = "Target table: <catalog>.<namespace>.<name>")]
        target: String,

        #[arg(
            long,
            help = "Source table: <catalog>.<namespace>.<name> or <namespace>.<name>"
        )]
        source: String,

        #[arg(long = "key", help = "Key column; repeat for composite keys")]
        keys: Vec<String>,

        #[arg(long, help = "Reserved options as JSON, e.g. 'null' or '{}'")]
        options: Option<String>,

        #[arg(long, help = "Connection string")]
        conn_str: String,

        /// Statement dialect: "postgres" or "bigquery"
        #[arg(long, default_value = "postgres")]
        dialect: String,
    },
    /// Print a table's introspected column descriptors as JSON
    Columns {
        #[arg(long, help = "Table reference, fully or partially qualified")]
        table: String,

        #[arg(long, help = "Connection string")]
        conn_str: String,

        #[arg(
            long,
            help = "If specified, writes the JSON to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Test a connection string against the store
    TestConn {
        #[arg(long, help = "Connection string")]
        conn_str: String,
    },
}
