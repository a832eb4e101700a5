use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "apictl")]
#[command(
    author,
    version,
    about = "Call the application backend and report failures the way users see them"
)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to ./api-client.toml when present)
    #[clap(short, long, global = true)]
    pub config: Option<String>,

    /// Enable verbose logging (RUST_LOG takes precedence)
    #[clap(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Invoke a backend endpoint and print the normalized response as JSON
    Call {
        /// Path relative to the backend base URL
        path: String,

        /// HTTP method to use
        #[clap(short, long, value_enum, default_value_t = HttpMethod::Get)]
        method: HttpMethod,

        /// JSON request body
        #[clap(short, long)]
        data: Option<String>,

        /// Query parameters as key=value, may be repeated
        #[clap(short, long)]
        query: Vec<String>,

        /// Bearer token for the Authorization header
        #[clap(long)]
        token: Option<String>,

        /// Abandon the call after this many seconds
        #[clap(short, long)]
        timeout: Option<f64>,

        /// Operation label used in failure notifications (e.g. "load")
        #[clap(long)]
        operation: Option<String>,

        /// Resource label used in failure notifications (e.g. "projects")
        #[clap(long)]
        resource: Option<String>,

        /// Do not print failure notifications
        #[clap(long, default_value_t = false)]
        silent: bool,
    },

    /// Classify a JSON error value into its user-facing message
    Classify {
        /// JSON value; bare text is treated as a string
        value: String,
    },

    /// Print the normalized authentication service URL
    AuthUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}
