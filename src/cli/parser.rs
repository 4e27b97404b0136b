use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for sleepy
/// Client for a personal sleep/wake tracking API
#[derive(Parser)]
#[command(
    name = "sleepy",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log sleep/wake entries, chart them day by day and show sleep statistics",
    long_about = None
)]
pub struct Cli {
    /// Use another configuration file (also: SLEEPY_CONFIG)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the API base URL from the configuration
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    /// Disable ANSI colors in charts
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    /// Increase diagnostic output (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,

        #[arg(
            long = "set",
            value_name = "KEY=VALUE",
            help = "Set one configuration key, e.g. api_url=http://host:17425"
        )]
        set: Option<String>,
    },

    /// Add an entry (toggles between asleep and awake)
    Add {
        /// Clock time: 9:30, 09:30am, 9:30 PM, 14:30 (default: now)
        time: Option<String>,

        /// Date of the entry (YYYY-MM-DD, today, yesterday; default: today)
        #[arg(long, short = 'd')]
        date: Option<String>,

        /// Mark the time as an estimate
        #[arg(long, short = 'e')]
        estimated: bool,

        /// Reject times that cannot be parsed instead of using midnight
        #[arg(long)]
        strict: bool,
    },

    /// Show the timestamp a date and time would be sent as, without sending it
    Resolve {
        time: String,

        #[arg(long, short = 'd')]
        date: Option<String>,

        #[arg(long)]
        strict: bool,
    },

    /// Remove the most recent entry
    Del {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Day-by-day chart of asleep/awake spans
    Chart {
        #[arg(long, short = 'n', help = "Show only the last N days")]
        days: Option<usize>,

        #[arg(long, help = "Oldest day first")]
        chronological: bool,

        #[arg(long, help = "Print segment offsets and spans as % of the day")]
        percent: bool,
    },

    /// List entries with the span each one opens
    Entries {
        #[arg(long, short = 'n', help = "Show only the last N entries")]
        last: Option<usize>,
    },

    /// Show aggregate statistics computed by the server
    Stats,
}
