use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for RamadanSync
/// Ramadan Sehar/Iftar timings, countdown and monthly calendar
#[derive(Parser)]
#[command(
    name = "ramadansync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Ramadan Sehar/Iftar timings for your city, with a live countdown and monthly calendar",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Override the timings API base URL
    #[arg(global = true, long = "api-url", hide = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or change the location settings (city, country, method, school)
    Settings {
        #[arg(long, help = "City name, e.g. \"Lahore\"")]
        city: Option<String>,

        #[arg(long, help = "Country name, e.g. \"Pakistan\"")]
        country: Option<String>,

        /// Calculation method code (see `methods`)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=5))]
        method: Option<u8>,

        /// Juristic school: 0 = Shafi/Maliki, 1 = Hanafi
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=1))]
        school: Option<u8>,

        #[arg(
            long,
            conflicts_with_all = ["city", "country", "method", "school"],
            help = "Forget the saved settings and return to defaults"
        )]
        reset: bool,
    },

    /// List calculation methods and juristic schools
    Methods,

    /// Show today's timings and the next Sehar/Iftar
    Today,

    /// Live countdown to the next Sehar/Iftar, refreshed every second
    Countdown {
        #[arg(
            long,
            default_value_t = 0,
            help = "Stop after N ticks (0 = run until interrupted)"
        )]
        ticks: u64,
    },

    /// Monthly Sehar/Iftar calendar
    Calendar {
        #[arg(long, help = "Year (default: current)")]
        year: Option<i32>,

        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12), help = "Month 1-12 (default: current)")]
        month: Option<u32>,

        #[arg(long, help = "Show only the days of Ramadan")]
        ramadan: bool,

        #[arg(long, value_enum, requires = "file", help = "Export the table instead of printing it")]
        export: Option<ExportFormat>,

        #[arg(long, value_name = "FILE", requires = "export")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Inspect or clear cached API responses
    Cache {
        #[arg(long = "info", help = "List cached responses")]
        info: bool,

        #[arg(long = "clear", help = "Remove all cached responses")]
        clear: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
