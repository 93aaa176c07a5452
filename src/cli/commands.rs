use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ks", about = concat!("[>] kantonspiel v", env!("CARGO_PKG_VERSION"), " - all 26, one tour"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different data directory
    #[arg(short = 'C', long = "data-dir", global = true)]
    pub data_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all cantons with their done/open state
    List(ListArgs),
    /// Toggle one or more cantons between done and open
    Toggle(ToggleArgs),
    /// Show progress statistics
    Stats,
    /// Show or set the route (start/end labels)
    Route(RouteArgs),
    /// Mark every canton done
    SelectAll,
    /// Start a new run (keeps the route)
    NewRun,
    /// Reset everything: selection, completion, route
    Reset(ResetArgs),
    /// Print the report text
    Export,
    /// Print the mailto link, or open it in the mail client
    Mailto(MailtoArgs),
    /// Copy the report to the clipboard
    Copy,
}

// ---------------------------------------------------------------------------
// Read command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ListArgs {
    /// Filter by state (done, open)
    #[arg(long)]
    pub state: Option<String>,
}

// ---------------------------------------------------------------------------
// Write command args
// ---------------------------------------------------------------------------

#[derive(Args)]
pub struct ToggleArgs {
    /// Canton codes to toggle (e.g. ZH BE AG)
    #[arg(required = true)]
    pub codes: Vec<String>,
}

#[derive(Args)]
pub struct RouteArgs {
    /// Set the start label
    #[arg(long)]
    pub start: Option<String>,
    /// Set the end label
    #[arg(long)]
    pub end: Option<String>,
}

#[derive(Args)]
pub struct ResetArgs {
    /// Skip confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct MailtoArgs {
    /// Open the link in the default mail client instead of printing it
    #[arg(long)]
    pub open: bool,
}
