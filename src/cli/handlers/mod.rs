use std::io::{IsTerminal, Write};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io;
use crate::io::external;
use crate::io::store::Store;
use crate::model::catalog;
use crate::model::route::Route;
use crate::ops::{export, session::Session};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let dir = config_io::data_dir(cli.data_dir.as_deref());
    let config = config_io::read_config(&dir);
    let store = Store::open(&dir)?;
    let mut session = Session::open(store);

    match cli.command {
        // No subcommand launches the TUI in main; nothing to do here
        None => Ok(()),
        Some(cmd) => match cmd {
            // Read commands
            Commands::List(args) => cmd_list(&session, args, json),
            Commands::Stats => cmd_stats(&session, json),
            Commands::Export => cmd_export(&session, &config.export),

            // Write commands
            Commands::Toggle(args) => cmd_toggle(&mut session, args, json),
            Commands::Route(args) => cmd_route(&mut session, args, json),
            Commands::SelectAll => cmd_select_all(&mut session, json),
            Commands::NewRun => cmd_new_run(&mut session),
            Commands::Reset(args) => cmd_reset(&mut session, args),

            // Outbound
            Commands::Mailto(args) => cmd_mailto(&session, &config.export, args),
            Commands::Copy => cmd_copy(&session, &config.export),
        },
    }
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(
    session: &Session,
    args: ListArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let state_filter = args
        .state
        .as_deref()
        .map(parse_state_filter)
        .transpose()
        .map_err(Box::<dyn std::error::Error>::from)?;

    let cantons: Vec<(&catalog::Canton, bool)> = catalog::CANTONS
        .iter()
        .map(|c| (c, session.is_done(c.code)))
        .filter(|(_, done)| state_filter.is_none_or(|want| *done == want))
        .collect();

    if json {
        let output = ListJson {
            cantons: cantons
                .iter()
                .map(|(c, done)| canton_to_json(c, *done))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        for (canton, done) in &cantons {
            println!("{}", format_canton_line(canton, *done));
        }
    }
    Ok(())
}

fn cmd_stats(session: &Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(session))?);
    } else {
        for line in format_stats(session) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_export(
    session: &Session,
    config: &crate::model::config::ExportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", export::mail_body(session, config));
    Ok(())
}

// ---------------------------------------------------------------------------
// Write command handlers
// ---------------------------------------------------------------------------

fn cmd_toggle(
    session: &mut Session,
    args: ToggleArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for code in &args.codes {
        let now_done = session.toggle(code)?;
        if !json && let Some(canton) = catalog::find(code) {
            println!("{}", format_canton_line(canton, now_done));
        }
    }

    // Finish check runs after the batch, like a burst of clicks
    if session.mark_finished_if_complete(chrono::Utc::now())? && !json {
        println!("Alle 26! Geschafft.");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(session))?);
    }
    Ok(())
}

fn cmd_route(
    session: &mut Session,
    args: RouteArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.start.is_some() || args.end.is_some() {
        let current = session.route().clone();
        let route = Route::new(
            args.start.unwrap_or(current.start),
            args.end.unwrap_or(current.end),
        );
        session.set_route(route)?;
    }

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&route_to_json(session.route()))?
        );
    } else {
        for line in format_route(session.route()) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_select_all(session: &mut Session, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    session.select_all()?;
    if session.mark_finished_if_complete(chrono::Utc::now())? && !json {
        println!("Alle 26! Geschafft.");
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&stats_to_json(session))?);
    } else {
        println!("all 26 cantons marked done");
    }
    Ok(())
}

fn cmd_new_run(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    session.new_run();
    println!("new run started (route kept)");
    Ok(())
}

fn cmd_reset(session: &mut Session, args: ResetArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.yes && !confirm("Wirklich alles zuruecksetzen?")? {
        println!("aborted");
        return Ok(());
    }
    session.reset();
    println!("reset: selection, completion, and route cleared");
    Ok(())
}

// ---------------------------------------------------------------------------
// Outbound handlers
// ---------------------------------------------------------------------------

fn cmd_mailto(
    session: &Session,
    config: &crate::model::config::ExportConfig,
    args: MailtoArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let url = export::mailto_url(session, config);
    if args.open {
        external::open_url(&url)?;
    } else {
        println!("{}", url);
    }
    Ok(())
}

fn cmd_copy(
    session: &Session,
    config: &crate::model::config::ExportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = export::mail_body(session, config);
    match external::clipboard_set(&text) {
        Ok(()) => {
            println!("Text kopiert");
        }
        Err(e) => {
            // Fallback: print the report so it can be copied manually
            eprintln!("clipboard unavailable ({}), printing instead:", e);
            println!("{}", text);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Blocking y/N confirmation on stdin. Declining (or a non-interactive
/// stdin) aborts the operation.
fn confirm(prompt: &str) -> Result<bool, std::io::Error> {
    let stdin = std::io::stdin();
    if !stdin.is_terminal() {
        return Ok(false);
    }
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    stdin.read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
