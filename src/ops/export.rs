use crate::model::catalog;
use crate::model::config::ExportConfig;
use crate::ops::session::Session;
use crate::util::urlenc::encode_component;

/// Build the report text used for both the mail body and the clipboard.
///
/// Layout: title line, blank, `Startpunkt:`/`Endpunkt:` (or `-` when
/// unset), blank, `Kantone (<done>/26):`, then one line per selected
/// canton in catalog order, or a single placeholder when nothing is
/// selected yet.
pub fn mail_body(session: &Session, config: &ExportConfig) -> String {
    let route = session.route();
    let selected = session.selected_cantons();

    let mut lines = Vec::new();
    lines.push(config.report_title.clone());
    lines.push(String::new());
    lines.push(format!("Startpunkt: {}", or_dash(&route.start)));
    lines.push(format!("Endpunkt: {}", or_dash(&route.end)));
    lines.push(String::new());
    lines.push(format!(
        "Kantone ({}/{}):",
        selected.len(),
        catalog::TOTAL
    ));

    if selected.is_empty() {
        lines.push("- (noch keine)".to_string());
    } else {
        for canton in selected {
            lines.push(format!("- {} – {}", canton.code, canton.name));
        }
    }

    lines.join("\n")
}

/// Build the subject line: `<prefix>: <start or "Start"> → <end or "Ziel"> (<done>/26)`.
pub fn mail_subject(session: &Session, config: &ExportConfig) -> String {
    let route = session.route();
    let start = if route.start.is_empty() {
        "Start"
    } else {
        &route.start
    };
    let end = if route.end.is_empty() {
        "Ziel"
    } else {
        &route.end
    };
    format!(
        "{}: {} → {} ({}/{})",
        config.subject_prefix,
        start,
        end,
        session.stats().done,
        catalog::TOTAL
    )
}

/// Build the full mailto URL with percent-encoded subject and body.
pub fn mailto_url(session: &Session, config: &ExportConfig) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        config.recipient,
        encode_component(&mail_subject(session, config)),
        encode_component(&mail_body(session, config))
    )
}

fn or_dash(s: &str) -> &str {
    if s.is_empty() { "-" } else { s }
}
