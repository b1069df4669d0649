//! Presentation of the run log.

use crate::run_log::RunLogEntry;
use std::fmt::Write;

const EMPTY_MESSAGE: &str = "Nenhuma coleta registrada ainda.";

/// Renders the run history as a standalone HTML page
pub fn render_html(entries: &[RunLogEntry]) -> String {
    let rows = if entries.is_empty() {
        format!("<tr><td colspan=\"4\">{}</td></tr>", EMPTY_MESSAGE)
    } else {
        entries.iter().fold(String::new(), |mut rows, entry| {
            let _ = write!(
                rows,
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&entry.timestamp_label()),
                escape(&entry.state_filter),
                entry.day_window,
                entry.count
            );
            rows
        })
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Histórico de Coletas - SICFLUX</title>
    <style>
        body {{ font-family: Arial, sans-serif; padding: 30px; background-color: #f0f2f5; }}
        table {{ width: 100%; border-collapse: collapse; background: #fff; }}
        th, td {{ padding: 10px; border: 1px solid #ccc; text-align: center; }}
        th {{ background-color: #007C91; color: white; }}
        h2 {{ color: #007C91; }}
    </style>
</head>
<body>
    <h2>Histórico de Coletas HVAC</h2>
    <table>
        <tr><th>Data</th><th>Estado</th><th>Período (dias)</th><th>Registros</th></tr>
        {}
    </table>
</body>
</html>
"#,
        rows
    )
}

/// Renders the run history as a plain-text table
pub fn render_text(entries: &[RunLogEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let mut out = format!(
        "{:<19}  {:<16}  {:>6}  {:>9}\n",
        "Data", "Estado", "Dias", "Registros"
    );
    for entry in entries {
        let _ = writeln!(
            out,
            "{:<19}  {:<16}  {:>6}  {:>9}",
            entry.timestamp_label(),
            entry.state_filter,
            entry.day_window.to_string(),
            entry.count
        );
    }
    out
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
