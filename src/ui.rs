use crate::dashboard::{risk_class, Dashboard};
use crate::models::{Rainfall, Record, Summary};
use crate::submission::{EntryForm, Notification};
use std::fmt::Write;

pub const EMPTY_MESSAGE: &str = "No data available";
pub const LOAD_ERROR_MESSAGE: &str = "Unable to load data";

pub fn render_index() -> String {
    page("Village Health Watch", INDEX_BODY.to_string())
}

pub fn render_entry(form: &EntryForm, notification: Option<&Notification>) -> String {
    let mut body = String::new();
    body.push_str(&render_notification(notification));

    let options: String = Rainfall::ALL
        .iter()
        .map(|level| {
            let value = level.as_str();
            let selected = if form.rainfall == value { " selected" } else { "" };
            format!(r#"<option value="{value}"{selected}>{value}</option>"#)
        })
        .collect();

    let _ = write!(
        body,
        r#"<section class="card">
      <h1>Report observations</h1>
      <p class="subtitle">Weekly village counts feed the risk dashboard.</p>
      <form method="post" action="/data-entry" class="entry">
        <label for="village">Village</label>
        <input id="village" name="village" type="text" value="{village}" />
        <label for="diarrhea">Diarrhea cases</label>
        <input id="diarrhea" name="diarrhea" type="number" min="0" value="{diarrhea}" />
        <label for="fever">Fever cases</label>
        <input id="fever" name="fever" type="number" min="0" value="{fever}" />
        <label for="rainfall">Rainfall</label>
        <select id="rainfall" name="rainfall">{options}</select>
        <button type="submit">Submit</button>
      </form>
      <p><a href="/dashboard">View dashboard</a></p>
    </section>"#,
        village = html_escape(&form.village),
        diarrhea = html_escape(&form.diarrhea),
        fever = html_escape(&form.fever),
    );

    page("Data entry", body)
}

pub fn render_dashboard(dashboard: &Dashboard, updated_at: &str) -> String {
    let (counters, table) = match dashboard {
        Dashboard::Loaded { summary, records } => (render_counters(Some(summary)), render_table(records)),
        Dashboard::Unavailable => (render_counters(None), render_empty_state(LOAD_ERROR_MESSAGE)),
    };
    let alert_display = if dashboard.show_high_risk_alert() { "block" } else { "none" };

    let body = format!(
        r#"<section class="card">
      <h1>Risk dashboard</h1>
      <p class="subtitle">Updated {updated_at}</p>
      <div id="high-risk-alert" class="alert" style="display: {alert_display}">High-risk villages reported. Dispatch a response team.</div>
      {counters}
      <div id="table-container">{table}</div>
      <p><a href="/data-entry">Report new observations</a></p>
    </section>"#,
        updated_at = html_escape(updated_at),
    );

    page("Dashboard", body)
}

fn render_counters(summary: Option<&Summary>) -> String {
    let [total, safe, medium, high] = match summary {
        Some(s) => [s.total, s.safe, s.medium, s.high].map(|count| count.to_string()),
        None => std::array::from_fn(|_| "--".to_string()),
    };

    format!(
        r#"<div class="panel">
        <div class="stat"><span class="label">Total records</span><span class="value" id="total-records">{total}</span></div>
        <div class="stat"><span class="label">Safe areas</span><span class="value" id="safe-areas">{safe}</span></div>
        <div class="stat"><span class="label">Medium risk</span><span class="value" id="medium-risk">{medium}</span></div>
        <div class="stat"><span class="label">High risk</span><span class="value" id="high-risk">{high}</span></div>
      </div>"#
    )
}

pub fn render_table(records: &[Record]) -> String {
    if records.is_empty() {
        return render_empty_state(EMPTY_MESSAGE);
    }

    let mut html = String::from(
        "<table class=\"data-table\"><thead><tr><th>Village</th><th>Diarrhea</th><th>Fever</th><th>Rainfall</th><th>Risk</th><th>Date</th></tr></thead><tbody>",
    );
    for record in records {
        html.push_str(&render_row(record));
    }
    html.push_str("</tbody></table>");
    html
}

pub fn render_row(record: &Record) -> String {
    let diarrhea = record.diarrhea.as_ref().map(ToString::to_string).unwrap_or_default();
    let fever = record.fever.as_ref().map(ToString::to_string).unwrap_or_default();
    format!(
        r#"<tr><td>{village}</td><td>{diarrhea}</td><td>{fever}</td><td>{rainfall}</td><td class="{class}">{risk}</td><td>{date}</td></tr>"#,
        village = html_escape(&record.village),
        diarrhea = html_escape(&diarrhea),
        fever = html_escape(&fever),
        rainfall = html_escape(&record.rainfall),
        class = risk_class(&record.risk),
        risk = html_escape(&record.risk),
        date = html_escape(record.date.as_deref().unwrap_or("")),
    )
}

fn render_empty_state(message: &str) -> String {
    format!("<p class=\"empty\">{}</p>", html_escape(message))
}

fn render_notification(notification: Option<&Notification>) -> String {
    match notification {
        Some(n) => format!(
            r#"<div id="notification" class="notification {}" role="status">{}</div>"#,
            n.kind.css_class(),
            html_escape(&n.message)
        ),
        None => r#"<div id="notification" class="notification" style="display: none"></div>"#.to_string(),
    }
}

fn page(title: &str, body: String) -> String {
    LAYOUT_HTML
        .replace("{{TITLE}}", &html_escape(title))
        .replace("{{BODY}}", &body)
}

pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const INDEX_BODY: &str = r#"<section class="card">
      <h1>Village Health Watch</h1>
      <p class="subtitle">Early warning for waterborne disease outbreaks.</p>
      <div class="actions">
        <a class="button" href="/data-entry">Report observations</a>
        <a class="button secondary" href="/dashboard">Open dashboard</a>
      </div>
    </section>"#;

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #eef4f1;
      --ink: #1f2d2a;
      --accent: #2a7f62;
      --card: #ffffff;
      --safe: #2a7f62;
      --medium: #d99a1e;
      --high: #c2402e;
      --shadow: 0 20px 48px rgba(31, 45, 42, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    nav {
      width: min(960px, 100%);
      display: flex;
      gap: 18px;
      margin-bottom: 18px;
    }

    nav a,
    a {
      color: var(--accent);
    }

    .card {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 20px;
    }

    h1 {
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5d6b67;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .stat {
      border: 1px solid rgba(31, 45, 42, 0.1);
      border-radius: 14px;
      padding: 16px;
      display: grid;
      gap: 6px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #7a8783;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
    }

    .entry {
      display: grid;
      gap: 8px;
      max-width: 420px;
    }

    input,
    select {
      padding: 10px 12px;
      border-radius: 10px;
      border: 1px solid rgba(31, 45, 42, 0.2);
      font-size: 1rem;
    }

    button,
    .button {
      margin-top: 8px;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 1rem;
      font-weight: 600;
      background: var(--accent);
      color: white;
      text-decoration: none;
      cursor: pointer;
    }

    .button.secondary {
      background: var(--ink);
    }

    .actions {
      display: flex;
      gap: 14px;
    }

    .data-table {
      width: 100%;
      border-collapse: collapse;
    }

    .data-table th,
    .data-table td {
      text-align: left;
      padding: 10px 12px;
      border-bottom: 1px solid rgba(31, 45, 42, 0.08);
    }

    td.safe {
      color: var(--safe);
    }

    td.medium {
      color: var(--medium);
      font-weight: 600;
    }

    td.high {
      color: var(--high);
      font-weight: 700;
    }

    .alert {
      background: rgba(194, 64, 46, 0.12);
      color: var(--high);
      border-radius: 12px;
      padding: 14px 18px;
      font-weight: 600;
    }

    .notification {
      width: min(960px, 100%);
      border-radius: 12px;
      padding: 12px 16px;
      margin-bottom: 14px;
      animation: dismiss 0s ease 3s forwards;
    }

    .notification.success {
      background: rgba(42, 127, 98, 0.14);
      color: var(--safe);
    }

    .notification.error {
      background: rgba(194, 64, 46, 0.14);
      color: var(--high);
    }

    @keyframes dismiss {
      to {
        visibility: hidden;
        height: 0;
        padding: 0;
        margin: 0;
      }
    }
  </style>
</head>
<body>
  <nav>
    <a href="/">Home</a>
    <a href="/data-entry">Data entry</a>
    <a href="/dashboard">Dashboard</a>
  </nav>
  {{BODY}}
</body>
</html>
"#;
