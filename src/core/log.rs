use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::visible_width;
use ansi_term::Colour;

const OP_MAX_WIDTH: usize = 60;

/// ANSI colour for each operation recorded in the log table
fn color_for_operation(op: &str) -> Colour {
    match op {
        "settings" => Colour::Green,
        "settings_reset" => Colour::Red,
        "cache_clear" => Colour::Yellow,
        "export" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t = s.chars().take(max - 3).collect::<String>();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    /// One formatted line per log row; only the operation word is coloured.
    pub fn render(entries: &[LogEntry]) -> Vec<String> {
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let visible = truncate(&op_target(e), OP_MAX_WIDTH);
                let color = color_for_operation(&e.operation);
                let colored = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(visible.as_str()).to_string(),
                };
                let padding = " ".repeat(op_w.saturating_sub(visible_width(&colored)));

                format!(
                    "{:>id_w$}: {:<25} | {}{} => {}",
                    e.id,
                    date,
                    colored,
                    padding,
                    e.message,
                    id_w = id_w
                )
            })
            .collect()
    }

    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        println!("📜 Internal log:\n");
        for line in Self::render(&entries) {
            println!("{line}");
        }

        Ok(())
    }
}
