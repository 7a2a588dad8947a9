use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Longest operation+target label printed before truncation kicks in.
const LABEL_MAX: usize = 48;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Per-operation color used when printing the audit log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "user_add" | "project_add" | "member_assign" | "log_add" => Colour::Green,
        "user_deactivate" | "project_close" => Colour::Red,
        "backup" => Colour::Blue,
        "export" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct OplogLogic;

impl OplogLogic {
    /// Print the internal audit table, one colored line per operation.
    pub fn print(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM oplog ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("Audit log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let label_w = entries
            .iter()
            .map(|(_, _, op, target, _)| label_for(op, target).len())
            .max()
            .unwrap_or(10)
            .min(LABEL_MAX);

        println!("📜 Audit log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let mut label = label_for(&operation, &target);
            if label.chars().count() > LABEL_MAX {
                let mut s: String = label.chars().take(LABEL_MAX - 3).collect();
                s.push_str("...");
                label = s;
            }

            // Only the operation word carries the color.
            let colored = match label.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(label.as_str()).to_string(),
            };

            let padding = " ".repeat(label_w.saturating_sub(strip_ansi(&colored).len()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                colored,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn label_for(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    }
}
