use colored::*;
use jiff::civil::Date;
use jiff::{Timestamp, Zoned, tz::TimeZone};
use tabled::{builder::Builder, settings::Style};

use crate::models::{list::TaskList, task::Task};

/// Placeholder shown for a completion timestamp that is still unset
const UNSET_MARKER: &str = "…";

/// Width taken by the non-task columns plus table borders
const FIXED_COLUMNS_WIDTH: usize = 54;

/// Get the terminal width, defaulting to 80 if unavailable
fn get_terminal_width() -> usize {
    term_size::dimensions().map(|(w, _)| w).unwrap_or(80)
}

/// Format a timestamp for display. Same-day timestamps render as
/// "Today - HH:MM", anything else as "D Mon - HH:MM".
pub fn format_timestamp(zoned: &Zoned, today: Date) -> String {
    if zoned.date() == today {
        format!("Today - {}", zoned.strftime("%H:%M"))
    } else {
        zoned.strftime("%-d %b - %H:%M").to_string()
    }
}

fn timestamp_cell(timestamp: Timestamp, today: Date) -> String {
    let zoned = Zoned::new(timestamp, TimeZone::system());
    format_timestamp(&zoned, today)
}

fn completed_cell(completed_at: Option<Timestamp>, today: Date) -> String {
    match completed_at {
        Some(timestamp) => timestamp_cell(timestamp, today),
        None => UNSET_MARKER.to_string(),
    }
}

/// Truncate text to `max` characters, marking the cut with an ellipsis
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

fn task_cell(task: &Task, max_width: usize) -> String {
    let text = truncate(&task.task, max_width);
    if task.done {
        format!("✓ {}", text).green().to_string()
    } else {
        format!("━ {}", text).blue().to_string()
    }
}

fn status_cell(task: &Task) -> String {
    if task.done {
        "COMPLETED".green().to_string()
    } else {
        "PENDING".red().to_string()
    }
}

/// Render a view header with title and count
pub fn render_view_header(title: &str, count: usize) {
    let task_word = if count == 1 { "task" } else { "tasks" };
    println!("\n  {} ({} {})\n", title.cyan().bold(), count, task_word);
}

/// Render the full task list as an indexed table with pending/completed
/// tallies below it. Rows keep their insertion order.
pub fn render_all(list: &TaskList, today: Date) {
    if list.is_empty() {
        println!("(empty)");
        return;
    }

    let max_task_width = get_terminal_width().saturating_sub(FIXED_COLUMNS_WIDTH).max(20);

    let mut builder = Builder::default();
    builder.push_record(["#", "Task", "Status", "Created At", "Completed At"]);
    for (position, task) in list.iter().enumerate() {
        builder.push_record([
            (position + 1).to_string(),
            task_cell(task, max_task_width),
            status_cell(task),
            timestamp_cell(task.created_at, today),
            completed_cell(task.completed_at, today),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    println!("{table}");

    println!(
        "\n{}    {}",
        format!("pending: {}", list.count_pending()).red(),
        format!("completed: {}", list.count_completed()).green(),
    );
}

/// Render a filtered subset of tasks. The index column is omitted: after
/// filtering, positions would no longer address the right task.
pub fn render_filtered(tasks: &[&Task], today: Date) {
    if tasks.is_empty() {
        println!("(empty)");
        return;
    }

    let max_task_width = get_terminal_width().saturating_sub(FIXED_COLUMNS_WIDTH).max(20);

    let mut builder = Builder::default();
    builder.push_record(["Task", "Status", "Created At", "Completed At"]);
    for task in tasks {
        builder.push_record([
            task_cell(task, max_task_width),
            status_cell(task),
            timestamp_cell(task.created_at, today),
            completed_cell(task.completed_at, today),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    fn zoned(s: &str) -> Zoned {
        s.parse().unwrap()
    }

    #[test]
    fn same_day_timestamps_use_the_today_form() {
        let moment = zoned("2024-03-05T10:30:00[UTC]");
        assert_eq!(format_timestamp(&moment, date(2024, 3, 5)), "Today - 10:30");
    }

    #[test]
    fn other_days_use_day_month_form() {
        let moment = zoned("2024-03-05T10:30:00[UTC]");
        assert_eq!(format_timestamp(&moment, date(2024, 3, 6)), "5 Mar - 10:30");
        assert_eq!(
            format_timestamp(&zoned("2023-12-25T23:05:00[UTC]"), date(2024, 3, 6)),
            "25 Dec - 23:05"
        );
    }

    #[test]
    fn unset_completion_renders_a_placeholder() {
        assert_eq!(completed_cell(None, date(2024, 3, 5)), "…");
    }

    #[test]
    fn long_task_text_is_truncated_with_ellipsis() {
        assert_eq!(truncate("short", 20), "short");
        let long = "a".repeat(30);
        let truncated = truncate(&long, 20);
        assert_eq!(truncated.chars().count(), 20);
        assert!(truncated.ends_with('…'));
    }
}
