//! Text rendering for tasks and statistics.

use lazytask_core::{format_date, Task, TaskStatistics};

/// One task as a single line plus an indented description line when present.
pub fn task_line(task: &Task, overdue: bool) -> String {
    let mark = if task.is_completed { "✓" } else { "○" };
    let mut line = format!(
        "[{}] {mark} {} ({}, {}) due {}",
        task.id,
        task.title,
        task.priority,
        task.category,
        format_date(task.due_date)
    );
    if overdue {
        line.push_str(" OVERDUE");
    }
    if !task.description.is_empty() {
        line.push_str("\n    ");
        line.push_str(task.description.as_str());
    }
    line
}

pub fn statistics(stats: &TaskStatistics) -> String {
    let mut lines = vec![
        "Statistics".to_string(),
        format!("  Total:      {}", stats.total),
        format!("  Completed:  {}", stats.completed),
        format!("  Active:     {}", stats.active),
        format!("  Completion: {:.1}%", stats.completion_rate),
        format!("  Overdue:    {}", stats.overdue_count),
    ];

    if !stats.priority_distribution.is_empty() {
        lines.push("  By priority:".to_string());
        for (priority, count) in &stats.priority_distribution {
            lines.push(format!("    {priority}: {count}"));
        }
    }
    if !stats.category_distribution.is_empty() {
        lines.push("  By category:".to_string());
        for (category, count) in &stats.category_distribution {
            lines.push(format!("    {category}: {count}"));
        }
    }

    lines.join("\n")
}
