//! TUI rendering for homework types.
//!
//! Extension traits that add colored terminal output to homework-core types
//! using owo_colors.

use chrono::NaiveDateTime;
use homework_core::assignment::Assignment;
use homework_core::class::{Class, Progress, StickyColor};
use homework_core::date::{DueLabel, format_time_12h};
use homework_core::reset::ResetSummary;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Rendering that depends on the current time (due labels, overdue marks).
pub trait RenderAt {
    fn render_at(&self, now: NaiveDateTime) -> String;
}

/// Length of the id prefix shown next to assignments.
const SHORT_ID_LEN: usize = 8;

pub fn short_id(id: &str) -> &str {
    id.get(..SHORT_ID_LEN).unwrap_or(id)
}

fn paint(color: StickyColor, text: &str) -> String {
    match color {
        StickyColor::Yellow => text.yellow().to_string(),
        StickyColor::Pink => text.bright_magenta().to_string(),
        StickyColor::Blue => text.blue().to_string(),
        StickyColor::Green => text.green().to_string(),
        StickyColor::Purple => text.purple().to_string(),
        StickyColor::Orange => text.truecolor(255, 165, 0).to_string(),
    }
}

impl Render for StickyColor {
    fn render(&self) -> String {
        paint(*self, "■")
    }
}

impl Render for Progress {
    fn render(&self) -> String {
        const WIDTH: usize = 10;
        let filled = (self.ratio() * WIDTH as f64).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(WIDTH - filled));
        format!("{} {}", bar.green(), self.to_string().dimmed())
    }
}

impl Render for Class {
    fn render(&self) -> String {
        format!("{} {}", self.color.render(), paint(self.color, &self.name).bold())
    }
}

impl RenderAt for Assignment {
    fn render_at(&self, now: NaiveDateTime) -> String {
        let checkbox = if self.is_future_assignment {
            "[-]".dimmed().to_string()
        } else if self.is_completed {
            "[x]".green().to_string()
        } else {
            "[ ]".to_string()
        };

        let overdue = self.is_overdue(now);
        let title = if self.is_completed {
            self.title.strikethrough().dimmed().to_string()
        } else if overdue {
            self.title.red().bold().to_string()
        } else {
            self.title.clone()
        };

        let due = format!(
            "{} at {}",
            DueLabel::for_date(self.due_date, &now),
            format_time_12h(self.due_time)
        );
        let due = if overdue {
            due.red().to_string()
        } else {
            due.dimmed().to_string()
        };

        let mut line = format!("{} {} {}", checkbox, title, due);

        if let Some(schedule) = &self.recurring_schedule {
            line.push_str(&format!(" {}", format!("↻ {}", schedule.describe()).cyan()));
        }
        if self.is_future_assignment {
            line.push_str(&format!(" {}", "(future)".dimmed()));
        }
        line.push_str(&format!(" {}", short_id(&self.id).dimmed()));

        line
    }
}

impl Render for ResetSummary {
    fn render(&self) -> String {
        if self.is_empty() {
            return "   Nothing to reset".dimmed().to_string();
        }

        let mut lines = Vec::new();
        if self.purged > 0 {
            let label = format!(
                "({} completed {} removed)",
                self.purged,
                pluralize("assignment", self.purged)
            );
            lines.push(format!("   {} {}", "-".red(), label.red()));
        }
        if self.rolled_forward > 0 {
            let label = format!(
                "({} recurring {} moved to next due date)",
                self.rolled_forward,
                pluralize("assignment", self.rolled_forward)
            );
            lines.push(format!("   {} {}", "↻".cyan(), label.cyan()));
        }
        if self.unchecked > 0 {
            let label = format!(
                "({} recurring {} unchecked)",
                self.unchecked,
                pluralize("assignment", self.unchecked)
            );
            lines.push(format!("   {} {}", "~".yellow(), label.yellow()));
        }
        lines.join("\n")
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_ids() {
        assert_eq!(short_id("0123456789abcdef"), "01234567");
        assert_eq!(short_id("17000"), "17000");
    }

    #[test]
    fn pluralizes() {
        assert_eq!(pluralize("assignment", 1), "assignment");
        assert_eq!(pluralize("assignment", 3), "assignments");
    }

    #[test]
    fn empty_summary() {
        assert!(ResetSummary::default().render().contains("Nothing to reset"));
    }
}
