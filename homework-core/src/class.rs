//! Classes and their colour palette.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::error::HomeworkError;

/// Sticky-note colour of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickyColor {
    #[default]
    Yellow,
    Pink,
    Blue,
    Green,
    Purple,
    Orange,
}

impl StickyColor {
    pub const ALL: [StickyColor; 6] = [
        StickyColor::Yellow,
        StickyColor::Pink,
        StickyColor::Blue,
        StickyColor::Green,
        StickyColor::Purple,
        StickyColor::Orange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StickyColor::Yellow => "yellow",
            StickyColor::Pink => "pink",
            StickyColor::Blue => "blue",
            StickyColor::Green => "green",
            StickyColor::Purple => "purple",
            StickyColor::Orange => "orange",
        }
    }
}

impl fmt::Display for StickyColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StickyColor {
    type Err = HomeworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        StickyColor::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = StickyColor::ALL.iter().map(|c| c.as_str()).collect();
                HomeworkError::validation(format!(
                    "Unknown color '{}'. Available: {}",
                    s,
                    names.join(", ")
                ))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: StickyColor,
    #[serde(default)]
    pub assignments: Vec<Assignment>,
    pub created_at: DateTime<Utc>,
}

/// Completed vs. total counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completion ratio in `0.0..=1.0`; an empty set counts as 0.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }

    fn add(&mut self, assignment: &Assignment) {
        self.total += 1;
        if assignment.is_completed {
            self.completed += 1;
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{} completed", self.completed, self.total)
    }
}

impl Class {
    pub fn assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub(crate) fn assignment_mut(&mut self, id: &str) -> Option<&mut Assignment> {
        self.assignments.iter_mut().find(|a| a.id == id)
    }

    /// Assignments in display order: by due date, then due time.
    pub fn sorted_assignments(&self) -> Vec<&Assignment> {
        let mut sorted: Vec<_> = self.assignments.iter().collect();
        sorted.sort_by_key(|a| a.due_at());
        sorted
    }

    /// Progress over every assignment of the class, future ones included.
    pub fn progress(&self) -> Progress {
        let mut progress = Progress::default();
        for assignment in &self.assignments {
            progress.add(assignment);
        }
        progress
    }

    /// Progress over assignments that aren't flagged as future work.
    pub fn active_progress(&self) -> Progress {
        let mut progress = Progress::default();
        for assignment in self.assignments.iter().filter(|a| a.is_active()) {
            progress.add(assignment);
        }
        progress
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
