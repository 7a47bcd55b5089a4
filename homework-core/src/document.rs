//! The root aggregate: every class with its assignments, stored as one unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::assignment::Assignment;
use crate::class::{Class, Progress};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub classes: Vec<Class>,
    #[serde(default = "Utc::now")]
    pub last_reset: DateTime<Utc>,
}

impl Document {
    pub fn empty(last_reset: DateTime<Utc>) -> Self {
        Document {
            classes: Vec::new(),
            last_reset,
        }
    }

    pub fn class(&self, id: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.id == id)
    }

    pub(crate) fn class_mut(&mut self, id: &str) -> Option<&mut Class> {
        self.classes.iter_mut().find(|c| c.id == id)
    }

    /// Every assignment across classes, paired with its class.
    pub fn assignments(&self) -> impl Iterator<Item = (&Class, &Assignment)> {
        self.classes
            .iter()
            .flat_map(|c| c.assignments.iter().map(move |a| (c, a)))
    }

    /// Active (non-future) assignments across all classes, soonest first.
    pub fn upcoming(&self) -> Vec<(&Class, &Assignment)> {
        let mut upcoming: Vec<_> = self.assignments().filter(|(_, a)| a.is_active()).collect();
        upcoming.sort_by_key(|(_, a)| a.due_at());
        upcoming
    }

    /// Overall progress. Future assignments are left out of both counts.
    pub fn progress(&self) -> Progress {
        self.classes.iter().fold(Progress::default(), |acc, class| {
            let p = class.active_progress();
            Progress {
                completed: acc.completed + p.completed,
                total: acc.total + p.total,
            }
        })
    }
}
