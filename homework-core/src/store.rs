//! The store owns the document and is the only way to change it.
//!
//! Every successful mutation writes the whole document back through the
//! [`Storage`] backend. If that write fails the error is returned, but the
//! in-memory change stays applied.

use chrono::Utc;
use tracing::{debug, error, warn};

use crate::assignment::Assignment;
use crate::class::{Class, StickyColor};
use crate::clock::{Clock, SystemClock};
use crate::document::Document;
use crate::error::{HomeworkError, HomeworkResult};
use crate::lifecycle::{self, AssignmentPatch, ClassPatch, NewAssignment};
use crate::reset::{self, ResetSummary};
use crate::storage::Storage;

pub struct Store<S: Storage, C: Clock = SystemClock> {
    document: Document,
    storage: S,
    clock: C,
}

impl<S: Storage> Store<S> {
    /// Open with the system clock.
    pub fn open(storage: S) -> Self {
        Self::open_with_clock(storage, SystemClock)
    }
}

impl<S: Storage, C: Clock> Store<S, C> {
    /// Load the saved document. A missing or unreadable document starts an
    /// empty one instead of failing.
    pub fn open_with_clock(storage: S, clock: C) -> Self {
        let document = match storage.load() {
            Ok(Some(document)) => document,
            Ok(None) => {
                debug!("no saved document, starting empty");
                Document::empty(clock.now().with_timezone(&Utc))
            }
            Err(e) => {
                warn!(error = %e, "could not load saved document, starting empty");
                Document::empty(clock.now().with_timezone(&Utc))
            }
        };

        Store {
            document,
            storage,
            clock,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn list_classes(&self) -> &[Class] {
        &self.document.classes
    }

    pub fn class(&self, id: &str) -> HomeworkResult<&Class> {
        self.document
            .class(id)
            .ok_or_else(|| HomeworkError::ClassNotFound(id.to_string()))
    }

    fn class_mut(&mut self, id: &str) -> HomeworkResult<&mut Class> {
        self.document
            .class_mut(id)
            .ok_or_else(|| HomeworkError::ClassNotFound(id.to_string()))
    }

    fn assignment_mut(&mut self, class_id: &str, id: &str) -> HomeworkResult<&mut Assignment> {
        self.class_mut(class_id)?
            .assignment_mut(id)
            .ok_or_else(|| HomeworkError::AssignmentNotFound(id.to_string()))
    }

    fn persist(&mut self) -> HomeworkResult<()> {
        self.storage.save(&self.document).inspect_err(|e| {
            error!(error = %e, "failed to save document");
        })
    }

    pub fn create_class(&mut self, name: &str, color: StickyColor) -> HomeworkResult<Class> {
        let class = lifecycle::create_class(name, color, self.clock.now().with_timezone(&Utc))?;
        debug!(id = %class.id, name = %class.name, "creating class");
        self.document.classes.push(class.clone());
        self.persist()?;
        Ok(class)
    }

    pub fn update_class(&mut self, id: &str, patch: ClassPatch) -> HomeworkResult<()> {
        lifecycle::update_class(self.class_mut(id)?, patch)?;
        self.persist()
    }

    /// Remove a class along with all of its assignments.
    pub fn delete_class(&mut self, id: &str) -> HomeworkResult<Class> {
        let index = self
            .document
            .classes
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| HomeworkError::ClassNotFound(id.to_string()))?;

        let removed = self.document.classes.remove(index);
        debug!(id = %removed.id, name = %removed.name, "deleted class");
        self.persist()?;
        Ok(removed)
    }

    pub fn create_assignment(
        &mut self,
        class_id: &str,
        fields: NewAssignment,
    ) -> HomeworkResult<Assignment> {
        let now = self.clock.now().with_timezone(&Utc);
        let class = self.class_mut(class_id)?;
        let assignment = lifecycle::create_assignment(fields, now)?;
        debug!(
            class = %class.name,
            id = %assignment.id,
            title = %assignment.title,
            "creating assignment"
        );
        class.assignments.push(assignment.clone());
        self.persist()?;
        Ok(assignment)
    }

    pub fn update_assignment(
        &mut self,
        class_id: &str,
        id: &str,
        patch: AssignmentPatch,
    ) -> HomeworkResult<()> {
        lifecycle::update_assignment(self.assignment_mut(class_id, id)?, patch)?;
        self.persist()
    }

    pub fn delete_assignment(&mut self, class_id: &str, id: &str) -> HomeworkResult<Assignment> {
        let class = self.class_mut(class_id)?;
        let index = class
            .assignments
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| HomeworkError::AssignmentNotFound(id.to_string()))?;

        let removed = class.assignments.remove(index);
        self.persist()?;
        Ok(removed)
    }

    /// Flip completion; returns the new state.
    pub fn toggle_complete(&mut self, class_id: &str, id: &str) -> HomeworkResult<bool> {
        let completed = lifecycle::toggle_complete(self.assignment_mut(class_id, id)?)?;
        self.persist()?;
        Ok(completed)
    }

    /// Run the reset pass over every class and save.
    pub fn trigger_reset(&mut self) -> HomeworkResult<ResetSummary> {
        let now = self.clock.now();
        let summary = reset::reset(&mut self.document, &now)?;
        self.persist()?;
        Ok(summary)
    }
}
