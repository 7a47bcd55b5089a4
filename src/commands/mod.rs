pub mod add;
pub mod class;
pub mod classes;
pub mod done;
pub mod edit;
pub mod remove;
pub mod reset;
pub mod status;
pub mod todo;

use anyhow::{Result, bail};
use chrono::NaiveDateTime;
use homework_core::Store;
use homework_core::assignment::Assignment;
use homework_core::class::Class;
use homework_core::clock::Clock;
use homework_core::storage::JsonFileStorage;

pub type HomeworkStore = Store<JsonFileStorage>;

/// Local wall-clock time according to the store's clock.
pub fn local_now(store: &HomeworkStore) -> NaiveDateTime {
    store.clock().now().naive_local()
}

/// Find a class by id or by name (case-insensitive).
pub fn resolve_class<'a>(store: &'a HomeworkStore, query: &str) -> Result<&'a Class> {
    let classes = store.list_classes();

    if let Some(class) = classes.iter().find(|c| c.id == query) {
        return Ok(class);
    }

    let by_name: Vec<_> = classes
        .iter()
        .filter(|c| c.name.eq_ignore_ascii_case(query.trim()))
        .collect();

    match by_name.as_slice() {
        [class] => Ok(*class),
        [] => {
            let available: Vec<_> = classes.iter().map(|c| c.name.clone()).collect();
            if available.is_empty() {
                bail!(
                    "Class '{}' not found. No classes yet.\n\n\
                    Create one with:\n  \
                    homework class add <name>",
                    query
                );
            }
            bail!(
                "Class '{}' not found. Available: {}",
                query,
                available.join(", ")
            );
        }
        _ => bail!("Several classes are named '{}'. Use the class id instead", query),
    }
}

/// Find an assignment in a class by id, unique id prefix, or title (case-insensitive).
pub fn resolve_assignment<'a>(class: &'a Class, query: &str) -> Result<&'a Assignment> {
    if let Some(assignment) = class.assignment(query) {
        return Ok(assignment);
    }

    let query = query.trim();
    let by_prefix: Vec<_> = class
        .assignments
        .iter()
        .filter(|a| !query.is_empty() && a.id.starts_with(query))
        .collect();
    if let [assignment] = by_prefix.as_slice() {
        return Ok(*assignment);
    }

    let by_title: Vec<_> = class
        .assignments
        .iter()
        .filter(|a| a.title.to_lowercase() == query.to_lowercase())
        .collect();

    match by_title.as_slice() {
        [assignment] => Ok(*assignment),
        [] if by_prefix.len() > 1 => {
            bail!("'{}' matches several assignments in {}", query, class.name)
        }
        [] => bail!("No assignment '{}' in {}", query, class.name),
        _ => bail!(
            "Several assignments in {} are titled '{}'. Use the id shown by `homework classes`",
            class.name,
            query
        ),
    }
}

/// Resolve class and assignment queries to owned ids.
pub fn resolve_ids(
    store: &HomeworkStore,
    class: &str,
    assignment: &str,
) -> Result<(String, String)> {
    let class = resolve_class(store, class)?;
    let assignment = resolve_assignment(class, assignment)?;
    Ok((class.id.clone(), assignment.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use homework_core::class::StickyColor;
    use homework_core::lifecycle::NewAssignment;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> HomeworkStore {
        Store::open(JsonFileStorage::new(dir.path().join("homework.json")))
    }

    fn add(store: &mut HomeworkStore, class_id: &str, title: &str) -> Assignment {
        store
            .create_assignment(
                class_id,
                NewAssignment {
                    title: title.to_string(),
                    due_date: NaiveDate::from_ymd_opt(2024, 3, 1),
                    ..Default::default()
                },
            )
            .unwrap()
    }

    #[test]
    fn classes_resolve_by_id_or_name() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);
        let math = store.create_class("Math", StickyColor::Blue).unwrap();

        assert_eq!(resolve_class(&store, &math.id).unwrap().id, math.id);
        assert_eq!(resolve_class(&store, "math").unwrap().id, math.id);

        let err = resolve_class(&store, "Art").unwrap_err().to_string();
        assert!(err.contains("Available: Math"));
    }

    #[test]
    fn assignments_resolve_by_prefix_or_title() {
        let dir = TempDir::new().unwrap();
        let mut store = store(&dir);
        let math = store.create_class("Math", StickyColor::Blue).unwrap();
        let a = add(&mut store, &math.id, "Worksheet 1");
        add(&mut store, &math.id, "Worksheet 2");

        let class = resolve_class(&store, "Math").unwrap();
        assert_eq!(resolve_assignment(class, &a.id).unwrap().id, a.id);
        assert_eq!(resolve_assignment(class, &a.id[..8]).unwrap().id, a.id);
        assert_eq!(resolve_assignment(class, "worksheet 1").unwrap().id, a.id);
        assert!(resolve_assignment(class, "Worksheet 3").is_err());
    }
}
