//! Signal filters for plain-text cluster dumps.
//!
//! Responsibilities:
//! - Reduce a multi-node hot-threads dump to the lines that carry CPU
//!   percentage figures.
//! - Collapse a `_cat/tasks` table to one row per action, keeping the row
//!   seen first.
//!
//! Explicitly does NOT handle:
//! - Fetching the dumps (that is the telemetry source's job).
//! - The "nothing found" sentences shown to operators; callers decide what
//!   an empty result means.
//!
//! Invariants / assumptions:
//! - Input line order is preserved; these filters only drop lines, never
//!   reorder or rewrite them.

use std::collections::HashSet;

/// Keep the hot-threads lines that report a CPU percentage.
///
/// A node dump is mostly stack traces; the lines worth an operator's
/// attention are the ones like `92.1% (460.5ms out of 500ms) cpu usage by
/// thread '...'`. Any line containing `%` qualifies.
pub fn hot_thread_lines(dump: &str) -> Vec<&str> {
    dump.lines().filter(|line| line.contains('%')).collect()
}

/// Collapse a task table to the first row per action.
///
/// `_cat/tasks` repeats the same action once per node and per child task.
/// Rows are keyed by their first whitespace-separated token (the action
/// column); blank rows are dropped. This keeps the header row too, since
/// `action` is just another first token.
pub fn dedupe_task_lines(table: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut rows = Vec::new();

    for line in table.lines() {
        let Some(action) = line.split_whitespace().next() else {
            continue;
        };
        if seen.insert(action) {
            rows.push(line);
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hot_thread_lines_keeps_percentage_lines_in_order() {
        let dump = "::: {node-1}{xyz}\n\
                    Hot threads at 2025-08-12T10:00:00Z\n\
                    92.1% (460.5ms out of 500ms) cpu usage by thread 'search[s]'\n\
                    10/10 snapshots sharing following 2 elements\n\
                    45.3% (226.5ms out of 500ms) cpu usage by thread 'write'\n";

        let lines = hot_thread_lines(dump);

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("92.1%"));
        assert!(lines[1].starts_with("45.3%"));
    }

    #[test]
    fn test_hot_thread_lines_empty_for_idle_dump() {
        let dump = "::: {node-1}{xyz}\nHot threads at 2025-08-12T10:00:00Z\n";

        assert!(hot_thread_lines(dump).is_empty());
    }

    #[test]
    fn test_dedupe_task_lines_keeps_first_row_per_action() {
        let table = "action                         task_id  node\n\
                     indices:data/write/bulk        a1:100   node-1\n\
                     indices:data/write/bulk        a1:101   node-2\n\
                     cluster:monitor/tasks/lists    b2:55    node-1\n";

        let rows = dedupe_task_lines(table);

        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("action"));
        assert!(rows[1].contains("a1:100"));
        assert!(rows[2].starts_with("cluster:monitor/tasks/lists"));
    }

    #[test]
    fn test_dedupe_task_lines_skips_blank_rows() {
        let table = "indices:data/write/bulk a1:100 node-1\n\n   \nindices:data/read/search c3:7 node-2\n";

        let rows = dedupe_task_lines(table);

        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_dedupe_task_lines_empty_input() {
        assert!(dedupe_task_lines("").is_empty());
    }
}
