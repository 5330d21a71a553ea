//! Cycle Detection
//!
//! Depth-first search over the constraint graph with explicit closed-path
//! reconstruction, so a contradiction can be reported as the exact chain of
//! constraints that causes it.

use std::collections::BTreeMap;

use crate::domain::entities::ConstraintGraph;

/// DFS visit state per node.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    InProgress,
    Done,
}

type Successors<'g> = std::collections::btree_set::Iter<'g, String>;

/// Find one cycle, if any exists, as a closed path: the first name is
/// repeated at the end, and each adjacent pair follows one constraint edge.
///
/// Roots and successors are walked in lexicographic order, so the same graph
/// always reports the same cycle. The search is iterative; graph depth never
/// touches the call stack.
pub fn find_cycle(graph: &ConstraintGraph) -> Option<Vec<String>> {
    let mut colors: BTreeMap<&str, Color> = graph
        .nodes()
        .map(|name| (name, Color::Unvisited))
        .collect();

    for root in graph.nodes() {
        if colors.get(root) != Some(&Color::Unvisited) {
            continue;
        }

        // The stack spine is the active path from the root to the node
        // currently being expanded.
        let mut stack: Vec<(&str, Successors<'_>)> = vec![(root, graph.successors(root))];
        colors.insert(root, Color::InProgress);

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            match frame.1.next().map(String::as_str) {
                Some(next) => match colors.get(next).copied().unwrap_or(Color::Unvisited) {
                    Color::InProgress => {
                        // Back edge into the active path: everything from
                        // `next` up the spine is the cycle.
                        let mut path: Vec<String> = Vec::new();
                        for (name, _) in stack.iter().rev() {
                            path.push((*name).to_string());
                            if *name == next {
                                break;
                            }
                        }
                        path.reverse();
                        path.push(next.to_string());
                        return Some(path);
                    }
                    Color::Unvisited => {
                        colors.insert(next, Color::InProgress);
                        stack.push((next, graph.successors(next)));
                    }
                    Color::Done => {}
                },
                None => {
                    colors.insert(node, Color::Done);
                    stack.pop();
                }
            }
        }
    }

    None
}
