use crate::state::TreeState;
use serde::Serialize;

/// A leaf whose label matched a search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafMatch {
    pub leaf_id: String,
    pub label: String,
    pub parent_id: String,
    pub locked: bool,
}

/// Case-insensitive label search, ranked exact, then prefix, then substring.
/// Equal ranks keep display order. An empty term matches nothing.
pub fn run(state: &TreeState, term: &str) -> Vec<LeafMatch> {
    let term_lower = term.trim().to_lowercase();
    if term_lower.is_empty() {
        return Vec::new();
    }

    let mut matches: Vec<(LeafMatch, u8)> = state
        .tree
        .leaves()
        .into_iter()
        .filter_map(|(folder, leaf)| {
            let label_lower = leaf.display_label().to_lowercase();

            let score = if label_lower == term_lower {
                1
            } else if label_lower.starts_with(&term_lower) {
                2
            } else if label_lower.contains(&term_lower) {
                3
            } else {
                return None;
            };

            Some((
                LeafMatch {
                    leaf_id: leaf.id().to_string(),
                    label: leaf.display_label().to_string(),
                    parent_id: folder.id().to_string(),
                    locked: leaf.is_locked(),
                },
                score,
            ))
        })
        .collect();

    // stable sort keeps display order within a rank
    matches.sort_by_key(|(_, score)| *score);
    matches.into_iter().map(|(m, _)| m).collect()
}
