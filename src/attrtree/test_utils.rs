use crate::model::{AttributeLeaf, Folder, Tree};
use crate::state::TreeState;

/// A small CRM-style attribute tree:
///
/// ```text
/// contact  [email*, nickname, phone, created_at*, address[street, zip*]]
/// company  [company_name*, industry]
/// archive  []
/// ```
///
/// `*` marks locked attributes.
pub fn sample_tree() -> Tree {
    Tree::new(vec![
        Folder::new("contact", "Contact")
            .with_leaf(AttributeLeaf::locked("email", "Email"))
            .with_leaf(AttributeLeaf::new("nickname", "Nickname"))
            .with_leaf(AttributeLeaf::new("phone", "Phone"))
            .with_leaf(AttributeLeaf::named("created_at", "created_at", true))
            .with_folder(
                Folder::new("address", "Address")
                    .with_leaf(AttributeLeaf::new("street", "Street"))
                    .with_leaf(AttributeLeaf::locked("zip", "Zip")),
            ),
        Folder::new("company", "Company")
            .with_leaf(AttributeLeaf::locked("company_name", "Company name"))
            .with_leaf(AttributeLeaf::new("industry", "Industry")),
        Folder::new("archive", "Archive"),
    ])
    .expect("sample tree has unique ids")
}

pub fn sample_state() -> TreeState {
    TreeState::new(sample_tree()).expect("sample tree indexes")
}

/// Child ids of a folder, in order.
pub fn child_ids(tree: &Tree, folder_id: &str) -> Vec<String> {
    tree.all_folders()
        .into_iter()
        .find(|f| f.id() == folder_id)
        .map(|f| f.children().iter().map(|n| n.id().to_string()).collect())
        .unwrap_or_default()
}
