use attrtree::commands::{LeafMatch, MoveReport, Row};
use attrtree::index::NodeKind;
use colored::Colorize;

const INDENT: &str = "  ";
const LOCK_MARKER: &str = "⚲";

pub(crate) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(crate) fn print_info(message: &str) {
    println!("{}", message.dimmed());
}

pub(crate) fn print_rows(rows: &[Row], show_locked_marker: bool) {
    if rows.is_empty() {
        println!("No folders.");
        return;
    }

    for row in rows {
        let indent = INDENT.repeat(row.depth);
        match row.kind {
            NodeKind::Folder => {
                let arrow = if row.expanded { "▾" } else { "▸" };
                println!("{}{} {}", indent, arrow, row.label.bold());
            }
            NodeKind::Leaf => {
                let check = if row.selected { "[x]" } else { "[ ]" };
                let label = if row.locked {
                    row.label.dimmed()
                } else {
                    row.label.normal()
                };
                let lock = if row.locked && show_locked_marker {
                    format!(" {}", LOCK_MARKER)
                } else {
                    String::new()
                };
                println!(
                    "{}{} {}{} {}",
                    indent,
                    check,
                    label,
                    lock,
                    format!("({})", row.id).dimmed()
                );
            }
        }
    }
}

pub(crate) fn print_move(report: &MoveReport) {
    if report.is_noop() {
        print_info(&format!("'{}' is already there", report.leaf_id));
        return;
    }
    print_success(&format!(
        "Moved '{}' from {}[{}] to {}[{}]",
        report.leaf_id,
        report.from_parent_id,
        report.from_index,
        report.to_parent_id,
        report.to_index
    ));
}

pub(crate) fn print_matches(matches: &[LeafMatch]) {
    if matches.is_empty() {
        println!("No matching attributes.");
        return;
    }

    for m in matches {
        let lock = if m.locked {
            format!(" {}", LOCK_MARKER)
        } else {
            String::new()
        };
        println!(
            "{}{} {} {}",
            m.label,
            lock,
            format!("({})", m.leaf_id).dimmed(),
            format!("in {}", m.parent_id).dimmed()
        );
    }
}
