//! Plain-text rendering of board projections.

use taskboard_core::{ProjectListItem, Status, TaskCard, TaskDetail};

pub fn project_list(items: &[ProjectListItem]) -> String {
    if items.is_empty() {
        return "no projects\n".to_string();
    }
    items
        .iter()
        .map(|item| {
            let marker = if item.is_current { '*' } else { ' ' };
            format!("{marker} {:>2}  {}\n", item.index, item.name)
        })
        .collect()
}

/// Cards grouped into one column per status.
pub fn task_board(title: &str, cards: &[TaskCard]) -> String {
    let mut out = format!("{title}\n");
    for status in Status::ALL {
        let column: Vec<&TaskCard> = cards.iter().filter(|card| card.status == status).collect();
        out.push_str(&format!("\n{status} ({})\n", column.len()));
        for card in column {
            out.push_str(&format!(
                "  [{}] {}  ({})\n",
                card.index,
                card.title,
                card.subtask_summary()
            ));
        }
    }
    out
}

pub fn task_detail(detail: &TaskDetail) -> String {
    let mut out = format!("[{}] {}\nstatus: {}\n", detail.index, detail.title, detail.status);
    if !detail.description.is_empty() {
        out.push_str(&format!("\n{}\n", detail.description));
    }
    if !detail.subtasks.is_empty() {
        out.push('\n');
    }
    for (index, subtask) in detail.subtasks.iter().enumerate() {
        let check = if subtask.complete { 'x' } else { ' ' };
        out.push_str(&format!("  {index}. [{check}] {}\n", subtask.title));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{project_list, task_board};
    use taskboard_core::{ProjectListItem, Status, TaskCard};

    #[test]
    fn project_list_marks_current() {
        let items = vec![
            ProjectListItem {
                index: 0,
                name: "Alpha".to_string(),
                is_current: false,
            },
            ProjectListItem {
                index: 1,
                name: "Beta".to_string(),
                is_current: true,
            },
        ];
        assert_eq!(project_list(&items), "   0  Alpha\n*  1  Beta\n");
    }

    #[test]
    fn task_board_lists_every_status_column() {
        let cards = vec![TaskCard {
            index: 0,
            title: "Ship".to_string(),
            status: Status::Doing,
            completed_subtasks: 1,
            total_subtasks: 2,
        }];
        let out = task_board("Launch", &cards);
        assert!(out.starts_with("Launch\n"));
        assert!(out.contains("To-Do (0)"));
        assert!(out.contains("Doing (1)\n  [0] Ship  (1 of 2 subtasks)"));
        assert!(out.contains("Done (0)"));
    }
}
