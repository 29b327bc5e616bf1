//! Read-only projections consumed by view layers.
//!
//! Projections are owned copies; holding one never pins or aliases board
//! state.

use crate::model::task::{Status, Subtask, Task};
use crate::repo::kv_store::KeyValueStore;
use crate::service::board_controller::BoardController;
use crate::service::board_service::BoardServiceResult;

/// One entry of the project sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectListItem {
    pub index: usize,
    pub name: String,
    pub is_current: bool,
}

/// Summary card for one task in the current project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCard {
    pub index: usize,
    pub title: String,
    pub status: Status,
    pub completed_subtasks: usize,
    pub total_subtasks: usize,
}

impl TaskCard {
    fn from_task(index: usize, task: &Task) -> Self {
        Self {
            index,
            title: task.title.clone(),
            status: task.status,
            completed_subtasks: task.completed_subtask_count(),
            total_subtasks: task.subtasks.len(),
        }
    }

    /// `"N of M subtasks"`.
    pub fn subtask_summary(&self) -> String {
        format!(
            "{} of {} subtasks",
            self.completed_subtasks, self.total_subtasks
        )
    }
}

/// Full task view including the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetail {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub subtasks: Vec<Subtask>,
}

impl<S: KeyValueStore> BoardController<S> {
    pub fn project_list(&self) -> Vec<ProjectListItem> {
        let current = self.current_project_index();
        self.projects()
            .iter()
            .enumerate()
            .map(|(index, project)| ProjectListItem {
                index,
                name: project.name.clone(),
                is_current: current == Some(index),
            })
            .collect()
    }

    pub fn current_project_title(&self) -> BoardServiceResult<String> {
        Ok(self.current_project()?.name.clone())
    }

    /// Cards for every task of the current project, in board order.
    pub fn current_task_cards(&self) -> BoardServiceResult<Vec<TaskCard>> {
        let project = self.current_project()?;
        Ok(project
            .tasks
            .iter()
            .enumerate()
            .map(|(index, task)| TaskCard::from_task(index, task))
            .collect())
    }

    /// Cards of the current project that have `status`.
    pub fn current_task_cards_with_status(
        &self,
        status: Status,
    ) -> BoardServiceResult<Vec<TaskCard>> {
        let mut cards = self.current_task_cards()?;
        cards.retain(|card| card.status == status);
        Ok(cards)
    }

    pub fn current_task_detail(&self, task_index: usize) -> BoardServiceResult<TaskDetail> {
        let task = self.current_project()?.task(task_index)?;
        Ok(TaskDetail {
            index: task_index,
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            subtasks: task.subtasks.clone(),
        })
    }
}
