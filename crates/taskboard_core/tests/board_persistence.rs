use taskboard_core::db::open_db;
use taskboard_core::{
    BoardConfig, BoardController, BoardRepository, BoardService, BoardServiceError,
    CorruptStatePolicy, KeyValueStore, LoadSource, MemoryKeyValueStore, NewTask, Project,
    SqliteKeyValueStore, Status, StoredBoard, Task, SAMPLE_PROJECT_NAME,
};

const KEY: &str = "projects";

fn two_project_board() -> Vec<Project> {
    let mut launch = Project::new("Launch");
    let mut release = Task::new(
        "Release",
        "ship it",
        ["notes", "tag", "announce"],
        Status::Doing,
    );
    release.toggle_subtask(1).unwrap();
    launch.add_task(release);
    launch.add_task(Task::new("Retro", "", Vec::<String>::new(), Status::Done));

    let empty = Project::new("");
    vec![launch, empty]
}

#[test]
fn save_then_load_roundtrips_every_field() {
    let store = MemoryKeyValueStore::new();
    let repo = BoardRepository::new(&store, KEY);
    let board = two_project_board();

    repo.save(&board).unwrap();
    assert_eq!(repo.load().unwrap(), StoredBoard::Projects(board.clone()));

    let reloaded = match repo.load().unwrap() {
        StoredBoard::Projects(projects) => projects,
        StoredBoard::Empty => panic!("expected stored projects"),
    };
    assert_eq!(reloaded[0].tasks[0].completed_subtask_count(), 1);
}

#[test]
fn stored_document_matches_wire_layout() {
    let store = MemoryKeyValueStore::new();
    let repo = BoardRepository::new(&store, KEY);
    let mut project = Project::new("P");
    project.add_task(Task::new("T", "D", ["s"], Status::ToDo));

    repo.save(&[project]).unwrap();

    let document = store.get(KEY).unwrap().unwrap();
    assert_eq!(
        document,
        r#"[{"name":"P","tasks":[{"title":"T","description":"D","subtasks":[{"title":"s","complete":false}],"status":"To-Do"}]}]"#
    );
}

#[test]
fn empty_store_seeds_platform_launch() {
    let store = MemoryKeyValueStore::new();
    let mut service = BoardService::new(&store, &BoardConfig::default());

    assert_eq!(service.load().unwrap(), LoadSource::Seeded);

    let projects = service.projects();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, SAMPLE_PROJECT_NAME);
    assert_eq!(projects[0].tasks.len(), 9);

    let first = &projects[0].tasks[0];
    assert_eq!(first.title, "Build UI for onboarding flow");
    assert_eq!(first.status, Status::ToDo);
    assert_eq!(first.subtasks.len(), 2);

    let ninth = &projects[0].tasks[8];
    assert_eq!(ninth.title, "Design settings and search pages");
    assert_eq!(ninth.status, Status::Done);

    assert!(store.get(KEY).unwrap().is_some(), "seed must be persisted");
}

#[test]
fn empty_array_and_blank_documents_also_seed() {
    for document in ["[]", "", "   "] {
        let store = MemoryKeyValueStore::new();
        store.set(KEY, document).unwrap();
        let mut service = BoardService::new(&store, &BoardConfig::default());

        assert_eq!(service.load().unwrap(), LoadSource::Seeded, "document {document:?}");
        assert_eq!(service.projects()[0].name, SAMPLE_PROJECT_NAME);
    }
}

#[test]
fn reload_preserves_subtask_completion_by_position() {
    let store = MemoryKeyValueStore::new();
    {
        let mut controller = BoardController::open(&store, &BoardConfig::default());
        controller.add_project("Work").unwrap();
        controller
            .add_current_project_task(
                NewTask::new("Write docs")
                    .with_subtask("outline")
                    .with_subtask("draft")
                    .with_subtask("review"),
            )
            .unwrap();
        assert!(controller.toggle_current_project_subtask_status(0, 1).unwrap());
    }

    let mut reloaded = BoardService::new(&store, &BoardConfig::default());
    assert_eq!(reloaded.load().unwrap(), LoadSource::Stored);

    let subtasks = &reloaded.projects()[0].tasks[0].subtasks;
    assert_eq!(
        subtasks.iter().map(|s| s.complete).collect::<Vec<_>>(),
        [false, true, false]
    );
}

#[test]
fn malformed_document_surfaces_parse_error_by_default() {
    let store = MemoryKeyValueStore::new();
    store.set(KEY, "[{\"name\": \"broken\"").unwrap();
    let mut service = BoardService::new(&store, &BoardConfig::default());

    let err = service.load().unwrap_err();
    assert!(matches!(err, BoardServiceError::Parse(_)), "unexpected error: {err}");
    assert!(service.projects().is_empty());
    assert_eq!(
        store.get(KEY).unwrap().as_deref(),
        Some("[{\"name\": \"broken\""),
        "corrupt document must be left untouched"
    );
}

#[test]
fn unknown_stored_status_is_a_parse_error() {
    let store = MemoryKeyValueStore::new();
    store
        .set(KEY, r#"[{"name":"p","tasks":[{"title":"t","status":"Blocked"}]}]"#)
        .unwrap();
    let mut service = BoardService::new(&store, &BoardConfig::default());

    assert!(matches!(service.load(), Err(BoardServiceError::Parse(_))));
}

#[test]
fn reseed_policy_replaces_malformed_document() {
    let store = MemoryKeyValueStore::new();
    store.set(KEY, "not json").unwrap();
    let config = BoardConfig {
        corrupt_state_policy: CorruptStatePolicy::Reseed,
        ..BoardConfig::default()
    };
    let mut service = BoardService::new(&store, &config);

    assert_eq!(service.load().unwrap(), LoadSource::Reseeded);
    assert_eq!(service.projects()[0].name, SAMPLE_PROJECT_NAME);

    let stored = store.get(KEY).unwrap().unwrap();
    assert!(stored.starts_with("[{\"name\":\"Platform Launch\""));
}

#[test]
fn custom_storage_key_is_respected() {
    let store = MemoryKeyValueStore::new();
    let config = BoardConfig {
        storage_key: "board-v1".to_string(),
        ..BoardConfig::default()
    };
    let mut service = BoardService::new(&store, &config);
    service.load().unwrap();

    assert!(store.get("board-v1").unwrap().is_some());
    assert!(store.get(KEY).unwrap().is_none());
}

#[test]
fn sqlite_file_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.sqlite3");

    {
        let conn = open_db(&path).unwrap();
        let mut controller =
            BoardController::open(SqliteKeyValueStore::new(&conn), &BoardConfig::default());
        assert_eq!(controller.load().unwrap(), LoadSource::Seeded);
        controller.set_current_project_task_status("Done", 0).unwrap();
        controller.add_project("Second").unwrap();
    }

    let conn = open_db(&path).unwrap();
    let mut controller =
        BoardController::open(SqliteKeyValueStore::new(&conn), &BoardConfig::default());
    assert_eq!(controller.load().unwrap(), LoadSource::Stored);
    assert_eq!(controller.projects().len(), 2);
    assert_eq!(controller.projects()[1].name, "Second");
    assert_eq!(controller.get_current_project_task_status(0).unwrap(), Status::Done);
}
