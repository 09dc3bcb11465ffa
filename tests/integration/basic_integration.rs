/// Integration tests exercising the stores against file-backed storage
use habit_tracker_core::*;
use chrono::NaiveDate;
use tempfile::TempDir;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("habit_tracker_core=debug")
        .with_test_writer()
        .try_init();
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_habits_persist_across_store_instances() {
    init_tracing();
    let dir = TempDir::new().expect("Failed to create temp dir");
    let today = d(2024, 3, 15);

    let id = {
        let storage = FileStorage::new(dir.path().to_path_buf()).expect("Failed to create storage");
        let mut store = HabitStore::new(storage, FixedClock(today));
        let id = store
            .add_habit("Run".to_string(), "Morning run".to_string(), Frequency::Daily)
            .expect("Failed to add habit");
        store.complete_habit(&id);
        store.complete_habit(&id);
        id
    };

    // A second store over the same directory sees the same state
    let storage = FileStorage::new(dir.path().to_path_buf()).expect("Failed to create storage");
    let store = HabitStore::new(storage, FixedClock(today));

    assert_eq!(store.all_habits().len(), 1);
    assert_eq!(store.completion_today(&id), 2);
    let stats = store.stats(&id).expect("Habit should exist after reload");
    assert_eq!(stats.total_completions, 2);
    assert_eq!(stats.days_tracked, 1);
    assert_eq!(stats.current_streak, 1);
}

#[test]
fn test_habit_and_kanban_stores_share_a_directory() {
    init_tracing();
    let dir = TempDir::new().expect("Failed to create temp dir");

    {
        let storage = FileStorage::new(dir.path().to_path_buf()).expect("Failed to create storage");
        let mut habits = HabitStore::new(storage, FixedClock(d(2024, 3, 15)));
        habits
            .add_habit("Read".to_string(), String::new(), Frequency::Weekly)
            .expect("Failed to add habit");

        let storage = FileStorage::new(dir.path().to_path_buf()).expect("Failed to create storage");
        let mut board = KanbanStore::new(storage);
        board.add_card("Ship".to_string(), String::new(), "todo".to_string());
    }

    // Separate keys, separate files, no interference
    let storage = FileStorage::new(dir.path().to_path_buf()).expect("Failed to create storage");
    let habits = HabitStore::new(storage, FixedClock(d(2024, 3, 15)));
    assert_eq!(habits.all_habits().len(), 1);

    let storage = FileStorage::new(dir.path().to_path_buf()).expect("Failed to create storage");
    let board = KanbanStore::new(storage);
    assert_eq!(board.cards_by_column("todo").len(), 1);
    assert_eq!(board.columns().len(), 3);
}

#[test]
fn test_corrupt_file_degrades_to_empty_collection() {
    init_tracing();
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(format!("{HABITS_STORAGE_KEY}.json")), "corrupt{{{")
        .expect("Failed to write corrupt blob");

    let storage = FileStorage::new(dir.path().to_path_buf()).expect("Failed to create storage");
    let mut store = HabitStore::new(storage, FixedClock(d(2024, 3, 15)));
    assert!(store.all_habits().is_empty());

    // The first successful write replaces the corrupt blob
    let id = store
        .add_habit("Run".to_string(), String::new(), Frequency::Daily)
        .expect("Failed to add habit");

    let storage = FileStorage::new(dir.path().to_path_buf()).expect("Failed to create storage");
    let reloaded = HabitStore::new(storage, FixedClock(d(2024, 3, 15)));
    assert!(reloaded.habit_by_id(&id).is_some());
}

#[test]
fn test_persisted_blob_is_a_json_array_of_habits() {
    init_tracing();
    let dir = TempDir::new().expect("Failed to create temp dir");

    let storage = FileStorage::new(dir.path().to_path_buf()).expect("Failed to create storage");
    let mut store = HabitStore::new(storage, FixedClock(d(2024, 3, 15)));
    let id = store
        .add_habit(
            "Stretch".to_string(),
            String::new(),
            Frequency::DaysOfWeek { days_of_week: vec![DayOfWeek::Friday] },
        )
        .expect("Failed to add habit");
    store.complete_habit(&id);

    let raw = std::fs::read_to_string(dir.path().join(format!("{HABITS_STORAGE_KEY}.json")))
        .expect("Blob should exist");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("Blob should be JSON");

    // Wire shape: array of records with camelCase fields and a flattened
    // frequency tag
    let record = &value.as_array().expect("Blob should be an array")[0];
    assert_eq!(record["id"].as_str().unwrap(), id.as_str());
    assert_eq!(record["frequencyType"], "days-of-week");
    assert_eq!(record["daysOfWeek"][0], "friday");
    assert!(record["createdAt"].is_string());
    assert_eq!(record["completions"]["2024-03-15"], 1);
}
