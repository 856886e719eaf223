use rusqlite::Connection;
use todo_core::db::migrations::latest_version;
use todo_core::db::{open_db, open_db_in_memory, DbError};
use todo_core::{
    validate_draft, KeyValueStore, SqliteKeyValueStore, TodoDraft, TodoStatus, TodoStore,
    TODOS_STORAGE_KEY,
};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    assert_table_exists(&conn_second, "kv_entries");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn get_returns_none_for_absent_key() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKeyValueStore::new(&conn);

    assert_eq!(kv.get(TODOS_STORAGE_KEY).unwrap(), None);
}

#[test]
fn set_overwrites_previous_value() {
    let conn = open_db_in_memory().unwrap();
    let kv = SqliteKeyValueStore::new(&conn);

    kv.set("todos", "[]").unwrap();
    kv.set("todos", "[{\"id\":1}]").unwrap();

    assert_eq!(kv.get("todos").unwrap().as_deref(), Some("[{\"id\":1}]"));
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn todos_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todos.sqlite3");

    let added = {
        let conn = open_db(&path).unwrap();
        let mut store = TodoStore::load(SqliteKeyValueStore::new(&conn)).unwrap();
        let fields = validate_draft(&TodoDraft::new(
            "Buy milk!",
            "Get milk at store",
            "2024-01-01",
            "Pending",
        ))
        .unwrap();
        let todo = store.add(fields);
        store.set_status(&todo.id, TodoStatus::InProgress).unwrap();
        todo.id
    };

    let conn = open_db(&path).unwrap();
    let store = TodoStore::load(SqliteKeyValueStore::new(&conn)).unwrap();
    assert_eq!(store.len(), 1);
    let todo = store.get(&added).unwrap();
    assert_eq!(todo.title, "Buy milk!");
    assert_eq!(todo.status, TodoStatus::InProgress);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
