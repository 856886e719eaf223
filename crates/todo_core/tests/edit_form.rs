use todo_core::{
    EditSelection, FormError, MemoryKeyValueStore, SubmitOutcome, TodoField, TodoForm, TodoId,
    TodoStatus, TodoStore,
};

fn fill(form: &mut TodoForm, title: &str, status: &str) {
    let draft = form.draft_mut();
    draft.title = title.to_string();
    draft.description = "Get milk at store".to_string();
    draft.end_date = "2024-01-01".to_string();
    draft.status = status.to_string();
}

#[test]
fn idle_submit_adds_and_resets_draft() {
    let backend = MemoryKeyValueStore::new();
    let mut store = TodoStore::load(&backend).unwrap();
    let mut form = TodoForm::new();

    fill(&mut form, "Buy milk!", "Pending");
    let outcome = form.submit(&mut store).unwrap();

    let todo = match outcome {
        SubmitOutcome::Added(todo) => todo,
        other => panic!("expected add, got {other:?}"),
    };
    assert_eq!(store.list(), &[todo]);
    assert_eq!(form.selection(), &EditSelection::Idle);
    assert!(form.draft().title.is_empty());
}

#[test]
fn begin_edit_prepopulates_and_submit_updates() {
    let backend = MemoryKeyValueStore::new();
    let mut store = TodoStore::load(&backend).unwrap();
    let mut form = TodoForm::new();
    fill(&mut form, "Buy milk!", "In Progress");
    form.submit(&mut store).unwrap();
    let id = store.list()[0].id.clone();

    form.begin_edit(&store, &id).unwrap();
    assert_eq!(form.selection(), &EditSelection::Editing(id.clone()));
    assert_eq!(form.submit_label(), "Update TODO");
    assert_eq!(form.draft().title, "Buy milk!");
    assert_eq!(form.draft().status, "In Progress");

    form.draft_mut().title = "Buy oat milk".to_string();
    let outcome = form.submit(&mut store).unwrap();

    assert!(matches!(outcome, SubmitOutcome::Updated(ref todo) if todo.id == id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].title, "Buy oat milk");
    assert_eq!(store.list()[0].status, TodoStatus::InProgress);
    assert_eq!(form.selection(), &EditSelection::Idle);
    assert_eq!(form.submit_label(), "Add TODO");
}

#[test]
fn begin_edit_unknown_id_keeps_state() {
    let backend = MemoryKeyValueStore::new();
    let store = TodoStore::load(&backend).unwrap();
    let mut form = TodoForm::new();
    let missing = TodoId::from("missing");

    let err = form.begin_edit(&store, &missing).unwrap_err();
    assert_eq!(err, FormError::NotFound(missing));
    assert_eq!(form.selection(), &EditSelection::Idle);
}

#[test]
fn cancel_returns_to_idle_without_writing() {
    let backend = MemoryKeyValueStore::new();
    let mut store = TodoStore::load(&backend).unwrap();
    let mut form = TodoForm::new();
    fill(&mut form, "Buy milk!", "Pending");
    form.submit(&mut store).unwrap();
    let writes = backend.write_count();

    form.begin_edit(&store, &store.list()[0].id).unwrap();
    form.draft_mut().title = "Changed my mind".to_string();
    form.cancel();

    assert_eq!(form.selection(), &EditSelection::Idle);
    assert!(form.draft().title.is_empty());
    assert_eq!(store.list()[0].title, "Buy milk!");
    assert_eq!(backend.write_count(), writes);
}

#[test]
fn invalid_submit_keeps_selection_and_draft() {
    let backend = MemoryKeyValueStore::new();
    let mut store = TodoStore::load(&backend).unwrap();
    let mut form = TodoForm::new();
    fill(&mut form, "Buy milk!", "Pending");
    form.submit(&mut store).unwrap();
    let id = store.list()[0].id.clone();

    form.begin_edit(&store, &id).unwrap();
    form.draft_mut().title = "milk".to_string();
    let errors = form.submit(&mut store).unwrap_err();

    assert!(errors.get(TodoField::Title).is_some());
    assert_eq!(form.selection(), &EditSelection::Editing(id.clone()));
    assert_eq!(form.draft().title, "milk");
    assert_eq!(store.list()[0].title, "Buy milk!");
}

#[test]
fn submit_after_selected_todo_removed_is_discarded() {
    let backend = MemoryKeyValueStore::new();
    let mut store = TodoStore::load(&backend).unwrap();
    let mut form = TodoForm::new();
    fill(&mut form, "Buy milk!", "Pending");
    form.submit(&mut store).unwrap();
    let id = store.list()[0].id.clone();

    form.begin_edit(&store, &id).unwrap();
    store.remove(&id);
    let outcome = form.submit(&mut store).unwrap();

    assert_eq!(outcome, SubmitOutcome::Discarded(id));
    assert!(store.is_empty());
    assert_eq!(form.selection(), &EditSelection::Idle);
}
