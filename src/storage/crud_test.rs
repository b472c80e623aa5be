use super::*;
use crate::storage::MemoryStorage;
use serde_json::json;

fn store() -> (Arc<MemoryStorage>, LocalCrudStore) {
    let storage = Arc::new(MemoryStorage::new());
    let crud = LocalCrudStore::new(storage.clone());
    (storage, crud)
}

fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// =============================================================================
// create / get_by_id
// =============================================================================

#[test]
fn create_then_get_by_id_returns_same_fields() {
    let (_, crud) = store();
    let data = fields(json!({"name": "Dr. Priya Patel", "specialization": "Panchakarma Expert"}));
    let created = crud.create("doctors", data.clone()).unwrap();

    let found = crud.get_by_id("doctors", &created.id).unwrap();
    assert_eq!(found.fields, data);
    assert!(!found.id.is_empty());
    assert!(!found.created_at.is_empty());
    assert_eq!(found.created_at, found.updated_at);
}

#[test]
fn create_persists_whole_collection_under_its_name() {
    let (storage, crud) = store();
    crud.create("doctors", fields(json!({"name": "A"}))).unwrap();
    crud.create("doctors", fields(json!({"name": "B"}))).unwrap();

    let raw = storage.get_item("doctors").unwrap().unwrap();
    let stored: Vec<Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0]["name"], "A");
    assert_eq!(stored[1]["name"], "B");
}

#[test]
fn create_back_to_back_ids_are_unique() {
    let (_, crud) = store();
    let ids: Vec<String> = (0..20)
        .map(|i| crud.create("notes", fields(json!({"n": i}))).unwrap().id)
        .collect();
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn create_ignores_caller_system_fields() {
    let (_, crud) = store();
    let created = crud
        .create("notes", fields(json!({"id": "forged", "createdAt": "never", "text": "hi"})))
        .unwrap();
    assert_ne!(created.id, "forged");
    assert_ne!(created.created_at, "never");
    assert_eq!(created.fields.len(), 1);
}

#[test]
fn create_allows_duplicate_caller_fields() {
    let (_, crud) = store();
    crud.create("doctors", fields(json!({"email": "same@panchsutra.com"}))).unwrap();
    crud.create("doctors", fields(json!({"email": "same@panchsutra.com"}))).unwrap();
    assert_eq!(crud.get_all("doctors").len(), 2);
}

// =============================================================================
// get_all
// =============================================================================

#[test]
fn get_all_missing_collection_is_empty() {
    let (_, crud) = store();
    assert!(crud.get_all("nothing").is_empty());
}

#[test]
fn get_all_preserves_insertion_order() {
    let (_, crud) = store();
    for name in ["first", "second", "third"] {
        crud.create("items", fields(json!({"name": name}))).unwrap();
    }
    let names: Vec<_> = crud
        .get_all("items")
        .iter()
        .map(|r| r.text("name").unwrap().to_owned())
        .collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn get_all_corrupt_collection_is_empty() {
    let (storage, crud) = store();
    storage.set_item("items", "{oops").unwrap();
    assert!(crud.get_all("items").is_empty());
    assert!(crud.get_by_id("items", "1").is_none());
}

#[test]
fn mutation_on_corrupt_collection_propagates() {
    let (storage, crud) = store();
    storage.set_item("items", "{oops").unwrap();
    assert!(crud.create("items", Map::new()).is_err());
    assert_eq!(storage.get_item("items").unwrap().as_deref(), Some("{oops"));
}

// =============================================================================
// update
// =============================================================================

#[test]
fn update_merges_and_refreshes_updated_at() {
    let (_, crud) = store();
    let created = crud
        .create("appointments", fields(json!({"patient": "Priya", "status": "pending"})))
        .unwrap();

    let updated = crud
        .update("appointments", &created.id, fields(json!({"status": "confirmed"})))
        .unwrap()
        .unwrap();
    assert_eq!(updated.text("patient"), Some("Priya"));
    assert_eq!(updated.text("status"), Some("confirmed"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let reloaded = crud.get_by_id("appointments", &created.id).unwrap();
    assert_eq!(reloaded, updated);
}

#[test]
fn update_cannot_rewrite_id() {
    let (_, crud) = store();
    let created = crud.create("notes", fields(json!({"text": "a"}))).unwrap();
    let updated = crud
        .update("notes", &created.id, fields(json!({"id": "other"})))
        .unwrap()
        .unwrap();
    assert_eq!(updated.id, created.id);
}

#[test]
fn update_missing_id_is_none_and_writes_nothing() {
    let (storage, crud) = store();
    crud.create("notes", fields(json!({"text": "a"}))).unwrap();
    let before = storage.get_item("notes").unwrap();

    let result = crud.update("notes", "missing", fields(json!({"text": "b"}))).unwrap();
    assert!(result.is_none());
    assert_eq!(storage.get_item("notes").unwrap(), before);
}

#[test]
fn update_missing_collection_does_not_create_it() {
    let (storage, crud) = store();
    assert!(crud.update("ghost", "1", Map::new()).unwrap().is_none());
    assert!(storage.get_item("ghost").unwrap().is_none());
}

// =============================================================================
// delete
// =============================================================================

#[test]
fn delete_removes_matching_record() {
    let (_, crud) = store();
    let a = crud.create("notes", fields(json!({"text": "a"}))).unwrap();
    let b = crud.create("notes", fields(json!({"text": "b"}))).unwrap();

    assert!(crud.delete("notes", &a.id).unwrap());
    let remaining = crud.get_all("notes");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, b.id);
}

#[test]
fn delete_twice_second_returns_false() {
    let (_, crud) = store();
    let a = crud.create("notes", fields(json!({"text": "a"}))).unwrap();
    assert!(crud.delete("notes", &a.id).unwrap());
    assert!(!crud.delete("notes", &a.id).unwrap());
}

#[test]
fn delete_missing_id_leaves_collection_unchanged() {
    let (_, crud) = store();
    let a = crud.create("notes", fields(json!({"text": "a"}))).unwrap();
    assert!(!crud.delete("notes", "missing").unwrap());
    assert_eq!(crud.get_all("notes"), vec![a]);
}

// =============================================================================
// search
// =============================================================================

#[test]
fn search_filters_case_insensitively() {
    let (_, crud) = store();
    crud.create("patients", fields(json!({"name": "Priya Patel", "treatment": "Stress Relief Therapy"})))
        .unwrap();
    crud.create("patients", fields(json!({"name": "Rahul Singh", "treatment": "Panchakarma"})))
        .unwrap();

    let hits = crud.search("patients", "panch");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].text("name"), Some("Rahul Singh"));
    assert_eq!(crud.search("patients", "").len(), 2);
    assert!(crud.search("patients", "nobody").is_empty());
}

// =============================================================================
// next_id
// =============================================================================

#[test]
fn next_id_uses_candidate_when_free() {
    assert_eq!(next_id(&[], 1000), "1000");
}

#[test]
fn next_id_skips_taken_ids() {
    let taken = |id: &str| Record {
        id: id.into(),
        fields: Map::new(),
        created_at: String::new(),
        updated_at: String::new(),
    };
    assert_eq!(next_id(&[taken("1000"), taken("1001")], 1000), "1002");
}
