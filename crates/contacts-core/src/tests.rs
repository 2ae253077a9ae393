//! `ContactService` behaviour against an in-memory store.

use std::{sync::Arc, time::Duration};

use crate::{
  Error,
  contact::{ContactField, ContactInput},
  memory::MemoryStore,
  query::{Filter, ListQuery, Pagination, Sort, SortOrder},
  service::ContactService,
  store::ContactStore,
};

fn service() -> ContactService<MemoryStore> {
  ContactService::new(Arc::new(MemoryStore::new()))
}

fn input(name: &str, gender: &str) -> ContactInput {
  ContactInput {
    name:   name.into(),
    gender: gender.into(),
    phone:  "+1 555 0100".into(),
    email:  format!("{}@example.com", name.to_lowercase()),
  }
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_then_get_round_trips() {
  let s = service();
  let created = s.create(input("Alice", "f")).await.unwrap();
  assert!(!created.id.is_empty());
  assert_eq!(created.created_at, created.updated_at);

  let fetched = s.get(&created.id).await.unwrap();
  assert_eq!(fetched, created);
  assert_eq!(fetched.name, "Alice");
  assert_eq!(fetched.gender, "f");
  assert_eq!(fetched.phone, "+1 555 0100");
  assert_eq!(fetched.email, "alice@example.com");
}

#[tokio::test]
async fn create_assigns_distinct_ids() {
  let s = service();
  let a = s.create(input("Alice", "f")).await.unwrap();
  let b = s.create(input("Alice", "f")).await.unwrap();
  assert_ne!(a.id, b.id);
  assert_eq!(s.store().read_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn create_appends_in_order() {
  let s = service();
  for name in ["Ann", "Bob", "Cid"] {
    s.create(input(name, "x")).await.unwrap();
  }
  let stored = s.store().read_all().await.unwrap();
  let names: Vec<_> = stored.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["Ann", "Bob", "Cid"]);
}

#[tokio::test]
async fn get_missing_is_not_found() {
  let s = service();
  let err = s.get("nope").await.unwrap_err();
  assert!(matches!(err, Error::NotFound(ref id) if id == "nope"));
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_preserves_created_at_and_advances_updated_at() {
  let s = service();
  let created = s.create(input("Alice", "f")).await.unwrap();

  tokio::time::sleep(Duration::from_millis(5)).await;
  let updated = s.update(&created.id, input("Alicia", "f")).await.unwrap();

  assert_eq!(updated.id, created.id);
  assert_eq!(updated.name, "Alicia");
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > created.updated_at);

  let fetched = s.get(&created.id).await.unwrap();
  assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_overwrites_every_detail_field() {
  let s = service();
  let created = s.create(input("Alice", "f")).await.unwrap();
  let updated = s
    .update(&created.id, ContactInput {
      name: "Alice".into(),
      ..Default::default()
    })
    .await
    .unwrap();
  assert_eq!(updated.gender, "");
  assert_eq!(updated.phone, "");
  assert_eq!(updated.email, "");
}

#[tokio::test]
async fn update_missing_is_not_found_and_leaves_store_untouched() {
  let s = service();
  s.create(input("Alice", "f")).await.unwrap();
  let before = s.store().read_all().await.unwrap();

  let err = s.update("missing", input("Bob", "m")).await.unwrap_err();
  assert!(err.is_not_found());
  assert_eq!(s.store().read_all().await.unwrap(), before);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_then_get_is_not_found() {
  let s = service();
  let keep = s.create(input("Alice", "f")).await.unwrap();
  let gone = s.create(input("Bob", "m")).await.unwrap();

  s.delete(&gone.id).await.unwrap();

  assert!(s.get(&gone.id).await.unwrap_err().is_not_found());
  assert_eq!(s.get(&keep.id).await.unwrap(), keep);
}

#[tokio::test]
async fn delete_missing_is_not_found() {
  let s = service();
  assert!(s.delete("missing").await.unwrap_err().is_not_found());
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_runs_the_query_pipeline() {
  let s = service();
  for (name, gender) in [("Dee", "f"), ("Bob", "m"), ("Ann", "f"), ("Cid", "f")] {
    s.create(input(name, gender)).await.unwrap();
  }

  let query = ListQuery {
    filter:     Filter::new().with(ContactField::Gender, "f"),
    sort:       Sort::by(ContactField::Name, SortOrder::Asc),
    pagination: Pagination::new(1, 2),
  };
  let page = s.list(&query).await.unwrap();
  let names: Vec<_> = page.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(names, ["Ann", "Cid"]);
}

#[tokio::test]
async fn list_on_empty_store_is_empty() {
  let s = service();
  assert!(s.list(&ListQuery::default()).await.unwrap().is_empty());
}

// ─── Concurrency ─────────────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_are_not_lost() {
  let s = Arc::new(service());
  let tasks: Vec<_> = (0..32)
    .map(|i| {
      let s = s.clone();
      tokio::spawn(async move { s.create(input(&format!("P{i}"), "x")).await })
    })
    .collect();
  for t in tasks {
    t.await.unwrap().unwrap();
  }
  assert_eq!(s.store().read_all().await.unwrap().len(), 32);
}
