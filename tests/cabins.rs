mod common;

use common::{hotel, FakeBackend, BASE_URL};
use oasis_admin::api::{FileUpload, Filter, Operation};
use oasis_admin::models::{CabinDraft, CabinImage};
use oasis_admin::repository::CabinRepository;
use oasis_admin::DashboardError;
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn repository(backend: &Arc<FakeBackend>) -> CabinRepository {
    CabinRepository::new(backend.clone(), backend.clone())
}

fn draft(image: CabinImage) -> CabinDraft {
    CabinDraft {
        name: "003".to_string(),
        max_capacity: 6,
        regular_price: 500.0,
        discount: 40.0,
        description: "Family cabin".to_string(),
        image,
    }
}

fn new_file(name: &str) -> CabinImage {
    CabinImage::Upload(FileUpload::new(name, "image/jpeg", vec![0xff, 0xd8, 0xff]))
}

#[tokio::test]
async fn test_list_cabins_is_mapped() {
    let backend = Arc::new(hotel());

    let cabins = repository(&backend).list_cabins().await.unwrap();

    assert_eq!(cabins.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(), vec!["001", "002"]);
    assert_eq!(cabins[0].max_capacity, Some(4));
    assert_eq!(cabins[0].regular_price, Some(350.0));
    assert!(cabins[0].created_at.is_some());
}

#[tokio::test]
async fn test_list_failure() {
    let backend = Arc::new(hotel());
    backend.fail_selects.store(true, Ordering::SeqCst);

    let err = repository(&backend).list_cabins().await.unwrap_err();

    assert_eq!(err, DashboardError::Fetch("Cabins could not be loaded".to_string()));
}

#[tokio::test]
async fn test_new_file_inserts_one_row_then_uploads_one_asset() {
    let backend = Arc::new(hotel());

    let cabin = repository(&backend)
        .create_or_edit_cabin(draft(new_file("cabin-003.jpg")), None)
        .await
        .unwrap();

    let operations = backend.operations();
    assert_eq!(operations.len(), 1);
    assert!(matches!(operations[0], Operation::Insert { .. }));

    let uploads = backend.upload_names();
    assert_eq!(uploads.len(), 1);
    assert!(uploads[0].ends_with("-cabin-003.jpg"));

    let expected_url = format!("{}/storage/v1/object/public/cabin-images/{}", BASE_URL, uploads[0]);
    assert_eq!(cabin.image.as_deref(), Some(expected_url.as_str()));
    let stored = backend.row("cabins", cabin.id).unwrap();
    assert_eq!(stored["image"], json!(expected_url));
    assert_eq!(stored["max_capacity"], json!(6));
    assert_eq!(stored["regular_price"], json!(500.0));
}

#[tokio::test]
async fn test_failed_upload_removes_the_inserted_row() {
    let backend = Arc::new(hotel());
    backend.fail_uploads.store(true, Ordering::SeqCst);

    let err = repository(&backend)
        .create_or_edit_cabin(draft(new_file("cabin-003.jpg")), None)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DashboardError::Upload("Cabin image could not be uploaded and the cabin was not created".to_string())
    );
    assert_eq!(backend.rows("cabins").len(), 2);
    assert!(backend.rows("cabins").iter().all(|row| row["name"] != json!("003")));

    let operations = backend.operations();
    assert_eq!(operations.len(), 2);
    assert!(matches!(operations[1], Operation::Delete { .. }));
}

#[tokio::test]
async fn test_failed_compensation_surfaces_the_upload_error() {
    let backend = Arc::new(hotel());
    backend.fail_uploads.store(true, Ordering::SeqCst);
    backend.fail_deletes.store(true, Ordering::SeqCst);

    let err = repository(&backend)
        .create_or_edit_cabin(draft(new_file("cabin-003.jpg")), None)
        .await
        .unwrap_err();

    assert!(matches!(err, DashboardError::Upload(_)));
    // The orphaned row is left behind
    assert_eq!(backend.rows("cabins").len(), 3);
}

#[tokio::test]
async fn test_stored_url_updates_row_and_reuses_url() {
    let backend = Arc::new(hotel());
    backend.seed("cabins", vec![common::cabin_row(5, "005")]);
    let url = format!("{}/storage/v1/object/public/cabin-images/cabin-005.jpg", BASE_URL);

    let cabin = repository(&backend)
        .create_or_edit_cabin(draft(CabinImage::Stored(url.clone())), Some(5))
        .await
        .unwrap();

    assert_eq!(cabin.id, 5);
    assert_eq!(cabin.image.as_deref(), Some(url.as_str()));
    assert!(backend.upload_names().is_empty());
    match &backend.operations()[0] {
        Operation::Update { filter, data, .. } => {
            assert_eq!(*filter, Filter::eq("id", 5i64));
            assert_eq!(data["image"], json!(url));
            assert_eq!(data["name"], json!("003"));
        }
        other => panic!("expected an update, got {:?}", other),
    }
}

#[tokio::test]
async fn test_edit_with_new_file_uploads_after_update() {
    let backend = Arc::new(hotel());

    let cabin = repository(&backend)
        .create_or_edit_cabin(draft(new_file("new/../photo.jpg")), Some(2))
        .await
        .unwrap();

    assert_eq!(cabin.id, 2);
    let uploads = backend.upload_names();
    assert_eq!(uploads.len(), 1);
    assert!(!uploads[0].contains('/'));
    assert!(uploads[0].ends_with("-new..photo.jpg"));
}

#[tokio::test]
async fn test_failed_insert_uploads_nothing() {
    let backend = Arc::new(hotel());
    backend.fail_writes.store(true, Ordering::SeqCst);

    let err = repository(&backend)
        .create_or_edit_cabin(draft(new_file("cabin-003.jpg")), None)
        .await
        .unwrap_err();

    assert_eq!(err, DashboardError::Update("Cabin could not be created".to_string()));
    assert!(backend.upload_names().is_empty());
}

#[tokio::test]
async fn test_failed_edit_message() {
    let backend = Arc::new(hotel());
    backend.fail_writes.store(true, Ordering::SeqCst);

    let err = repository(&backend)
        .create_or_edit_cabin(draft(new_file("cabin-003.jpg")), Some(1))
        .await
        .unwrap_err();

    assert_eq!(err.message(), "Cabin could not be updated");
}

#[tokio::test]
async fn test_duplicate_reuses_image() {
    let backend = Arc::new(hotel());

    let copy = repository(&backend).duplicate_cabin(1).await.unwrap();

    assert_eq!(copy.name, "Copy of 001");
    assert_ne!(copy.id, 1);
    assert_eq!(copy.image, backend.row("cabins", 1).unwrap()["image"].as_str().map(String::from));
    assert!(backend.upload_names().is_empty());
}

#[tokio::test]
async fn test_delete_cabin() {
    let backend = Arc::new(hotel());

    repository(&backend).delete_cabin(2).await.unwrap();

    assert!(backend.row("cabins", 2).is_none());
}

#[tokio::test]
async fn test_delete_failure() {
    let backend = Arc::new(hotel());
    backend.fail_deletes.store(true, Ordering::SeqCst);

    let err = repository(&backend).delete_cabin(2).await.unwrap_err();

    assert_eq!(err, DashboardError::Delete("Cabin could not be deleted".to_string()));
}
