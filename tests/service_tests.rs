use image::{ImageFormat, RgbImage};
use scrapbook::collection::MemoryCollection;
use scrapbook::error::ScrapbookError;
use scrapbook::model::PhotoFile;
use scrapbook::service::MemoryService;
use scrapbook::storage::InMemoryBackend;
use scrapbook::validation::{MAX_PHOTO_BYTES, MemoryDraft};
use std::io::Cursor;
use std::sync::Arc;

fn photo(name: &str, width: u32, height: u32) -> PhotoFile {
    let mut bytes = Vec::new();
    RgbImage::from_pixel(width, height, image::Rgb([240, 180, 190]))
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    PhotoFile::new(name, "image/png", bytes)
}

fn draft(photo: PhotoFile, caption: &str, location: Option<&str>) -> MemoryDraft {
    MemoryDraft::new(Some(photo), caption, location, MAX_PHOTO_BYTES).unwrap()
}

fn setup() -> (Arc<InMemoryBackend>, MemoryService) {
    let backend = Arc::new(InMemoryBackend::new());
    let service = MemoryService::new(backend.clone(), backend.clone());
    (backend, service)
}

// =============================================================================
// Add
// =============================================================================

#[tokio::test]
async fn test_add_memory_then_list_shows_it_first() {
    let (backend, service) = setup();
    service
        .add_memory(draft(photo("old.png", 50, 50), "Older", None))
        .await
        .unwrap();

    let memory = service
        .add_memory(draft(photo("a.png", 64, 48), "First date", Some("Paris")))
        .await
        .unwrap();

    assert_eq!(memory.caption, "First date");
    assert_eq!(memory.location.as_deref(), Some("Paris"));
    assert!(!memory.photo_url.is_empty());
    assert!(backend.uploaded_urls().contains(&memory.photo_url));

    let listed = service.list_memories().await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, memory.id);
}

#[tokio::test]
async fn test_add_memory_without_location_stores_none() {
    let (_, service) = setup();
    let memory = service
        .add_memory(draft(photo("a.png", 10, 10), "Picnic", Some("   ")))
        .await
        .unwrap();
    assert_eq!(memory.location, None);
}

#[tokio::test]
async fn test_uploaded_photo_is_compressed() {
    let (backend, service) = setup();
    let memory = service
        .add_memory(draft(photo("wide.png", 2400, 1000), "Panorama", None))
        .await
        .unwrap();

    let stored = backend.object(&memory.photo_url).unwrap();
    let img = image::load_from_memory(&stored).unwrap();
    assert_eq!((img.width(), img.height()), (1200, 500));
    assert_eq!(
        image::guess_format(&stored).unwrap(),
        ImageFormat::Jpeg
    );
}

#[tokio::test]
async fn test_empty_caption_rejected_before_upload() {
    let (backend, _service) = setup();

    let result = MemoryDraft::new(Some(photo("b.png", 10, 10)), "", None, MAX_PHOTO_BYTES);

    assert!(matches!(result, Err(ScrapbookError::Validation(_))));
    assert_eq!(backend.upload_attempts(), 0);
    assert_eq!(backend.record_count(), 0);
}

#[tokio::test]
async fn test_upload_failure_leaves_no_record() {
    let (backend, service) = setup();
    backend.fail_uploads(true);

    let err = service
        .add_memory(draft(photo("c.png", 10, 10), "Lost photo", None))
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapbookError::UploadFailed(_)));
    assert_eq!(backend.upload_attempts(), 1);
    assert_eq!(backend.record_count(), 0);
    assert!(service.list_memories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_failure_orphans_uploaded_photo() {
    let (backend, service) = setup();
    backend.fail_creates(true);

    let err = service
        .add_memory(draft(photo("d.png", 10, 10), "Orphan", None))
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapbookError::Record(_)));
    assert_eq!(backend.object_count(), 1);
    assert_eq!(backend.record_count(), 0);
}

#[tokio::test]
async fn test_undecodable_photo_never_uploaded() {
    let (backend, service) = setup();
    let garbage = PhotoFile::new("fake.jpg", "image/jpeg", b"GIF89a but not really".to_vec());

    let err = service
        .add_memory(draft(garbage, "Broken", None))
        .await
        .unwrap_err();

    assert!(matches!(err, ScrapbookError::Decode(_)));
    assert_eq!(backend.upload_attempts(), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_adds_both_persist() {
    let (_, service) = setup();

    let first = tokio::spawn({
        let service = service.clone();
        async move {
            service
                .add_memory(draft(photo("e.png", 30, 30), "Beach", None))
                .await
        }
    });
    let second = tokio::spawn({
        let service = service.clone();
        async move {
            service
                .add_memory(draft(photo("f.png", 30, 30), "Mountains", None))
                .await
        }
    });

    let first = first.await.unwrap().unwrap();
    let second = second.await.unwrap().unwrap();

    let listed = service.list_memories().await.unwrap();
    let ids: Vec<_> = listed.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(listed.len(), 2);
    assert!(ids.contains(&first.id.as_str()));
    assert!(ids.contains(&second.id.as_str()));
    assert!(listed[0].created_at >= listed[1].created_at);
}

// =============================================================================
// List and remove
// =============================================================================

#[tokio::test]
async fn test_list_is_newest_first() {
    let (_, service) = setup();
    for caption in ["one", "two", "three", "four"] {
        service
            .add_memory(draft(photo("p.png", 8, 8), caption, None))
            .await
            .unwrap();
    }

    let listed = service.list_memories().await.unwrap();
    assert!(listed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
    assert_eq!(listed[0].caption, "four");
}

#[tokio::test]
async fn test_list_empty_is_ok() {
    let (_, service) = setup();
    assert!(service.list_memories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_remove_memory_keeps_photo() {
    let (backend, service) = setup();
    let memory = service
        .add_memory(draft(photo("g.png", 8, 8), "Gone soon", None))
        .await
        .unwrap();

    service.remove_memory(&memory.id).await.unwrap();

    let listed = service.list_memories().await.unwrap();
    assert!(listed.iter().all(|m| m.id != memory.id));
    assert_eq!(backend.object_count(), 1);
}

#[tokio::test]
async fn test_remove_unknown_id_succeeds() {
    let (_, service) = setup();
    service.remove_memory("does-not-exist").await.unwrap();
}

// =============================================================================
// Client-side collection
// =============================================================================

#[tokio::test]
async fn test_collection_is_stale_until_reload() {
    let (_, service) = setup();
    let mut collection = MemoryCollection::new();
    collection.reload(&service).await.unwrap();
    assert!(collection.is_loaded());
    assert!(collection.is_empty());

    let mine = collection
        .add(&service, draft(photo("h.png", 8, 8), "Mine", None))
        .await
        .unwrap()
        .clone();
    assert_eq!(collection.memories()[0].id, mine.id);

    // Another surface adds directly through the service
    let theirs = service
        .add_memory(draft(photo("i.png", 8, 8), "Theirs", None))
        .await
        .unwrap();
    assert!(!collection.contains(&theirs.id));
    assert_eq!(collection.len(), 1);
    assert_eq!(service.list_memories().await.unwrap().len(), 2);

    collection.reload(&service).await.unwrap();
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.memories()[0].id, theirs.id);
}

#[tokio::test]
async fn test_collection_remove_is_optimistic() {
    let (_, service) = setup();
    let mut collection = MemoryCollection::new();
    let memory = collection
        .add(&service, draft(photo("j.png", 8, 8), "Bye", None))
        .await
        .unwrap()
        .clone();

    collection.remove(&service, &memory.id).await.unwrap();
    assert!(!collection.contains(&memory.id));
    assert!(service.list_memories().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_collection_unchanged_when_add_fails() {
    let (backend, service) = setup();
    let mut collection = MemoryCollection::new();
    backend.fail_uploads(true);

    let result = collection
        .add(&service, draft(photo("k.png", 8, 8), "Nope", None))
        .await;

    assert!(result.is_err());
    assert!(collection.is_empty());
}
