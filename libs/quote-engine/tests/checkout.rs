use async_trait::async_trait;
use mesh_volume::primitives::{cube, cube_at};
use quote_engine::boundary::parse_display_name;
use quote_engine::{
    compute_quote, quote_batch, ArtifactStore, InMemoryArtifactStore, MaterialProfile,
    QuoteBoundary, QuoteError, QuoteRequest, StorageError, Upload,
};
use stl_decoder::encode;

fn unit_cube_bytes() -> Vec<u8> {
    encode(&cube(10.0), "unit cube").unwrap()
}

fn upload<'a>(bytes: &'a [u8], material: &'a str) -> Upload<'a> {
    Upload {
        raw_bytes: bytes,
        file_name: "cube.stl",
        material,
        quantity: None,
        preview_total: None,
    }
}

struct UnavailableStore;

#[async_trait]
impl ArtifactStore for UnavailableStore {
    async fn store(&self, unique_name: &str, _bytes: &[u8]) -> Result<String, StorageError> {
        Err(StorageError::Backend {
            name: unique_name.to_string(),
            message: "bucket offline".to_string(),
        })
    }
}

#[test]
fn preview_and_submission_agree_bit_for_bit() {
    let bytes = encode(&cube_at(glam::Vec3::new(0.3, 1.7, -2.2), 13.1), "").unwrap();
    let boundary = QuoteBoundary::default();
    for material in ["PLA", "PETG", "RESIN", "mystery"] {
        let preview = compute_quote(&bytes, material).unwrap();
        let submitted = boundary.quote(&bytes, material).unwrap();
        assert_eq!(
            preview.total_price().to_bits(),
            submitted.total_price().to_bits()
        );
        assert_eq!(preview.volume_cm3().to_bits(), submitted.volume_cm3().to_bits());
    }
}

#[tokio::test]
async fn resin_cube_becomes_a_line_item() {
    let bytes = unit_cube_bytes();
    let store = InMemoryArtifactStore::new("memory://uploads");
    let boundary = QuoteBoundary::default();

    let mut request = upload(&bytes, "RESIN");
    request.quantity = Some(2);
    request.preview_total = Some(16.7);
    let finalized = boundary.finalize_upload(&store, request).await.unwrap();

    assert_eq!(finalized.quote.total_price(), 16.7);
    assert_eq!(finalized.line_item.unit_amount_minor_units(), 1670);
    assert_eq!(finalized.line_item.quantity().get(), 2);
    assert_eq!(finalized.line_item.identifier(), finalized.artifact.unique_name);
    assert_eq!(
        finalized.line_item.description(),
        format!("STL: {}", finalized.artifact.url)
    );
    assert!(finalized.price_drift.is_none());
    assert_eq!(store.get(&finalized.artifact.unique_name), Some(bytes));

    let parts = parse_display_name(finalized.line_item.display_name());
    assert_eq!(parts.volume_cm3, Some(1.0));
    assert_eq!(parts.material, MaterialProfile::Resin);
}

#[tokio::test]
async fn same_file_twice_gets_distinct_artifacts() {
    let bytes = unit_cube_bytes();
    let store = InMemoryArtifactStore::new("memory://uploads");
    let boundary = QuoteBoundary::default();

    let first = boundary
        .finalize_upload(&store, upload(&bytes, "PLA"))
        .await
        .unwrap();
    let second = boundary
        .finalize_upload(&store, upload(&bytes, "PLA"))
        .await
        .unwrap();

    assert_ne!(first.artifact.unique_name, second.artifact.unique_name);
    assert_ne!(first.line_item.identifier(), second.line_item.identifier());
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn truncated_upload_stores_nothing() {
    let mut bytes = unit_cube_bytes();
    bytes.truncate(84 + 50 * 3 + 10);
    let store = InMemoryArtifactStore::new("memory://uploads");
    let boundary = QuoteBoundary::default();

    let err = boundary
        .finalize_upload(&store, upload(&bytes, "PLA"))
        .await
        .unwrap_err();

    assert!(matches!(err, QuoteError::MalformedMesh(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn invalid_quantity_stores_nothing() {
    let bytes = unit_cube_bytes();
    let store = InMemoryArtifactStore::new("memory://uploads");
    let boundary = QuoteBoundary::default();

    for quantity in [0, -3] {
        let mut request = upload(&bytes, "PLA");
        request.quantity = Some(quantity);
        let err = boundary.finalize_upload(&store, request).await.unwrap_err();
        assert!(matches!(err, QuoteError::InvalidQuantity(_)));
    }
    assert!(store.is_empty());
}

#[tokio::test]
async fn tampered_preview_is_reported_not_trusted() {
    let bytes = unit_cube_bytes();
    let store = InMemoryArtifactStore::new("memory://uploads");
    let boundary = QuoteBoundary::default();

    let mut request = upload(&bytes, "RESIN");
    request.preview_total = Some(0.5);
    let finalized = boundary.finalize_upload(&store, request).await.unwrap();

    let drift = finalized.price_drift.unwrap();
    assert_eq!(drift.client_total, 0.5);
    assert_eq!(drift.authoritative_total, 16.7);
    assert_eq!(finalized.line_item.unit_amount_minor_units(), 1670);
}

#[tokio::test]
async fn unknown_material_is_priced_as_pla_and_flagged() {
    let bytes = unit_cube_bytes();
    let store = InMemoryArtifactStore::new("memory://uploads");
    let boundary = QuoteBoundary::default();

    let finalized = boundary
        .finalize_upload(&store, upload(&bytes, "carbon"))
        .await
        .unwrap();

    assert_eq!(finalized.quote.material(), MaterialProfile::Pla);
    assert_eq!(finalized.quote.material_fallback().unwrap().key, "carbon");
    assert_eq!(finalized.quote.total_price(), 15.85);
}

#[tokio::test]
async fn storage_failure_yields_no_line_item() {
    let bytes = unit_cube_bytes();
    let boundary = QuoteBoundary::default();

    let err = boundary
        .finalize_upload(&UnavailableStore, upload(&bytes, "PLA"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        QuoteError::Storage(StorageError::Backend { .. })
    ));
}

#[test]
fn batch_keeps_request_order() {
    let good = unit_cube_bytes();
    let bad = vec![0u8; 10];
    let requests = [
        QuoteRequest {
            raw_bytes: &good,
            material: "PLA",
        },
        QuoteRequest {
            raw_bytes: &bad,
            material: "PLA",
        },
        QuoteRequest {
            raw_bytes: &good,
            material: "RESIN",
        },
    ];

    let results = quote_batch(&config::RateTable::default(), &requests);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().total_price(), 15.85);
    assert!(matches!(results[1], Err(QuoteError::MalformedMesh(_))));
    assert_eq!(results[2].as_ref().unwrap().total_price(), 16.7);
}

#[test]
fn unpersisted_line_item_validates_quantity() {
    let boundary = QuoteBoundary::default();
    let quote = boundary.quote(&unit_cube_bytes(), "PETG").unwrap();

    let item = boundary.line_item(&quote, "cube.stl", Some(4)).unwrap();
    assert_eq!(item.quantity().get(), 4);
    assert_eq!(item.unit_amount_minor_units(), quote.total_minor_units());

    assert!(matches!(
        boundary.line_item(&quote, "cube.stl", Some(0)),
        Err(QuoteError::InvalidQuantity(_))
    ));
}

#[tokio::test]
async fn unpayable_total_is_rejected_before_storage() {
    // 10 km cube: 1e18 cm³, a PLA total of 8.5e19 cents
    let bytes = encode(&cube(1.0e7), "").unwrap();
    let err = compute_quote(&bytes, "PLA").unwrap_err();
    assert!(matches!(err, QuoteError::AmountOutOfRange(_)));

    let store = InMemoryArtifactStore::new("memory://uploads");
    let err = QuoteBoundary::default()
        .finalize_upload(&store, upload(&bytes, "PLA"))
        .await
        .unwrap_err();

    assert!(matches!(err, QuoteError::AmountOutOfRange(_)));
    assert!(store.is_empty());
}

#[tokio::test]
async fn overflowing_order_total_stores_nothing() {
    let bytes = encode(&cube(1.0e6), "").unwrap();
    let store = InMemoryArtifactStore::new("memory://uploads");
    let boundary = QuoteBoundary::default();

    let quote = boundary.quote(&bytes, "PLA").unwrap();
    assert!(boundary.line_item(&quote, "cube.stl", Some(1)).is_ok());
    assert!(matches!(
        boundary.line_item(&quote, "cube.stl", Some(1_000_000)),
        Err(QuoteError::AmountOutOfRange(_))
    ));

    let mut request = upload(&bytes, "PLA");
    request.quantity = Some(1_000_000);
    let err = boundary.finalize_upload(&store, request).await.unwrap_err();

    assert!(matches!(err, QuoteError::AmountOutOfRange(_)));
    assert!(store.is_empty());
}
