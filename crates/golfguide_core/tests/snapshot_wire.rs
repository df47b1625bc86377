use golfguide_core::{build_sample_catalog, BaseUriResolver, CatalogSnapshot, ImageRef};

#[test]
fn snapshot_serializes_expected_wire_fields() {
    let catalog = build_sample_catalog().unwrap();
    let resolver = BaseUriResolver::new("https://cdn.example.com/golf/").unwrap();

    let snapshot = CatalogSnapshot::capture(&catalog, &resolver);
    let json = serde_json::to_value(&snapshot).unwrap();

    let group = &json["groups"][0];
    assert_eq!(group["unique_id"], "Group-1");
    assert_eq!(group["title"], "Golf Directions");
    assert_eq!(group["image"], "https://cdn.example.com/golf/Assets/10.jpg");
    assert_eq!(group["top_item_ids"][0], "Big-Group-1-Item1");

    let item = &group["items"][1];
    assert_eq!(item["unique_id"], "Small-Group-1-Item2");
    assert_eq!(item["col_span"], 53);
    assert_eq!(item["row_span"], 49);
    assert_eq!(item["group_id"], "Group-1");
    assert_eq!(item["image"], "https://cdn.example.com/golf/Assets/12.jpg");

    let decoded: CatalogSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, snapshot);
    assert_eq!(decoded.item_count(), 12);
}

#[test]
fn capturing_resolves_and_caches_images() {
    let catalog = build_sample_catalog().unwrap();
    let group = catalog.find_group("Group-2").unwrap();
    assert_eq!(group.image_ref(), ImageRef::Path("Assets/20.jpg".to_string()));

    let resolver = BaseUriResolver::new("https://cdn.example.com/").unwrap();
    CatalogSnapshot::capture(&catalog, &resolver);

    assert!(matches!(group.image_ref(), ImageRef::Resolved(_)));
}
