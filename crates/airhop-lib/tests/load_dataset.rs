mod common;

use airhop_lib::{
    AirportDirectory, AirportSource, CachedAirportDirectory, CsvDataset, Error, RouteSource,
};
use tempfile::tempdir;

use common::fixtures_dir;

#[test]
fn loads_fixture_dataset() {
    let dataset = CsvDataset::open(fixtures_dir()).expect("fixture dataset present");

    let airports = dataset.load_airports().expect("airports load");
    assert_eq!(airports.len(), 10);
    let kuressaare = airports
        .iter()
        .find(|airport| airport.id == "6134")
        .expect("Kuressaare present");
    assert!(kuressaare.has_unknown_code());
    assert_eq!(kuressaare.code(), "EEKE");

    let routes = dataset.fetch_routes().expect("routes load");
    assert_eq!(routes.len(), 17);
    assert_eq!(routes[0].source_code, "TLL");
    assert_eq!(routes[0].destination_code, "HEL");
    assert_eq!(routes[0].stops, 0);
}

#[test]
fn cached_directory_indexes_every_code_form() {
    let dataset = CsvDataset::open(fixtures_dir()).expect("fixture dataset present");
    let directory = CachedAirportDirectory::new(dataset);

    let index = directory.resolve_all().expect("airports resolve");
    let again = directory.resolve_all().expect("airports resolve");
    assert!(std::sync::Arc::ptr_eq(&index, &again));

    assert_eq!(index.get("RIX").map(|a| a.id.as_str()), Some("3953"));
    assert_eq!(index.get("EVRA").map(|a| a.id.as_str()), Some("3953"));
    assert_eq!(index.get("3953").map(|a| a.id.as_str()), Some("3953"));
    assert!(index.get("\\N").is_none());
}

#[test]
fn missing_dataset_directory_is_reported() {
    let dir = tempdir().expect("tempdir");
    let error = CsvDataset::open(dir.path()).expect_err("no files present");
    assert!(matches!(error, Error::DatasetNotFound { .. }));
}
