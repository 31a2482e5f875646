use otolith_core::{
    CompactRecordFormatter, DefaultRecordFormatter, Record, RecordRepository, RepoError,
    StoreError, CSV_HEADERS,
};
use std::fs;

fn header_line() -> String {
    CSV_HEADERS.join(",")
}

#[test]
fn save_then_load_reproduces_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("otoliths.csv");

    let records = vec![
        Record::new(
            "NAFO 4T",
            "Limanda ferruginea",
            "Yellowtail Flounder",
            "Limande à queue jaune",
            "1995",
            "September",
            "17",
        ),
        Record::new("quoted, source", "", "line\nbreak", "\"q\"", "", "Mai", "0"),
        Record::new("", "", "", "", "", "", ""),
    ];
    let repo = RecordRepository::with_records(DefaultRecordFormatter, records.clone());
    assert_eq!(repo.save_to_path(&path).unwrap(), 3);

    let mut reloaded = RecordRepository::new(DefaultRecordFormatter);
    assert_eq!(reloaded.load_from_path(&path).unwrap(), 3);
    assert_eq!(reloaded.records(), records.as_slice());
}

#[test]
fn saved_file_starts_with_fixed_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    let repo = RecordRepository::new(DefaultRecordFormatter);
    assert_eq!(repo.save_to_path(&path).unwrap(), 0);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, format!("{}\n", header_line()));
}

#[test]
fn header_only_file_loads_empty_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("header_only.csv");
    fs::write(&path, format!("{}\n", header_line())).unwrap();

    let mut repo = RecordRepository::new(DefaultRecordFormatter);
    assert_eq!(repo.load_from_path(&path).unwrap(), 0);
    assert!(repo.is_empty());
}

#[test]
fn missing_file_reports_not_found_and_empties_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    let mut repo = RecordRepository::with_records(
        DefaultRecordFormatter,
        vec![Record::new("a", "b", "c", "d", "e", "f", "g")],
    );
    let err = repo.load_from_path(&path).unwrap_err();

    assert!(err.is_file_not_found());
    assert!(matches!(err, RepoError::Store(StoreError::FileNotFound(ref p)) if *p == path));
    assert!(repo.is_empty());
}

#[test]
fn parse_failure_keeps_rows_read_before_it() {
    let input = format!(
        "{}\nsrc,lat,eng,fra,2001,May,3\nbroken,row\nsrc,lat,eng,fra,2002,June,4\n",
        header_line()
    );

    let mut repo = RecordRepository::new(DefaultRecordFormatter);
    let err = repo.load_from_reader(input.as_bytes()).unwrap_err();

    assert!(matches!(err, RepoError::Store(StoreError::Csv(_))));
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.records()[0].year, "2001");
}

#[test]
fn reload_replaces_instead_of_appending() {
    let input = format!("{}\nsrc,lat,eng,fra,2001,May,3\n", header_line());
    let mut repo = RecordRepository::new(CompactRecordFormatter);

    repo.load_from_reader(input.as_bytes()).unwrap();
    repo.load_from_reader(input.as_bytes()).unwrap();

    assert_eq!(repo.len(), 1);
    assert_eq!(repo.display(0).unwrap(), "2001/May eng (lat): 3 otoliths [src]");
}

#[test]
fn save_to_writer_matches_file_layout() {
    let repo = RecordRepository::with_records(
        DefaultRecordFormatter,
        vec![Record::new("s", "l", "e", "f", "2020", "Jan", "9")],
    );
    let mut buffer = Vec::new();
    repo.save_to_writer(&mut buffer).unwrap();

    assert_eq!(
        String::from_utf8(buffer).unwrap(),
        format!("{}\ns,l,e,f,2020,Jan,9\n", header_line())
    );
}
