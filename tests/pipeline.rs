use std::fs;
use std::path::PathBuf;

use paper_explorer::data::{
    filter_by_year, load_dataset, Dataset, DatasetError, LoaderError, YearRange, UNKNOWN_JOURNAL,
};
use paper_explorer::stats::{top_journals, yearly_counts, Summary, DEFAULT_TOP_N};
use tempfile::TempDir;

const HEADER: &str = "cord_uid,sha,title,abstract,publish_time,authors,journal,source_x,url";

fn write_fixture(dir: &TempDir, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("metadata.csv");
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&path, content).expect("failed to write fixture");
    path
}

#[test]
fn csv_to_summaries() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        &[
            "u1,s1,A,one two three,2020-01-01,\"Doe, J.\",J1,PMC,http://a",
            "u2,s2,B,,not-a-date,,J2,PMC,",
            "u3,s3,,orphan,2021-05-01,,J1,Medline,",
            "u4,s4,D,four words in here,2019,,,WHO,",
            "u5,s5,E,,2019-07-15,,J1,PMC,",
            "u6,s6,F,a b,,,J1,PMC,",
        ],
    );

    let dataset = Dataset::build(&path).expect("dataset build failed");

    assert_eq!(dataset.raw_overview.rows, 6);
    assert_eq!(dataset.raw_overview.columns.len(), 9);
    assert_eq!(dataset.cleaning.rows_in, 6);
    assert_eq!(dataset.cleaning.dropped_missing, 2);
    assert_eq!(dataset.cleaning.dropped_unparseable_date, 1);
    assert_eq!(dataset.cleaning.rows_out, 3);

    let titles: Vec<&str> = dataset
        .table
        .records()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["A", "D", "E"]);

    let a = &dataset.table.records()[0];
    assert_eq!(a.year, 2020);
    assert_eq!(a.abstract_word_count, 3);
    assert_eq!(a.authors.as_deref(), Some("Doe, J."));

    let d = &dataset.table.records()[1];
    assert_eq!(d.journal, UNKNOWN_JOURNAL);
    assert_eq!(d.abstract_word_count, 4);

    let e = &dataset.table.records()[2];
    assert_eq!(e.abstract_text, "");
    assert_eq!(e.abstract_word_count, 0);

    for paper in dataset.table.records() {
        assert!(!paper.title.is_empty());
        assert_eq!(
            paper.abstract_word_count,
            paper.abstract_text.split_whitespace().count()
        );
    }

    let summary = Summary::compute(&dataset.table, DEFAULT_TOP_N);
    assert_eq!(
        summary
            .yearly_counts
            .iter()
            .map(|c| (c.year, c.count))
            .collect::<Vec<_>>(),
        vec![(2019, 2), (2020, 1)]
    );
    assert_eq!(summary.top_journals[0].journal, "J1");
    assert_eq!(summary.top_journals[0].count, 2);
    assert_eq!(summary.top_journals[1].journal, UNKNOWN_JOURNAL);

    let only_2019 = filter_by_year(&dataset.table, YearRange::new(2019, 2019));
    assert_eq!(only_2019.len(), 2);
    let counts = yearly_counts(&only_2019);
    assert_eq!(counts.iter().map(|c| c.count).sum::<usize>(), only_2019.len());
    assert!(top_journals(&only_2019, 1).len() <= 1);
}

#[test]
fn missing_required_column_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("metadata.csv");
    fs::write(&path, "title,publish_time\nA,2020-01-01\n").unwrap();

    let err = Dataset::build(&path).unwrap_err();
    assert!(matches!(err, DatasetError::Clean(_)));
}

#[test]
fn memoized_dataset_is_built_once() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, &["u1,s1,A,x y,2020-01-01,,J1,PMC,"]);

    let missing = dir.path().join("nope.csv");
    assert!(matches!(
        load_dataset(&missing),
        Err(DatasetError::Load(LoaderError::FileNotFound(_)))
    ));

    let first = load_dataset(&path).expect("first load failed");
    let second = load_dataset(&path).expect("second load failed");
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.table.len(), 1);
}
