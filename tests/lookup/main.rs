//! Integration tests for the paginated nutrition lookup
//!
//! These tests drive the public scanner API over synthetic paginated sources
//! and check the stopping rules and ordering guarantees of a lookup.

use std::sync::Mutex;

use health_tracker::app::{LookupOutcome, LookupScanner, PageFetcher};
use health_tracker::errors::{FetchError, FetchResult};

/// One page of a synthetic source
enum Page {
    Rows(Vec<Vec<&'static str>>),
    Fail(&'static str),
}

/// Pages served in order; anything past the end is an empty page
struct SyntheticSource {
    pages: Vec<Page>,
    endless_filler: bool,
    requested: Mutex<Vec<u32>>,
}

impl SyntheticSource {
    fn new(pages: Vec<Page>) -> Self {
        Self {
            pages,
            endless_filler: false,
            requested: Mutex::new(Vec::new()),
        }
    }

    /// A source that never runs out of non-matching rows
    fn endless() -> Self {
        Self {
            pages: Vec::new(),
            endless_filler: true,
            requested: Mutex::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<u32> {
        self.requested.lock().unwrap().clone()
    }
}

impl PageFetcher for SyntheticSource {
    async fn fetch(&self, page_index: u32) -> FetchResult<String> {
        self.requested.lock().unwrap().push(page_index);

        match self.pages.get(page_index as usize - 1) {
            Some(Page::Rows(rows)) => Ok(render(rows)),
            Some(Page::Fail(message)) => Err(FetchError::Transport(message.to_string())),
            None if self.endless_filler => Ok(render(&[vec!["Вода", "0"]])),
            None => Ok(render(&[])),
        }
    }
}

fn render(rows: &[Vec<&str>]) -> String {
    let body: String = rows
        .iter()
        .map(|cells| {
            let tds: String = cells.iter().map(|c| format!("<td>{}</td>", c)).collect();
            format!("<tr>{}</tr>", tds)
        })
        .collect();

    format!(
        "<html><body><table><thead><tr><th>Продукт</th><th>Ккал</th></tr></thead><tbody>{}</tbody></table></body></html>",
        body
    )
}

fn scanner(source: SyntheticSource) -> LookupScanner<SyntheticSource> {
    LookupScanner::new(source).unwrap()
}

#[tokio::test]
async fn test_first_row_wins_within_page() {
    let scanner = scanner(SyntheticSource::new(vec![Page::Rows(vec![
        vec!["Хліб білий", "250", "8", "45", "3"],
        vec!["Хліб житній", "210", "7", "40", "2"],
    ])]));

    match scanner.lookup("хліб").await {
        LookupOutcome::Found(record) => {
            assert_eq!(record.name, "Хліб білий");
            assert_eq!(record.calories_per_100g, "250");
            assert_eq!(record.protein_g, "8");
            assert_eq!(record.carbs_g, "45");
            assert_eq!(record.fat_g, "3");
            assert_eq!(record.fiber_g, "—");
        }
        other => panic!("Expected Found, got {:?}", other),
    }
    assert_eq!(scanner.fetcher().requested(), vec![1]);
}

#[tokio::test]
async fn test_earlier_partial_match_beats_later_exact_match() {
    let scanner = scanner(SyntheticSource::new(vec![
        Page::Rows(vec![
            vec!["Молоко", "42"],
            vec!["Сир твердий", "350"],
        ]),
        Page::Rows(vec![vec!["Сир", "300"]]),
    ]));

    let outcome = scanner.lookup("сир").await;
    assert_eq!(outcome.record().unwrap().name, "Сир твердий");
    assert_eq!(scanner.fetcher().requested(), vec![1]);
}

#[tokio::test]
async fn test_match_on_later_page() {
    let scanner = scanner(SyntheticSource::new(vec![
        Page::Rows(vec![vec!["Молоко", "42"]]),
        Page::Rows(vec![vec!["Гречка", "313"], vec!["Гречка зелена", "310"]]),
    ]));

    let outcome = scanner.lookup("гречка").await;
    assert_eq!(outcome.record().unwrap().calories_per_100g, "313");
    assert_eq!(scanner.fetcher().requested(), vec![1, 2]);
}

#[tokio::test]
async fn test_not_found_after_empty_page() {
    let scanner = scanner(SyntheticSource::new(vec![
        Page::Rows(vec![vec!["Молоко", "42"]]),
        Page::Rows(vec![vec!["Яйце", "155"]]),
    ]));

    assert_eq!(scanner.lookup("ананас").await, LookupOutcome::NotFound);
    assert_eq!(scanner.fetcher().requested(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_empty_first_page_fetches_once() {
    let scanner = scanner(SyntheticSource::new(vec![]));

    assert_eq!(scanner.lookup("будь-що").await, LookupOutcome::NotFound);
    assert_eq!(scanner.fetcher().requested(), vec![1]);
}

#[tokio::test]
async fn test_two_cell_row_does_not_fail() {
    let scanner = scanner(SyntheticSource::new(vec![Page::Rows(vec![vec![
        "Яблуко", "52",
    ]])]));

    match scanner.lookup("ябл").await {
        LookupOutcome::Found(record) => {
            assert_eq!(record.calories_per_100g, "52");
            assert_eq!(record.protein_g, "");
            assert_eq!(record.carbs_g, "");
            assert_eq!(record.fat_g, "");
            assert_eq!(record.fiber_g, "—");
        }
        other => panic!("Expected Found, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failure_stops_pagination() {
    let scanner = scanner(SyntheticSource::new(vec![
        Page::Rows(vec![vec!["Молоко", "42"]]),
        Page::Rows(vec![vec!["Яйце", "155"]]),
        Page::Fail("connection timed out"),
        Page::Rows(vec![vec!["Ананас", "52"]]),
    ]));

    assert_eq!(
        scanner.lookup("ананас").await,
        LookupOutcome::TransportError("connection timed out".to_string())
    );
    assert_eq!(scanner.fetcher().requested(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_matching_ignores_case_and_whitespace() {
    let scanner = scanner(SyntheticSource::new(vec![Page::Rows(vec![vec![
        " Яблуко ", "52", "0.4", "9.8", "0.4", "2.4",
    ]])]));

    let outcome = scanner.lookup("ЯБЛУКО").await;
    let record = outcome.record().unwrap();
    assert_eq!(record.name, "Яблуко");
    assert_eq!(record.fiber_g, "2.4");
}

#[tokio::test]
async fn test_matching_uses_cell_text_not_display_name() {
    let scanner = scanner(SyntheticSource::new(vec![Page::Rows(vec![vec![
        "ßmoothie", "52",
    ]])]));

    let outcome = scanner.lookup("ßmoothie").await;
    assert!(outcome.is_found());
    assert_eq!(outcome.record().unwrap().calories_per_100g, "52");
}

#[tokio::test]
async fn test_short_rows_are_skipped() {
    let scanner = scanner(SyntheticSource::new(vec![Page::Rows(vec![
        vec!["Хлібобулочні вироби"],
        vec!["Хліб білий", "250"],
    ])]));

    let outcome = scanner.lookup("хліб").await;
    assert_eq!(outcome.record().unwrap().name, "Хліб білий");
}

#[tokio::test]
async fn test_page_of_only_short_rows_is_not_the_end() {
    let scanner = scanner(SyntheticSource::new(vec![
        Page::Rows(vec![vec!["Розділ"]]),
        Page::Rows(vec![vec!["Кефір", "53"]]),
    ]));

    let outcome = scanner.lookup("кефір").await;
    assert!(outcome.is_found());
    assert_eq!(scanner.fetcher().requested(), vec![1, 2]);
}

#[tokio::test]
async fn test_page_bound_stops_endless_source() {
    let scanner = scanner(SyntheticSource::endless()).with_max_pages(5);

    assert_eq!(scanner.lookup("ананас").await, LookupOutcome::NotFound);
    assert_eq!(scanner.fetcher().requested(), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_lookups_do_not_share_state() {
    let scanner = scanner(SyntheticSource::new(vec![
        Page::Rows(vec![vec!["Молоко", "42"]]),
        Page::Rows(vec![vec!["Яйце", "155"]]),
    ]));

    assert!(scanner.lookup("яйце").await.is_found());
    assert!(scanner.lookup("молоко").await.is_found());
    // Second lookup starts again from page 1
    assert_eq!(scanner.fetcher().requested(), vec![1, 2, 1]);
}
