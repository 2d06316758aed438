//! Theme scoring over whole books and custom taxonomies.

use crate::common::{gospel, json_file};
use lectern::{BookReport, LecternError, ThemeScorer, ThemeTaxonomy};

#[test]
fn test_reference_score() {
    let taxonomy = ThemeTaxonomy::from_json_str(
        r#"{"ciencia": {"keywords": ["energia", "quântico"], "weight": 0.7}}"#,
    )
    .unwrap();
    let scorer = ThemeScorer::new(&taxonomy).unwrap();
    assert_eq!(scorer.score("energia energia quântico mundo")["ciencia"], 100.0);
}

#[test]
fn test_bundled_taxonomy_scores_every_theme() {
    let scorer = ThemeScorer::extended().unwrap();
    let scores = scorer.score("Deus e a fé, a oração e a igreja.");
    assert_eq!(scores.len(), ThemeTaxonomy::default_extended().len());
    assert!(scores["religiao"] > 0.0);
    assert!(scores.values().all(|s| (0.0..=100.0).contains(s)));
}

#[test]
fn test_custom_taxonomy_from_file() {
    let file = json_file(
        r#"{
            "mar": {"keywords": ["onda", "maré", "Navio"], "weight": 1.0},
            "terra": {"keywords": ["montanha"], "weight": 0.5}
        }"#,
    );
    let taxonomy = ThemeTaxonomy::load(file.path()).unwrap();
    let scorer = ThemeScorer::new(&taxonomy).unwrap();
    let scores = scorer.score("O navio enfrentou a onda.");
    assert!(scores["mar"] > 0.0);
    assert_eq!(scores["terra"], 0.0);
}

#[test]
fn test_broken_taxonomy_file() {
    let file = json_file(r#"{"mar": {"keywords": ["onda"], "weight": "alto"}}"#);
    assert!(matches!(
        ThemeTaxonomy::load(file.path()),
        Err(LecternError::Json { .. })
    ));
}

#[test]
fn test_report_over_the_fixture_book() {
    let book = gospel();
    let scorer = ThemeScorer::extended().unwrap();
    let report = BookReport::build(&book, &scorer);

    assert_eq!(report.page_count, 20);
    assert_eq!(report.chapter_count, 3);
    assert_eq!(report.pages.len(), 20);
    assert!(report.page(1).unwrap().themes["religiao"] > 0.0);
    assert!(report.book_themes["religiao"] > 0.0);
    assert!(report.book_themes["religiao"] < report.page(1).unwrap().themes["religiao"]);
}
