//! Merging realistic multi-alias professor rating reports.

use quad::ratings::{RatingEdge, RatingReport, UNSET_RATING, merge_reports};

fn edge(quality: f32, class: &str) -> RatingEdge {
    RatingEdge {
        quality,
        difficulty: Some(3.0),
        class: Some(class.to_owned()),
        comment: None,
        posted_at: None,
    }
}

/// A professor filed under a maiden name, a married name, and a typo'd
/// listing that was never rated.
fn aliases() -> Vec<RatingReport> {
    vec![
        RatingReport {
            id: "prof-1843".to_owned(),
            num_ratings: 24,
            avg_rating: Some(4.2),
            avg_difficulty: Some(2.9),
            would_take_again_percent: Some(88.0),
            tags: vec!["caring".to_owned(), "amazing lectures".to_owned()],
            rating_edges: vec![edge(5.0, "CSE 1010"), edge(4.0, "CSE 2050")],
        },
        RatingReport {
            id: "prof-2210".to_owned(),
            num_ratings: 6,
            avg_rating: Some(3.5),
            avg_difficulty: None,
            would_take_again_percent: Some(UNSET_RATING),
            tags: vec!["amazing lectures".to_owned(), "tough grader".to_owned()],
            rating_edges: vec![edge(3.0, "CSE 1010")],
        },
        RatingReport {
            id: "prof-9077".to_owned(),
            num_ratings: 0,
            avg_rating: None,
            avg_difficulty: None,
            would_take_again_percent: None,
            tags: Vec::new(),
            rating_edges: Vec::new(),
        },
    ]
}

#[test]
fn merge_keeps_the_best_evidenced_identifier() {
    let merged = merge_reports(aliases()).unwrap();
    assert_eq!(merged.id, "prof-1843");
}

#[test]
fn merge_sums_counts_across_all_aliases() {
    let merged = merge_reports(aliases()).unwrap();
    assert_eq!(merged.num_ratings, 30);
}

#[test]
fn merge_weights_averages_toward_the_larger_alias() {
    let merged = merge_reports(aliases()).unwrap();
    let avg = merged.avg_rating.unwrap();

    // Weights: 24/24 = 1 and 6/24 = 0.25; the unrated alias contributes
    // nothing. (4.2 * 1 + 3.5 * 0.25) / 1.25 = 4.06.
    assert!((avg - 4.06).abs() < 1e-3);
}

#[test]
fn merge_passes_through_fields_only_one_alias_carries() {
    let merged = merge_reports(aliases()).unwrap();

    assert!((merged.avg_difficulty.unwrap() - 2.9).abs() < 1e-6);
    // The sentinel on the second alias is excluded, not averaged in.
    assert!((merged.would_take_again_percent.unwrap() - 88.0).abs() < 1e-6);
}

#[test]
fn merge_unions_tags_and_concatenates_edges() {
    let merged = merge_reports(aliases()).unwrap();

    assert_eq!(
        merged.tags,
        vec!["caring", "amazing lectures", "tough grader"]
    );
    assert_eq!(merged.rating_edges.len(), 3);
}

#[test]
fn single_alias_passes_through_untouched() {
    let original = aliases().remove(0);
    let merged = merge_reports(vec![original.clone()]).unwrap();
    assert_eq!(merged, original);
}

#[test]
fn no_aliases_means_not_rated() {
    assert!(merge_reports(Vec::new()).is_none());
}
