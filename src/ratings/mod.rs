//! Merging partial professor rating reports into one weighted aggregate.
//!
//! A professor can be filed under several identifiers on the upstream
//! rating service (name variants, department moves), each carrying a
//! partial report. Display wants a single record, so the reports fold into
//! one: counts sum, averages combine weighted by relative sample size, and
//! the identifier of the best-evidenced source wins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Sentinel the rating service emits for "never rated on this axis".
pub const UNSET_RATING: f32 = -1.0;

/// One student's individual rating of a professor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RatingEdge {
    pub quality: f32,
    pub difficulty: Option<f32>,
    pub class: Option<String>,
    pub comment: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
}

/// A rating aggregate for one upstream identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RatingReport {
    pub id: String,
    #[serde(default)]
    pub num_ratings: i32,
    pub avg_rating: Option<f32>,
    pub avg_difficulty: Option<f32>,
    pub would_take_again_percent: Option<f32>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub rating_edges: Vec<RatingEdge>,
}

/// Running weighted mean over however many sources carry a field.
#[derive(Debug, Clone, Copy, Default)]
struct WeightedMean {
    sum: f64,
    weight: f64,
}

impl WeightedMean {
    /// Fold in one source's value. Absent and sentinel values are excluded
    /// outright; they contribute neither to the sum nor the weight.
    fn fold(self, value: Option<f32>, weight: f64) -> Self {
        match value {
            Some(v) if v != UNSET_RATING => Self {
                sum: self.sum + f64::from(v) * weight,
                weight: self.weight + weight,
            },
            _ => self,
        }
    }

    fn finish(self) -> Option<f32> {
        (self.weight > 0.0).then(|| (self.sum / self.weight) as f32)
    }
}

/// Merge partial reports for one professor into a single aggregate.
///
/// Returns `None` for an empty input (caller renders "not rated") and the
/// untouched report for a single source. With multiple sources, each
/// average is weighted by `num_ratings / max_num_ratings`, falling back to
/// weight 1 when every source has zero ratings. Tags union with first-seen
/// order; individual rating edges concatenate without de-duplication; the
/// same student review legitimately appears once per merge, never collapsed
/// with a lookalike. The merged id comes from the source with the most
/// ratings, ties breaking to the first encountered.
pub fn merge_reports(reports: Vec<RatingReport>) -> Option<RatingReport> {
    if reports.len() <= 1 {
        return reports.into_iter().next();
    }

    let max_ratings = reports.iter().map(|r| r.num_ratings).max().unwrap_or(0);
    let weight_of = |report: &RatingReport| -> f64 {
        if max_ratings > 0 {
            f64::from(report.num_ratings) / f64::from(max_ratings)
        } else {
            1.0
        }
    };

    // Strictly-greater comparison keeps the first source on ties.
    let canonical_id = reports
        .iter()
        .fold(None::<&RatingReport>, |best, report| match best {
            Some(current) if report.num_ratings > current.num_ratings => Some(report),
            None => Some(report),
            _ => best,
        })
        .map(|r| r.id.clone())
        .unwrap_or_default();

    let (rating, difficulty, would_take_again) = reports.iter().fold(
        (
            WeightedMean::default(),
            WeightedMean::default(),
            WeightedMean::default(),
        ),
        |(rating, difficulty, wta), report| {
            let weight = weight_of(report);
            (
                rating.fold(report.avg_rating, weight),
                difficulty.fold(report.avg_difficulty, weight),
                wta.fold(report.would_take_again_percent, weight),
            )
        },
    );

    let mut tags: Vec<String> = Vec::new();
    let mut rating_edges: Vec<RatingEdge> = Vec::new();
    for report in &reports {
        for tag in &report.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
        rating_edges.extend(report.rating_edges.iter().cloned());
    }

    Some(RatingReport {
        id: canonical_id,
        num_ratings: reports.iter().map(|r| r.num_ratings).sum(),
        avg_rating: rating.finish(),
        avg_difficulty: difficulty.finish(),
        would_take_again_percent: would_take_again.finish(),
        tags,
        rating_edges,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: &str, num_ratings: i32, avg_rating: Option<f32>) -> RatingReport {
        RatingReport {
            id: id.to_owned(),
            num_ratings,
            avg_rating,
            avg_difficulty: None,
            would_take_again_percent: None,
            tags: Vec::new(),
            rating_edges: Vec::new(),
        }
    }

    fn edge(quality: f32) -> RatingEdge {
        RatingEdge {
            quality,
            difficulty: None,
            class: None,
            comment: None,
            posted_at: None,
        }
    }

    #[test]
    fn empty_input_merges_to_none() {
        assert!(merge_reports(Vec::new()).is_none());
    }

    #[test]
    fn single_source_is_an_identity() {
        let single = report("prof-a", 12, Some(4.2));
        let merged = merge_reports(vec![single.clone()]).unwrap();
        assert_eq!(merged, single);
    }

    #[test]
    fn counts_sum_and_commute() {
        let a = report("a", 10, Some(4.0));
        let b = report("b", 30, Some(3.0));

        let ab = merge_reports(vec![a.clone(), b.clone()]).unwrap();
        let ba = merge_reports(vec![b, a]).unwrap();

        assert_eq!(ab.num_ratings, 40);
        assert_eq!(ab.num_ratings, ba.num_ratings);
    }

    #[test]
    fn averages_weight_by_relative_sample_size() {
        // B carries 3x the evidence, so the merged average lands nearer 3.0:
        // (4.0 * 1/3 + 3.0 * 1) / (1/3 + 1) = 3.25.
        let merged =
            merge_reports(vec![report("a", 10, Some(4.0)), report("b", 30, Some(3.0))]).unwrap();

        let avg = merged.avg_rating.unwrap();
        assert!((avg - 3.25).abs() < 1e-4);
        assert!((avg - 3.0).abs() < (avg - 4.0).abs());
    }

    #[test]
    fn sentinel_sources_leave_the_other_average_untouched() {
        let merged = merge_reports(vec![
            report("a", 20, Some(UNSET_RATING)),
            report("b", 5, Some(4.5)),
        ])
        .unwrap();

        assert!((merged.avg_rating.unwrap() - 4.5).abs() < 1e-6);
    }

    #[test]
    fn absent_fields_are_skipped_not_zeroed() {
        let merged = merge_reports(vec![report("a", 20, None), report("b", 5, Some(4.5))]).unwrap();
        assert!((merged.avg_rating.unwrap() - 4.5).abs() < 1e-6);
    }

    #[test]
    fn all_sources_unrated_yields_no_average() {
        let merged = merge_reports(vec![report("a", 0, None), report("b", 0, None)]).unwrap();
        assert!(merged.avg_rating.is_none());
        assert_eq!(merged.num_ratings, 0);
    }

    #[test]
    fn zero_max_ratings_falls_back_to_unit_weight() {
        // Both sources have zero counts but one still carries an average;
        // the divide-by-zero guard keeps it contributing at weight 1.
        let merged = merge_reports(vec![report("a", 0, Some(3.5)), report("b", 0, None)]).unwrap();
        assert!((merged.avg_rating.unwrap() - 3.5).abs() < 1e-6);
    }

    #[test]
    fn canonical_id_is_the_best_evidenced_source() {
        let merged = merge_reports(vec![
            report("small", 3, Some(5.0)),
            report("large", 50, Some(3.8)),
        ])
        .unwrap();
        assert_eq!(merged.id, "large");
    }

    #[test]
    fn canonical_id_ties_break_to_first_encountered() {
        let merged = merge_reports(vec![report("first", 10, None), report("second", 10, None)]).unwrap();
        assert_eq!(merged.id, "first");
    }

    #[test]
    fn tags_union_preserving_first_seen_order() {
        let mut a = report("a", 10, None);
        a.tags = vec!["caring".to_owned(), "tough grader".to_owned()];
        let mut b = report("b", 5, None);
        b.tags = vec!["tough grader".to_owned(), "hilarious".to_owned()];

        let merged = merge_reports(vec![a, b]).unwrap();
        assert_eq!(merged.tags, vec!["caring", "tough grader", "hilarious"]);
    }

    #[test]
    fn rating_edges_concatenate_without_deduplication() {
        let mut a = report("a", 10, None);
        a.rating_edges = vec![edge(4.0), edge(4.0)];
        let mut b = report("b", 5, None);
        b.rating_edges = vec![edge(4.0)];

        let merged = merge_reports(vec![a, b]).unwrap();
        assert_eq!(merged.rating_edges.len(), 3);
    }
}
