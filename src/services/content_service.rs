use std::cmp::Ordering;

use log::debug;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::utils::find_date;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Service for scoping and ordering the snapshot's content paths
pub struct ContentService;

impl ContentService {
    /// Create a new content service
    pub fn new() -> Self {
        Self
    }

    /// Compute the longest common directory prefix of all paths.
    ///
    /// Matching stops at the first segment where any path diverges; deeper
    /// segments are not examined even if they would coincidentally match.
    pub fn compute_base_path(&self, paths: &[String]) -> String {
        let dirs: Vec<Vec<&str>> = paths
            .iter()
            .map(|path| {
                let mut segments: Vec<&str> = path.split('/').collect();
                segments.pop();
                segments
            })
            .collect();

        let min_depth = dirs.iter().map(Vec::len).min().unwrap_or(0);

        let mut base: Vec<&str> = Vec::new();
        for i in 0..min_depth {
            let candidate = dirs[0][i];
            if dirs.iter().all(|segments| segments[i] == candidate) {
                base.push(candidate);
            } else {
                break;
            }
        }

        let base = base.join("/");
        debug!("Base path for {} paths: '{}'", paths.len(), base);
        base
    }

    /// Order paths by inferred recency, most recent first.
    ///
    /// The order is defined pairwise: two dated paths compare by date value
    /// descending; any pair where a date is missing or unparseable falls back
    /// to ascending lexical comparison of the full paths. Mixed inputs need
    /// not form a total order, so this is a stable insertion sort over the
    /// pairwise rule rather than the stdlib sort, which may reject an
    /// inconsistent comparator.
    pub fn sort_by_recency(&self, paths: &[String]) -> Vec<String> {
        let mut ordered: Vec<String> = paths.to_vec();
        for i in 1..ordered.len() {
            let mut j = i;
            while j > 0 && self.compare_recency(&ordered[j - 1], &ordered[j]) == Ordering::Greater {
                ordered.swap(j - 1, j);
                j -= 1;
            }
        }
        ordered
    }

    fn compare_recency(&self, a: &str, b: &str) -> Ordering {
        match (find_date(a), find_date(b)) {
            (Some(da), Some(db)) => match (parse_date(da), parse_date(db)) {
                (Some(pa), Some(pb)) => pb.cmp(&pa),
                _ => a.cmp(b),
            },
            _ => a.cmp(b),
        }
    }

    /// The document shown when no path is explicitly requested
    pub fn default_path<'a>(&self, ordered: &'a [String]) -> Option<&'a str> {
        ordered.first().map(String::as_str)
    }
}

impl Default for ContentService {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a date-shaped token. Separators are normalized to `-` and a bare
/// year-month reads as the first of that month.
fn parse_date(token: &str) -> Option<Date> {
    let mut normalized = token.replace('/', "-");
    if normalized.len() == 7 {
        normalized.push_str("-01");
    }
    Date::parse(&normalized, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn base_path_of_shared_prefix() {
        let service = ContentService::new();
        let input = paths(&[
            "blog/posts/2024/a.md",
            "blog/posts/2023/b.md",
            "blog/posts/c.md",
        ]);
        assert_eq!(service.compute_base_path(&input), "blog/posts");
    }

    #[test]
    fn base_path_stops_at_first_divergence() {
        let service = ContentService::new();
        // Third segment matches again but is never examined
        let input = paths(&["a/x/c/one.md", "a/y/c/two.md"]);
        assert_eq!(service.compute_base_path(&input), "a");
    }

    #[test]
    fn base_path_of_single_path_is_its_directory() {
        let service = ContentService::new();
        let input = paths(&["blog/posts/2024/a.md"]);
        assert_eq!(service.compute_base_path(&input), "blog/posts/2024");
    }

    #[test]
    fn base_path_of_empty_input_is_empty() {
        let service = ContentService::new();
        assert_eq!(service.compute_base_path(&[]), "");
    }

    #[test]
    fn base_path_with_zero_depth_path_is_empty() {
        let service = ContentService::new();
        let input = paths(&["top.md", "blog/a.md"]);
        assert_eq!(service.compute_base_path(&input), "");
    }

    #[test]
    fn dated_paths_sort_descending() {
        let service = ContentService::new();
        let input = paths(&["2023-05-01/b.md", "2024-01-01/a.md"]);
        assert_eq!(
            service.sort_by_recency(&input),
            paths(&["2024-01-01/a.md", "2023-05-01/b.md"])
        );
    }

    #[test]
    fn undated_paths_sort_lexically_ascending() {
        let service = ContentService::new();
        let input = paths(&["posts/z.md", "posts/a.md"]);
        assert_eq!(
            service.sort_by_recency(&input),
            paths(&["posts/a.md", "posts/z.md"])
        );
    }

    #[test]
    fn year_month_reads_as_first_of_month() {
        let service = ContentService::new();
        let input = paths(&["blog/2024-03/late.md", "blog/2024-03-15/early.md"]);
        assert_eq!(
            service.sort_by_recency(&input),
            paths(&["blog/2024-03-15/early.md", "blog/2024-03/late.md"])
        );
    }

    #[test]
    fn unparseable_date_pair_falls_back_to_lexical() {
        let service = ContentService::new();
        let input = paths(&["blog/2024-99-99/z.md", "blog/2023-01-01/a.md"]);
        assert_eq!(
            service.sort_by_recency(&input),
            paths(&["blog/2023-01-01/a.md", "blog/2024-99-99/z.md"])
        );
    }

    #[test]
    fn mixed_input_uses_pairwise_rule() {
        let service = ContentService::new();
        // "m.md" has no date, so its pairs compare lexically; dated pairs
        // compare by date. Stable sort over the pairwise comparator.
        let input = paths(&["blog/m.md", "blog/2024-01-01/a.md", "blog/2025-01-01/b.md"]);
        assert_eq!(
            service.sort_by_recency(&input),
            paths(&["blog/2025-01-01/b.md", "blog/2024-01-01/a.md", "blog/m.md"])
        );
    }

    #[test]
    fn non_transitive_pairs_sort_without_panicking() {
        let service = ContentService::new();
        // Pairwise cycle: the dated pair orders by date, each mixed pair
        // orders lexically. The insertion sort settles it deterministically.
        let input = paths(&["b/2024-01-01/x.md", "a/2023-01-01/y.md", "a0/z.md"]);
        assert_eq!(
            service.sort_by_recency(&input),
            paths(&["b/2024-01-01/x.md", "a/2023-01-01/y.md", "a0/z.md"])
        );
    }

    #[test]
    fn default_is_first_of_ordering() {
        let service = ContentService::new();
        let ordered = service.sort_by_recency(&paths(&["2023-05-01/b.md", "2024-01-01/a.md"]));
        assert_eq!(service.default_path(&ordered), Some("2024-01-01/a.md"));
    }
}
