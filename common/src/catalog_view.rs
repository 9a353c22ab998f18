//! Pure filter + sort pipeline over the fetched destination batch.
//!
//! Every recompute starts from the full snapshot; nothing is cached or
//! mutated in place, so identical inputs always produce the same list.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::catalog_filter::{CatalogFilter, SortOrder};
use crate::destination::Destination;


/// Apply the filter criteria and sort order to the full record batch.
///
/// Records failing the baseline display-field gate are dropped before any
/// user criterion is evaluated. The sort is stable, so ties keep the order
/// the records arrived in.
pub fn filter_and_sort_destinations(
    destinations: &[Destination],
    favorite_ids: &BTreeSet<String>,
    filter: &CatalogFilter,
) -> Vec<Destination> {
    let mut filtered = destinations
        .iter()
        .filter(|dest| dest.has_display_fields())
        .filter(|dest| matches_filter(dest, favorite_ids, filter))
        .cloned()
        .collect::<Vec<_>>();

    filtered.sort_by(compare_for(filter.sort_order));
    filtered
}

fn matches_filter(
    dest: &Destination,
    favorite_ids: &BTreeSet<String>,
    filter: &CatalogFilter,
) -> bool {
    if !filter.search.is_empty() {
        let needle = filter.search.to_lowercase();
        if !dest.name.to_lowercase().contains(&needle)
            && !dest.location.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    if let Some(region) = &filter.region {
        if !dest.location.to_lowercase().contains(&region.to_lowercase()) {
            return false;
        }
    }

    if let Some(price_range) = &filter.price_range {
        if !price_range.contains(dest.price) {
            return false;
        }
    }

    if let Some(duration) = &filter.duration {
        if !duration.contains(dest.duration) {
            return false;
        }
    }

    if let Some(group_size) = &filter.group_size {
        if !group_size.accommodates(dest.min_people, dest.max_people) {
            return false;
        }
    }

    if let Some(min_rating) = filter.min_rating {
        if dest.rating < min_rating as f64 {
            return false;
        }
    }

    if !filter.included_items.is_empty() {
        let has_selected_item = filter.included_items.iter().any(|selected| {
            let selected = selected.to_lowercase();
            dest.included_items
                .iter()
                .any(|item| item.to_lowercase().contains(&selected))
        });
        if !has_selected_item {
            return false;
        }
    }

    if filter.only_favorites && !favorite_ids.contains(&dest.id) {
        return false;
    }

    true
}

fn compare_for(sort_order: SortOrder) -> impl Fn(&Destination, &Destination) -> Ordering {
    move |a, b| match sort_order {
        SortOrder::NameAsc => a.name.cmp(&b.name),
        SortOrder::PriceAsc => a.price.total_cmp(&b.price),
        SortOrder::PriceDesc => b.price.total_cmp(&a.price),
        SortOrder::RatingDesc => b.rating.total_cmp(&a.rating),
        SortOrder::DurationAsc => a.duration.cmp(&b.duration),
    }
}

/// Distinct values for the sidebar selects, derived from the batch itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogFilterOptions {
    pub regions: Vec<String>,
    pub included_items: Vec<String>,
}

pub fn catalog_filter_options(destinations: &[Destination]) -> CatalogFilterOptions {
    let regions = destinations
        .iter()
        .filter(|dest| dest.has_display_fields())
        .map(|dest| dest.region().to_string())
        .collect::<BTreeSet<_>>();
    let included_items = destinations
        .iter()
        .flat_map(|dest| dest.included_items.iter().cloned())
        .collect::<BTreeSet<_>>();
    CatalogFilterOptions {
        regions: regions.into_iter().collect(),
        included_items: included_items.into_iter().collect(),
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_filter::{DurationBucket, GroupSizeBucket, PriceRange};

    fn dest(id: &str, name: &str, location: &str) -> Destination {
        Destination {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            description: "A trip".to_string(),
            price: 100.0,
            duration: 5,
            min_people: 1,
            max_people: 10,
            rating: 4.0,
            review_count: 10,
            ..Default::default()
        }
    }

    fn sample_batch() -> Vec<Destination> {
        let mut zeta = dest("x", "Zeta Beach", "Maragogi - AL");
        zeta.price = 100.0;
        zeta.duration = 2;
        zeta.rating = 4.8;
        zeta.included_items = vec!["Breakfast".to_string(), "Transfer".to_string()];

        let mut alpha = dest("y", "Alpha Dunes", "Natal - RN");
        alpha.price = 50.0;
        alpha.duration = 10;
        alpha.rating = 3.5;
        alpha.min_people = 6;
        alpha.max_people = 12;
        alpha.included_items = vec!["Buggy ride".to_string()];

        vec![zeta, alpha]
    }

    fn ids(list: &[Destination]) -> Vec<&str> {
        list.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn default_filter_returns_all_valid_records_sorted_by_name() {
        let batch = sample_batch();
        let result =
            filter_and_sort_destinations(&batch, &BTreeSet::new(), &CatalogFilter::default());
        assert_eq!(ids(&result), vec!["y", "x"]);
    }

    #[test]
    fn records_missing_display_fields_are_always_excluded() {
        let mut batch = sample_batch();
        batch.push(dest("z", "", "Somewhere - BA"));
        batch.push(dest("", "Nameless Key", "Somewhere - BA"));
        let result =
            filter_and_sort_destinations(&batch, &BTreeSet::new(), &CatalogFilter::default());
        assert_eq!(ids(&result), vec!["y", "x"]);
    }

    #[test]
    fn price_ascending_orders_cheapest_first() {
        let batch = sample_batch();
        let filter = CatalogFilter {
            sort_order: SortOrder::PriceAsc,
            ..Default::default()
        };
        let result = filter_and_sort_destinations(&batch, &BTreeSet::new(), &filter);
        assert_eq!(ids(&result), vec!["y", "x"]);

        // switching back to name keeps the same order here, both lists are
        // alphabetical already
        let filter = CatalogFilter::default();
        let result = filter_and_sort_destinations(&batch, &BTreeSet::new(), &filter);
        assert_eq!(ids(&result), vec!["y", "x"]);
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let batch = sample_batch();
        let filter = CatalogFilter {
            search: "beach".to_string(),
            sort_order: SortOrder::RatingDesc,
            ..Default::default()
        };
        let first = filter_and_sort_destinations(&batch, &BTreeSet::new(), &filter);
        let second = filter_and_sort_destinations(&batch, &BTreeSet::new(), &filter);
        assert_eq!(first, second);
    }

    #[test]
    fn search_matches_name_or_location_case_insensitive() {
        let batch = sample_batch();
        let favorites = BTreeSet::new();

        let by_name = CatalogFilter {
            search: "ZETA".to_string(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_and_sort_destinations(&batch, &favorites, &by_name)),
            vec!["x"]
        );

        let by_location = CatalogFilter {
            search: "natal".to_string(),
            ..Default::default()
        };
        assert_eq!(
            ids(&filter_and_sort_destinations(&batch, &favorites, &by_location)),
            vec!["y"]
        );
    }

    #[test]
    fn region_filter_is_substring_of_location() {
        let batch = sample_batch();
        let filter = CatalogFilter {
            region: Some("maragogi".to_string()),
            ..Default::default()
        };
        let result = filter_and_sort_destinations(&batch, &BTreeSet::new(), &filter);
        assert_eq!(ids(&result), vec!["x"]);
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let batch = sample_batch();
        let filter = CatalogFilter {
            price_range: Some(PriceRange {
                min: 50.0,
                max: 100.0,
            }),
            ..Default::default()
        };
        let result = filter_and_sort_destinations(&batch, &BTreeSet::new(), &filter);
        assert_eq!(result.len(), 2);

        let filter = CatalogFilter {
            price_range: Some(PriceRange {
                min: 51.0,
                max: 99.0,
            }),
            ..Default::default()
        };
        let result = filter_and_sort_destinations(&batch, &BTreeSet::new(), &filter);
        assert!(result.is_empty());
    }

    #[test]
    fn duration_buckets_cover_their_inclusive_ranges() {
        assert!(DurationBucket::UpToThreeDays.contains(3));
        assert!(!DurationBucket::UpToThreeDays.contains(4));
        assert!(DurationBucket::FourToSevenDays.contains(4));
        assert!(DurationBucket::FourToSevenDays.contains(7));
        assert!(!DurationBucket::FourToSevenDays.contains(8));
        assert!(DurationBucket::EightPlusDays.contains(8));
        assert!(!DurationBucket::EightPlusDays.contains(7));
    }

    #[test]
    fn family_bucket_checks_both_capacity_bounds() {
        // min_people 6 excludes a family of 4 even though capacity allows it
        assert!(!GroupSizeBucket::Family.accommodates(6, 12));
        assert!(GroupSizeBucket::Family.accommodates(2, 4));
        // couple and group buckets only look at the upper capacity
        assert!(GroupSizeBucket::Couple.accommodates(6, 12));
        assert!(GroupSizeBucket::Group.accommodates(1, 8));
        assert!(!GroupSizeBucket::Group.accommodates(1, 7));
    }

    #[test]
    fn included_items_use_or_semantics_across_selected_items() {
        let batch = sample_batch();
        let filter = CatalogFilter {
            included_items: ["breakfast".to_string(), "buggy".to_string()]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        // both records carry at least one of the selected items
        let result = filter_and_sort_destinations(&batch, &BTreeSet::new(), &filter);
        assert_eq!(result.len(), 2);

        let filter = CatalogFilter {
            included_items: ["helicopter".to_string()].into_iter().collect(),
            ..Default::default()
        };
        let result = filter_and_sort_destinations(&batch, &BTreeSet::new(), &filter);
        assert!(result.is_empty());
    }

    #[test]
    fn favorites_only_with_empty_set_matches_nothing() {
        let batch = sample_batch();
        let filter = CatalogFilter::favorites_only();
        let result = filter_and_sort_destinations(&batch, &BTreeSet::new(), &filter);
        assert!(result.is_empty());
    }

    #[test]
    fn favorites_only_keeps_favorited_records() {
        let batch = sample_batch();
        let favorites = ["x".to_string()].into_iter().collect();
        let filter = CatalogFilter::favorites_only();
        let result = filter_and_sort_destinations(&batch, &favorites, &filter);
        assert_eq!(ids(&result), vec!["x"]);
    }

    #[test]
    fn tightening_one_criterion_never_reincludes_a_record() {
        let batch = sample_batch();
        let favorites = BTreeSet::new();
        let mut filter = CatalogFilter {
            region: Some("natal".to_string()),
            ..Default::default()
        };
        let before = filter_and_sort_destinations(&batch, &favorites, &filter);
        assert_eq!(ids(&before), vec!["y"]);

        filter.min_rating = Some(4);
        let after = filter_and_sort_destinations(&batch, &favorites, &filter);
        assert!(after.is_empty());

        // resetting the added criterion restores the previous result
        filter.min_rating = None;
        let restored = filter_and_sort_destinations(&batch, &favorites, &filter);
        assert_eq!(before, restored);
    }

    #[test]
    fn empty_batch_yields_empty_list() {
        let result =
            filter_and_sort_destinations(&[], &BTreeSet::new(), &CatalogFilter::default());
        assert!(result.is_empty());
    }

    #[test]
    fn filter_options_collect_distinct_sorted_values() {
        let batch = sample_batch();
        let options = catalog_filter_options(&batch);
        assert_eq!(options.regions, vec!["Maragogi", "Natal"]);
        assert_eq!(
            options.included_items,
            vec!["Breakfast", "Buggy ride", "Transfer"]
        );
    }
}
