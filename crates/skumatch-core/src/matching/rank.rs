use std::cmp::Ordering;

use crate::matching::policy::MatchPolicy;
use crate::matching::similarity::{
    any_signal_token_present, count_common_tokens, edit_distance, fuzzy_ratio,
};
use crate::matching::types::{
    BrandTaggedName, CoarseMatch, MatchCandidate, NormalizedCatalogEntry, NormalizedName,
};

/// Stage 1: the catalog entry closest to the name by raw edit
/// distance. Ties fall through distance without the formula suffix,
/// then the cleaned SKU text, then the SKU id, so the winner is
/// independent of catalog order.
pub fn rank_coarse(
    name: &NormalizedName,
    catalog: &[NormalizedCatalogEntry],
) -> Option<CoarseMatch> {
    let mut candidates: Vec<CoarseMatch> = catalog
        .iter()
        .map(|entry| {
            let distance = edit_distance(&name.clean_name, &entry.clean_sku);
            let distance_without_formula = match &name.clean_name_non_formula {
                Some(prefix) => edit_distance(prefix, &entry.clean_sku),
                None => distance,
            };
            CoarseMatch {
                sku_id: entry.sku_id,
                product_sku: entry.product_sku.clone(),
                clean_sku: entry.clean_sku.clone(),
                edit_distance: distance,
                edit_distance_without_formula: distance_without_formula,
                common_tokens: count_common_tokens(&name.clean_name, &entry.clean_sku),
            }
        })
        .collect();

    candidates.sort_by(compare_coarse);
    candidates.into_iter().next()
}

fn compare_coarse(left: &CoarseMatch, right: &CoarseMatch) -> Ordering {
    left.edit_distance
        .cmp(&right.edit_distance)
        .then_with(|| {
            left.edit_distance_without_formula
                .cmp(&right.edit_distance_without_formula)
        })
        .then_with(|| left.clean_sku.cmp(&right.clean_sku))
        .then_with(|| left.sku_id.cmp(&right.sku_id))
}

/// Stage 2: scores the full catalog against the brand-tagged name and
/// keeps the best entry that is brand-consistent. An entry from a
/// different brand than the tag survives the filter only above the
/// policy fuzzy floor.
pub fn rank_refined(
    tagged: &BrandTaggedName,
    catalog: &[NormalizedCatalogEntry],
    policy: MatchPolicy,
) -> Option<MatchCandidate> {
    let mut candidates: Vec<MatchCandidate> = catalog
        .iter()
        .filter_map(|entry| {
            let candidate = score_candidate(tagged, entry, policy);
            let eligible = candidate.brand_match
                || tagged.possible_brand.is_none()
                || policy.accepts_cross_brand(candidate.fuzzy_ratio);
            eligible.then_some(candidate)
        })
        .collect();

    candidates.sort_by(compare_refined);
    candidates.into_iter().next()
}

fn score_candidate(
    tagged: &BrandTaggedName,
    entry: &NormalizedCatalogEntry,
    policy: MatchPolicy,
) -> MatchCandidate {
    let name = &tagged.name;
    let target = format!(
        "{} {} {}",
        entry.clean_sku_alphanum, entry.brand, entry.product_type
    );

    let brand_match = match &tagged.possible_brand {
        Some(brand) => brand == &entry.brand,
        None => false,
    };

    // Refined scoring compares the alphanumeric views.
    let distance = edit_distance(&name.clean_name_alphanum, &entry.clean_sku_alphanum);
    let distance_without_formula = match &name.clean_name_non_formula {
        Some(prefix) => edit_distance(prefix, &entry.clean_sku),
        None => edit_distance(&name.clean_name, &entry.clean_sku),
    };

    MatchCandidate {
        sku_id: entry.sku_id,
        product_sku: entry.product_sku.clone(),
        clean_sku: entry.clean_sku.clone(),
        brand_match,
        brand_present: tagged.possible_brand.is_some(),
        token_present: any_signal_token_present(&name.clean_name_alphanum, &target, policy),
        fuzzy_ratio: fuzzy_ratio(&name.clean_name_alphanum, &target),
        edit_distance: distance,
        edit_distance_without_formula: distance_without_formula,
        common_tokens: count_common_tokens(&name.clean_name, &entry.clean_sku),
    }
}

fn compare_refined(left: &MatchCandidate, right: &MatchCandidate) -> Ordering {
    right
        .brand_match
        .cmp(&left.brand_match)
        .then_with(|| right.brand_present.cmp(&left.brand_present))
        .then_with(|| right.token_present.cmp(&left.token_present))
        .then_with(|| right.fuzzy_ratio.cmp(&left.fuzzy_ratio))
        .then_with(|| {
            left.edit_distance_without_formula
                .cmp(&right.edit_distance_without_formula)
        })
        .then_with(|| left.clean_sku.cmp(&right.clean_sku))
        .then_with(|| left.sku_id.cmp(&right.sku_id))
}

#[cfg(test)]
mod tests {
    use crate::matching::normalize::{Normalizer, is_alphabetic_only, is_only_alphanumeric};
    use crate::matching::policy::MATCH_POLICY_V1;
    use crate::matching::types::{BrandTaggedName, NormalizedCatalogEntry, NormalizedName};

    use super::{rank_coarse, rank_refined};

    fn name(product_id: i64, raw: &str) -> NormalizedName {
        let normalizer = Normalizer::new().unwrap();
        let clean = normalizer.clean(raw);
        NormalizedName {
            product_id,
            product_name: raw.to_string(),
            clean_name_alphanum: normalizer.alphanumeric_only(&clean),
            clean_name_non_formula: normalizer.non_formula_prefix(&clean),
            clean_name_formula: normalizer.formula(&clean),
            is_only_alphanumeric: is_only_alphanumeric(raw),
            is_alphabetic_only: is_alphabetic_only(raw),
            clean_name: clean,
        }
    }

    fn entry(
        sku_id: i64,
        sku: &str,
        brand: &str,
        product_type: &str,
    ) -> NormalizedCatalogEntry {
        let normalizer = Normalizer::new().unwrap();
        let clean_sku = normalizer.clean(sku);
        NormalizedCatalogEntry {
            sku_id,
            product_sku: sku.to_string(),
            brand: brand.to_string(),
            product_type: product_type.to_string(),
            formula: String::new(),
            clean_sku_alphanum: normalizer.alphanumeric_only(&clean_sku),
            clean_sku,
        }
    }

    fn tag(name: NormalizedName, brand: Option<&str>) -> BrandTaggedName {
        BrandTaggedName {
            name,
            possible_brand: brand.map(str::to_string),
        }
    }

    #[test]
    fn coarse_pass_picks_the_minimum_edit_distance() {
        let catalog = vec![
            entry(1, "BRANDX-VITC-100ML", "brandx", "vitamin"),
            entry(2, "OTHER-THING-5KG", "other", "fertilizer"),
        ];
        let coarse = rank_coarse(&name(7, "Brand X Vit C 100ml"), &catalog);
        assert!(coarse.is_some());
        if let Some(winner) = coarse {
            assert_eq!(winner.sku_id, 1);
        }
    }

    #[test]
    fn coarse_pass_on_empty_catalog_is_none() {
        assert!(rank_coarse(&name(7, "anything"), &[]).is_none());
    }

    #[test]
    fn coarse_ties_break_on_sku_text_then_id() {
        // Same clean distance from the name; "aaa" sorts before "aab".
        let catalog = vec![
            entry(2, "aab", "brand", ""),
            entry(1, "aaa", "brand", ""),
        ];
        let coarse = rank_coarse(&name(7, "aac"), &catalog);
        assert!(coarse.is_some());
        if let Some(winner) = coarse {
            assert_eq!(winner.clean_sku, "aaa");
        }

        let duplicated = vec![
            entry(9, "aaa", "brand", ""),
            entry(3, "aaa", "brand", ""),
        ];
        let coarse = rank_coarse(&name(7, "aac"), &duplicated);
        assert!(coarse.is_some());
        if let Some(winner) = coarse {
            assert_eq!(winner.sku_id, 3);
        }
    }

    #[test]
    fn coarse_winner_is_independent_of_catalog_order() {
        let forward = vec![
            entry(1, "BRANDX-VITC-100ML", "brandx", "vitamin"),
            entry(2, "BRANDX-VITC-200ML", "brandx", "vitamin"),
            entry(3, "OTHER-THING-5KG", "other", "fertilizer"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let query = name(7, "Brand X Vit C 100ml");
        let first = rank_coarse(&query, &forward).map(|winner| winner.sku_id);
        let second = rank_coarse(&query, &reversed).map(|winner| winner.sku_id);
        assert_eq!(first, second);
    }

    #[test]
    fn refined_pass_prefers_the_tagged_brand() {
        let catalog = vec![
            entry(1, "BRANDX-VITC-100ML", "brandx", "vitamin"),
            entry(2, "OTHER-VITC-100ML", "other", "vitamin"),
        ];
        let tagged = tag(name(7, "Brand X Vitamin C 100ml"), Some("brandx"));
        let refined = rank_refined(&tagged, &catalog, MATCH_POLICY_V1);
        assert!(refined.is_some());
        if let Some(winner) = refined {
            assert_eq!(winner.sku_id, 1);
            assert!(winner.brand_match);
        }
    }

    #[test]
    fn cross_brand_candidates_below_the_fuzzy_floor_are_filtered() {
        // Tagged brand has no catalog entry; the only candidate is a
        // different brand with almost no textual overlap.
        let catalog = vec![entry(1, "ZZZZZZZZ-QQQQ-77", "other", "fertilizer")];
        let tagged = tag(name(7, "Brand X Vitamin C 100ml"), Some("brandx"));
        let refined = rank_refined(&tagged, &catalog, MATCH_POLICY_V1);
        assert!(refined.is_none());
    }

    #[test]
    fn untagged_names_score_the_whole_catalog() {
        let catalog = vec![entry(1, "ZZZZZZZZ-QQQQ-77", "other", "fertilizer")];
        let tagged = tag(name(7, "Brand X Vitamin C 100ml"), None);
        let refined = rank_refined(&tagged, &catalog, MATCH_POLICY_V1);
        assert!(refined.is_some());
        if let Some(winner) = refined {
            assert_eq!(winner.sku_id, 1);
            assert!(!winner.brand_match);
        }
    }

    #[test]
    fn fuzzy_ratio_decides_between_untagged_candidates() {
        // Entry 1 carries the name text inside its brand column; that
        // must not outrank the near-exact SKU match on entry 2.
        let catalog = vec![
            entry(1, "zzz widget", "acme", ""),
            entry(2, "acme widget", "other", ""),
        ];
        let tagged = tag(name(7, "acme widget"), None);
        let refined = rank_refined(&tagged, &catalog, MATCH_POLICY_V1);
        assert!(refined.is_some());
        if let Some(winner) = refined {
            assert_eq!(winner.sku_id, 2);
            assert!(!winner.brand_present);
        }
    }

    #[test]
    fn token_presence_compares_the_alphanumeric_views() {
        // "4.5x3.6x2.1" only lines up with the SKU token "45x36x21"
        // after both sides drop their punctuation.
        let catalog = vec![entry(1, "zzz 4.5-3.6-2.1", "other", "")];
        let tagged = tag(name(7, "acid 4.5x3.6x2.1"), None);
        let refined = rank_refined(&tagged, &catalog, MATCH_POLICY_V1);
        assert!(refined.is_some());
        if let Some(winner) = refined {
            assert!(winner.token_present);
        }
    }

    #[test]
    fn refined_distance_diagnostic_measures_the_alphanumeric_views() {
        // Clean forms differ ("4.5" vs "4,5") but the alphanumeric
        // views are identical.
        let catalog = vec![entry(1, "acid 4,5x3,6x2,1", "other", "")];
        let tagged = tag(name(7, "acid 4.5x3.6x2.1"), None);
        let refined = rank_refined(&tagged, &catalog, MATCH_POLICY_V1);
        assert!(refined.is_some());
        if let Some(winner) = refined {
            assert_eq!(winner.edit_distance, 0);
        }
    }

    #[test]
    fn refined_winner_is_independent_of_catalog_order() {
        let forward = vec![
            entry(1, "BRANDX-VITC-100ML", "brandx", "vitamin"),
            entry(2, "BRANDX-VITC-200ML", "brandx", "vitamin"),
            entry(3, "OTHER-VITC-100ML", "other", "vitamin"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        let tagged = tag(name(7, "Brand X Vitamin C 100ml"), Some("brandx"));
        let first = rank_refined(&tagged, &forward, MATCH_POLICY_V1).map(|winner| winner.sku_id);
        let second = rank_refined(&tagged, &reversed, MATCH_POLICY_V1).map(|winner| winner.sku_id);
        assert_eq!(first, second);
    }

    #[test]
    fn refined_pass_on_empty_catalog_is_none() {
        let tagged = tag(name(7, "anything"), None);
        assert!(rank_refined(&tagged, &[], MATCH_POLICY_V1).is_none());
    }
}
