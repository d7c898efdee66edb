//! Pure derivations over fetched catalog data.
//!
//! These back the storefront's filter dropdowns and search box. None of them
//! touch the network.
//!
//! # Invariants
//! - Distinct-value helpers return sorted, duplicate-free lists
//! - [`filter_materials`] preserves input order and never reorders matches

use std::collections::BTreeSet;

use crate::models::{FinishOption, Hardware, Material};

/// Conjunctive material filter. `None` and empty strings impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterialFilters {
    pub group: Option<String>,
    pub category: Option<String>,
    pub thickness: Option<String>,
    /// Drop out-of-stock materials.
    pub in_stock: bool,
    /// Case-insensitive substring over name, SKU, category and full name.
    pub search: Option<String>,
}

impl MaterialFilters {
    pub fn is_empty(&self) -> bool {
        active(&self.group).is_none()
            && active(&self.category).is_none()
            && active(&self.thickness).is_none()
            && !self.in_stock
            && active(&self.search).is_none()
    }

    /// True when `material` satisfies every active clause.
    pub fn matches(&self, material: &Material) -> bool {
        if let Some(group) = active(&self.group)
            && material.group != group
        {
            return false;
        }
        if let Some(category) = active(&self.category)
            && material.category != category
        {
            return false;
        }
        if let Some(thickness) = active(&self.thickness)
            && material.thickness != thickness
        {
            return false;
        }
        if self.in_stock && material.out_of_stock {
            return false;
        }
        if let Some(search) = active(&self.search) {
            let haystack = format!(
                "{} {} {} {}",
                material.name, material.sku, material.category, material.fullname
            )
            .to_lowercase();
            if !haystack.contains(&search.to_lowercase()) {
                return false;
            }
        }
        true
    }
}

fn active(clause: &Option<String>) -> Option<&str> {
    clause.as_deref().filter(|s| !s.is_empty())
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct material groups.
pub fn material_groups(materials: &[Material]) -> Vec<String> {
    distinct_sorted(materials.iter().map(|m| m.group.as_str()))
}

/// Distinct material categories, optionally limited to one group.
pub fn material_categories(materials: &[Material], group: Option<&str>) -> Vec<String> {
    distinct_sorted(
        materials
            .iter()
            .filter(|m| group.is_none_or(|g| m.group == g))
            .map(|m| m.category.as_str()),
    )
}

/// Distinct thicknesses offered in `category`.
pub fn material_thicknesses(materials: &[Material], category: &str) -> Vec<String> {
    distinct_sorted(
        materials
            .iter()
            .filter(|m| m.category == category)
            .map(|m| m.thickness.as_str()),
    )
}

/// Distinct hardware categories.
pub fn hardware_categories(hardware: &[Hardware]) -> Vec<String> {
    distinct_sorted(hardware.iter().map(|h| h.category.as_str()))
}

/// Distinct finish types.
pub fn finish_types(finishes: &[FinishOption]) -> Vec<String> {
    distinct_sorted(finishes.iter().map(|f| f.finish_type.as_str()))
}

/// Materials matching every active clause of `filters`, in input order.
pub fn filter_materials(materials: &[Material], filters: &MaterialFilters) -> Vec<Material> {
    materials
        .iter()
        .filter(|m| filters.matches(m))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_material;

    fn catalog() -> Vec<Material> {
        let mut al = sample_material(1, "AL6061-125", "Aluminum 6061", "Aluminum", "Metals", "0.125");
        al.fullname = "0.125\" 6061-T6 Aluminum".to_string();
        let mut ss = sample_material(2, "SS304-060", "Stainless 304", "Stainless", "Metals", "0.060");
        ss.out_of_stock = true;
        let al2 = sample_material(3, "AL6061-250", "Aluminum 6061", "Aluminum", "Metals", "0.250");
        let acr = sample_material(4, "ACR-125", "Acrylic Clear", "Acrylic", "Plastics", "0.125");
        vec![al, ss, al2, acr]
    }

    #[test]
    fn test_material_groups_sorted_distinct() {
        assert_eq!(material_groups(&catalog()), vec!["Metals", "Plastics"]);
    }

    #[test]
    fn test_material_categories_with_group() {
        let materials = catalog();
        assert_eq!(
            material_categories(&materials, None),
            vec!["Acrylic", "Aluminum", "Stainless"]
        );
        assert_eq!(
            material_categories(&materials, Some("Metals")),
            vec!["Aluminum", "Stainless"]
        );
        assert!(material_categories(&materials, Some("Wood")).is_empty());
    }

    #[test]
    fn test_material_thicknesses() {
        assert_eq!(
            material_thicknesses(&catalog(), "Aluminum"),
            vec!["0.125", "0.250"]
        );
    }

    #[test]
    fn test_in_stock_excludes_out_of_stock_in_order() {
        let filters = MaterialFilters {
            in_stock: true,
            ..MaterialFilters::default()
        };
        let ids: Vec<u64> = filter_materials(&catalog(), &filters)
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![1, 3, 4]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let filters = MaterialFilters {
            search: Some("alum".to_string()),
            ..MaterialFilters::default()
        };
        let ids: Vec<u64> = filter_materials(&catalog(), &filters)
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_search_covers_fullname() {
        let filters = MaterialFilters {
            search: Some("T6".to_string()),
            ..MaterialFilters::default()
        };
        assert_eq!(filter_materials(&catalog(), &filters).len(), 1);
    }

    #[test]
    fn test_category_alone_matches_exactly() {
        let filters = MaterialFilters {
            category: Some("Aluminum".to_string()),
            ..MaterialFilters::default()
        };
        let ids: Vec<u64> = filter_materials(&catalog(), &filters)
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);

        let filters = MaterialFilters {
            category: Some("aluminum".to_string()),
            ..MaterialFilters::default()
        };
        assert!(filter_materials(&catalog(), &filters).is_empty());
    }

    #[test]
    fn test_clauses_are_conjunctive() {
        let filters = MaterialFilters {
            group: Some("Metals".to_string()),
            thickness: Some("0.125".to_string()),
            ..MaterialFilters::default()
        };
        let result = filter_materials(&catalog(), &filters);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].sku, "AL6061-125");
    }

    #[test]
    fn test_empty_strings_impose_no_constraint() {
        let filters = MaterialFilters {
            group: Some(String::new()),
            search: Some(String::new()),
            ..MaterialFilters::default()
        };
        assert!(filters.is_empty());
        assert_eq!(filter_materials(&catalog(), &filters), catalog());
    }
}
