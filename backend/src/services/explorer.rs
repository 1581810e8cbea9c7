//! Filtered, paginated catalog browsing.

use crate::api::ExplorerData;
use crate::db::{CatalogRepository, RepositoryResult};
use crate::models::PlanetRecord;
use crate::transformations::{paginate, PlanetFilter};

/// Apply `filter`, then cut out page `page` of `per_page` records.
pub fn explore(
    planets: &[PlanetRecord],
    filter: &PlanetFilter,
    page: usize,
    per_page: usize,
) -> ExplorerData {
    let matching = filter.apply(planets);
    ExplorerData {
        page: paginate(&matching, page, per_page),
        filter: filter.clone(),
    }
}

pub async fn get_explorer_data(
    repo: &dyn CatalogRepository,
    filter: &PlanetFilter,
    page: usize,
    per_page: usize,
) -> RepositoryResult<ExplorerData> {
    let planets = repo.load_planets().await?;
    Ok(explore(&planets, filter, page, per_page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Disposition;
    use crate::transformations::Range;

    fn catalog() -> Vec<PlanetRecord> {
        (0..250)
            .map(|i| {
                let disposition = if i % 2 == 0 {
                    Disposition::Confirmed
                } else {
                    Disposition::Candidate
                };
                PlanetRecord::new(format!("K{:05}.01", i))
                    .with_disposition(disposition)
                    .with_radius(i as f64 / 10.0)
            })
            .collect()
    }

    #[test]
    fn test_unfiltered_paging() {
        let data = explore(&catalog(), &PlanetFilter::new(), 3, 100);

        assert_eq!(data.page.total_items, 250);
        assert_eq!(data.page.total_pages, 3);
        assert_eq!(data.page.items.len(), 50);
        assert_eq!(data.page.items[0].kepoi_name, "K00200.01");
    }

    #[test]
    fn test_filter_then_page() {
        let filter = PlanetFilter::new()
            .with_disposition(Disposition::Confirmed)
            .with_radius(Range::new("radius", 0.0, 4.9).unwrap());

        let data = explore(&catalog(), &filter, 1, 24);

        // even indices 0..=48
        assert_eq!(data.page.total_items, 25);
        assert_eq!(data.page.items.len(), 24);
        assert_eq!(data.page.total_pages, 2);
        assert_eq!(data.filter, filter);
    }
}
