use crate::analytics::SalesReport;
use crate::data_provider::LeagueDataProvider;
use crate::error::LeagueResult;
use cached::proc_macro::cached;

pub use cached::Cached;

#[cfg(test)]
pub async fn clear_all_caches() {
    SALES_REPORT_CACHE.lock().await.cache_clear();
}

#[cfg(test)]
#[derive(Debug)]
pub struct CacheStats {
    pub sales_report_entries: usize,
}

#[cfg(test)]
pub async fn cache_stats() -> CacheStats {
    CacheStats {
        sales_report_entries: SALES_REPORT_CACHE.lock().await.cache_size(),
    }
}

/// The sales report never changes while the process runs, so it is kept for
/// five minutes
#[allow(clippy::unused_unit)]
#[cached(
    name = "SALES_REPORT_CACHE",
    type = "cached::TimedSizedCache<(), SalesReport>",
    create = "{ cached::TimedSizedCache::with_size_and_lifespan(1, 300) }",
    convert = r#"{ () }"#,
    result = true
)]
pub async fn fetch_sales_report_cached(
    provider: &dyn LeagueDataProvider,
) -> LeagueResult<SalesReport> {
    provider.sales_report().await
}

pub async fn refresh_sales_report(
    provider: &dyn LeagueDataProvider,
) -> LeagueResult<SalesReport> {
    SALES_REPORT_CACHE.lock().await.cache_clear();
    fetch_sales_report_cached(provider).await
}
