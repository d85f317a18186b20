pub mod chart_service;
pub mod series_cache;
pub mod stats_service;
