mod analytics;
pub mod insights;

pub use analytics::AnalyticsService;
