pub mod analytics;
pub mod diagnostics;
pub mod feedback;
pub mod health;
