mod analytics;
mod document;
mod feedback;

pub use analytics::*;
pub use document::*;
pub use feedback::*;
