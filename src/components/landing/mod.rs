//! Static landing page for the civic assistant.
//!
//! Sections, in order: hero, mission, about with impact stats, goals,
//! features (each opens a detail modal), team, testimonials, how it works
//! and footer.

mod content;
mod page;

pub use content::LandingContent;
pub use page::Landing;
