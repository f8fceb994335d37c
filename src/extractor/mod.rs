//! Field, list and engagement extraction.
//!
//! # Module Structure
//!
//! - `segment`: row location for repeated lists (experience, education,
//!   reactors, commenters) and the misclassified-education filter
//! - `fields`: top-card and contact-block fields
//! - `experience`: experience and education entries
//! - `current`: current title/company inference
//! - `engagement`: reactor and commenter profiles
//! - `profile`: assembles a full profile with provenance and warnings
//!
//! # Usage
//!
//! ```rust
//! use profile_lens::dom;
//! use profile_lens::extractor::{extract_engagements, EngagementKind};
//! use profile_lens::Options;
//!
//! let doc = dom::parse(r#"<ul><li class="social-details-reactors-tab-body-list-item">
//!     <a href="/in/jane/">Jane Doe</a></li></ul>"#);
//! let reactors = extract_engagements(&doc, EngagementKind::Reactor, &Options::default());
//! assert_eq!(reactors[0].profile_url, "https://www.linkedin.com/in/jane");
//! ```

pub mod current;
pub mod engagement;
pub mod experience;
pub mod fields;
pub mod profile;
pub mod segment;

pub use current::{resolve_current, CurrentPosition};
pub use engagement::{extract_engagements, EngagementKind};
pub use experience::{extract_education, extract_experiences};
pub use fields::{resolve_contact, resolve_top_card, ContactInfo, TopCard};
pub use profile::{profile_report, ProfileReport};
