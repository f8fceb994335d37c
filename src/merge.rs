//! Combining extractions of the same profile.
//!
//! A caller that keeps an earlier extraction and re-reads the page later
//! (or reads the contact modal separately) overlays the fresher record on
//! the older one: a field the fresher read resolved wins, a field it missed
//! keeps the older value.

use crate::result::ProfileExtraction;

/// First `Some` across ordered sources.
///
/// ```
/// use profile_lens::merge::first_present;
///
/// assert_eq!(first_present([None, Some(2), Some(3)]), Some(2));
/// assert_eq!(first_present::<u8>([None, None]), None);
/// ```
pub fn first_present<T>(sources: impl IntoIterator<Item = Option<T>>) -> Option<T> {
    sources.into_iter().flatten().next()
}

/// First non-empty list across ordered sources, or an empty list.
fn first_non_empty<T>(sources: impl IntoIterator<Item = Vec<T>>) -> Vec<T> {
    sources
        .into_iter()
        .find(|v| !v.is_empty())
        .unwrap_or_default()
}

impl ProfileExtraction {
    /// Overlay `fresher` on `self`, field by field.
    ///
    /// Scalar fields take the fresher value when present. Lists are replaced
    /// as a whole when the fresher list is non-empty. A count follows its
    /// summary text so the two never disagree.
    #[must_use]
    pub fn overlay(&self, fresher: &ProfileExtraction) -> ProfileExtraction {
        let pick = |newer: &Option<String>, older: &Option<String>| {
            first_present([newer.clone(), older.clone()])
        };

        let (connections_text, connection_count) = if fresher.connections_text.is_some() {
            (fresher.connections_text.clone(), fresher.connection_count)
        } else {
            (self.connections_text.clone(), self.connection_count)
        };
        let (followers_text, follower_count) = if fresher.followers_text.is_some() {
            (fresher.followers_text.clone(), fresher.follower_count)
        } else {
            (self.followers_text.clone(), self.follower_count)
        };

        // Current position fields describe one role; take them together
        let current = if fresher.current_company.is_some() || fresher.current_title.is_some() {
            fresher
        } else {
            self
        };

        ProfileExtraction {
            full_name: pick(&fresher.full_name, &self.full_name),
            headline: pick(&fresher.headline, &self.headline),
            location: pick(&fresher.location, &self.location),
            profile_image_url: pick(&fresher.profile_image_url, &self.profile_image_url),
            profile_url: pick(&fresher.profile_url, &self.profile_url),
            about: pick(&fresher.about, &self.about),
            current_title: current.current_title.clone(),
            current_company: current.current_company.clone(),
            current_company_url: current.current_company_url.clone(),
            current_company_started_at: current.current_company_started_at.clone(),
            experiences: first_non_empty([fresher.experiences.clone(), self.experiences.clone()]),
            education: first_non_empty([fresher.education.clone(), self.education.clone()]),
            email: pick(&fresher.email, &self.email),
            phone_numbers: first_non_empty([fresher.phone_numbers.clone(), self.phone_numbers.clone()]),
            birthday: pick(&fresher.birthday, &self.birthday),
            websites: first_non_empty([fresher.websites.clone(), self.websites.clone()]),
            connections_text,
            connection_count,
            followers_text,
            follower_count,
        }
    }

    /// Overlay every record in order; later records are fresher.
    ///
    /// Returns `None` for an empty input.
    pub fn merge_all<'a>(records: impl IntoIterator<Item = &'a ProfileExtraction>) -> Option<ProfileExtraction> {
        records
            .into_iter()
            .fold(None, |acc: Option<ProfileExtraction>, next| match acc {
                Some(older) => Some(older.overlay(next)),
                None => Some(next.clone()),
            })
    }
}
