//! Classify manifest records against prior publications.
//!
//! Each record is looked up in the publication store by content ID. A record
//! with no prior entries is new. A record with prior entries gets one verdict
//! per entry, so a single content ID can land in several categories when its
//! publication history is mixed.

use pubcheck_db::{find_by_content_id, StoreError};
use pubcheck_manifest::ManifestRecord;
use rusqlite::Connection;

/// How one manifest record relates to one prior publication entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Nothing in the store blocks publishing under the current identity.
    New,
    /// The current campaign and publisher already published this content.
    AlreadyPublished,
    /// A different campaign already published this content.
    OtherCampaign,
}

impl Category {
    /// Human-readable label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Category::New => "new",
            Category::AlreadyPublished => "already published by this publisher",
            Category::OtherCampaign => "published under a different campaign",
        }
    }
}

/// Content IDs grouped by verdict.
///
/// Categories appear in the order they were first assigned; within a
/// category, content IDs keep the order they were appended in. A content ID
/// appears once per matching store entry, so repeats within a group and
/// membership in several groups are both possible.
#[derive(Debug, Default)]
pub struct Classification {
    groups: Vec<(Category, Vec<String>)>,
}

impl Classification {
    fn append(&mut self, category: Category, content_id: &str) {
        match self.groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, ids)) => ids.push(content_id.to_string()),
            None => self.groups.push((category, vec![content_id.to_string()])),
        }
    }

    /// True when no record produced any verdict.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate groups in first-assigned order.
    pub fn groups(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.groups.iter().map(|(c, ids)| (*c, ids.as_slice()))
    }

    /// Content IDs assigned to `category`, in append order.
    pub fn ids_for(&self, category: Category) -> &[String] {
        self.groups
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, ids)| ids.as_slice())
            .unwrap_or(&[])
    }
}

/// Progress callbacks for classification.
pub trait ClassifyProgress {
    /// Called before each record's store lookup.
    fn on_record(&self, current: usize, total: usize, content_id: &str);
}

/// Silent progress reporter that discards all updates.
pub struct SilentClassifyProgress;

impl ClassifyProgress for SilentClassifyProgress {
    fn on_record(&self, _: usize, _: usize, _: &str) {}
}

/// Classify every manifest record against the publication store.
///
/// Records are processed in manifest order, one store lookup each. The first
/// lookup failure aborts the whole classification.
pub fn classify(
    conn: &Connection,
    records: &[ManifestRecord],
    campaign_id: &str,
    publisher_id: &str,
    progress: Option<&dyn ClassifyProgress>,
) -> Result<Classification, StoreError> {
    let mut classification = Classification::default();

    for (i, record) in records.iter().enumerate() {
        if let Some(p) = progress {
            p.on_record(i + 1, records.len(), &record.content_id);
        }

        let entries = find_by_content_id(conn, &record.content_id)?;
        if entries.is_empty() {
            classification.append(Category::New, &record.content_id);
            continue;
        }

        for entry in &entries {
            let category = if entry.campaign_id == campaign_id
                && entry.publisher_id == publisher_id
            {
                Category::AlreadyPublished
            } else if entry.campaign_id != campaign_id {
                Category::OtherCampaign
            } else {
                // Same campaign under a different publisher does not block
                // this publisher.
                Category::New
            };
            classification.append(category, &record.content_id);
        }
    }

    Ok(classification)
}
