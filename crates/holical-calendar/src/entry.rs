//! Enriched calendar entries and long-holiday groups.

use std::sync::{Arc, Weak};

use holical_time::Date;
use serde::{Serialize, Serializer};

/// Category of an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// A real holiday carrying its raw category (e.g. `"inamovible"`).
    Holiday(String),
    /// A Saturday or Sunday synthesized to complete a long-holiday group.
    Weekend,
}

impl Category {
    /// Serialized label: the raw category, or `"Weekend"`.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Holiday(raw) => raw,
            Category::Weekend => "Weekend",
        }
    }

    /// Return `true` for synthesized weekend entries.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Category::Weekend)
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One enriched calendar day: a real holiday or a synthesized weekend day.
///
/// Every derived field is a function of `date` and the evaluation date
/// the entry was built against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// The calendar day.
    pub date: Date,
    /// Raw category, or [`Category::Weekend`] for synthesized entries.
    pub category: Category,
    /// Display label; the weekday name for synthesized entries.
    pub name: String,
    /// Long display form, e.g. `"Thursday, 1 May 2025"`.
    pub formatted_date: String,
    /// English weekday name.
    pub weekday_name: &'static str,
    /// English month name.
    pub month_name: &'static str,
    /// Year component of `date`.
    pub year: u16,
    /// Month component of `date` (1–12).
    pub month: u8,
    /// Day-of-month component of `date`.
    pub day: u8,
    /// `true` iff `date` is the evaluation date.
    pub is_today: bool,
    /// Whole days from the evaluation date to `date`; negative in the past.
    pub days_until: i32,
    #[serde(rename = "group", skip_serializing_if = "is_not_owner")]
    link: Option<Link>,
}

/// How an entry reaches its block.
///
/// Calendar entries own a handle on the block.  The copies stored inside the
/// block point back at it weakly, so a block never keeps itself alive.
#[derive(Debug, Clone)]
enum Link {
    Owner(Group),
    Member(Weak<Vec<Entry>>),
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Link::Owner(a), Link::Owner(b)) => a == b,
            // The enclosing group compares the block itself.
            (Link::Member(_), Link::Member(_)) => true,
            _ => false,
        }
    }
}

impl Serialize for Link {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Link::Owner(group) => group.serialize(serializer),
            Link::Member(_) => serializer.serialize_none(),
        }
    }
}

// Block members are written once, by the group that holds them.
fn is_not_owner(link: &Option<Link>) -> bool {
    !matches!(link, Some(Link::Owner(_)))
}

impl Entry {
    /// Build an entry for a real holiday.
    pub fn holiday(
        date: Date,
        category: impl Into<String>,
        name: impl Into<String>,
        today: Date,
    ) -> Self {
        Self::build(date, Category::Holiday(category.into()), name.into(), today)
    }

    /// Build a synthesized weekend entry named after its weekday.
    pub fn weekend(date: Date, today: Date) -> Self {
        Self::build(date, Category::Weekend, date.weekday().name().to_owned(), today)
    }

    fn build(date: Date, category: Category, name: String, today: Date) -> Self {
        Self {
            date,
            category,
            name,
            formatted_date: date.long_format(),
            weekday_name: date.weekday().name(),
            month_name: date.month_of_year().name(),
            year: date.year(),
            month: date.month(),
            day: date.day_of_month(),
            is_today: date == today,
            days_until: today.days_between(date),
            link: None,
        }
    }

    /// Return `true` for synthesized weekend entries.
    pub fn is_synthetic(&self) -> bool {
        self.category.is_weekend()
    }

    /// The long-holiday block this entry belongs to, if any.
    ///
    /// Every member of a block, synthesized weekend days included, returns
    /// the same block.  A member copied out of its block returns `None` once
    /// the last handle on that block is dropped.
    pub fn group(&self) -> Option<Group> {
        match self.link.as_ref()? {
            Link::Owner(group) => Some(group.clone()),
            Link::Member(block) => block.upgrade().map(Group),
        }
    }

    /// Attach `group` to a calendar entry, replacing any previous link.
    pub(crate) fn set_group(&mut self, group: Option<Group>) {
        self.link = group.map(Link::Owner);
    }
}

/// A long-holiday block: two or more cross-linked entries covering
/// consecutive calendar days, ordered by date.
///
/// Cloning is cheap: every calendar entry of the block holds a clone of the
/// same allocation, and the members stored inside it link back to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Group(Arc<Vec<Entry>>);

impl Group {
    /// Wrap `members`, or return `None` for fewer than two members.
    pub(crate) fn new(members: Vec<Entry>) -> Option<Self> {
        if members.len() < 2 {
            return None;
        }
        let block = Arc::new_cyclic(|block: &Weak<Vec<Entry>>| {
            members
                .into_iter()
                .map(|mut member| {
                    member.link = Some(Link::Member(block.clone()));
                    member
                })
                .collect()
        });
        Some(Group(block))
    }

    /// The members in date order.
    pub fn members(&self) -> &[Entry] {
        &self.0
    }

    /// Iterate over the members in date order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.0.iter()
    }

    /// Total length of the block in days, weekend days included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; groups hold at least two members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First day of the block.
    pub fn start(&self) -> Date {
        self.0[0].date
    }

    /// Last day of the block.
    pub fn end(&self) -> Date {
        self.0[self.0.len() - 1].date
    }

    /// Return `true` if `date` is one of the members.
    pub fn contains(&self, date: Date) -> bool {
        self.0.binary_search_by_key(&date, |e| e.date).is_ok()
    }

    /// The real holidays of the block.
    pub fn holidays(&self) -> impl Iterator<Item = &Entry> {
        self.0.iter().filter(|e| !e.is_synthetic())
    }

    /// The synthesized weekend days of the block.
    pub fn weekend_days(&self) -> impl Iterator<Item = &Entry> {
        self.0.iter().filter(|e| e.is_synthetic())
    }

    /// Return `true` if `self` and `other` are the same shared block.
    pub fn same_block(&self, other: &Group) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Group {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}
