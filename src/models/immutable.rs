// 🧊 Immutable Record - everything fixed at construction
//
// Identity: UUID generated once, in `build()`
// Values:   names, birth date, notes, tags (no setters, ever)
//
// Tags are copied element-by-element out of the caller's collection, so
// later changes to that collection are invisible here.

use crate::clock::{Clock, SystemClock};
use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

#[derive(Debug, PartialEq, Eq)]
pub struct ImmutableRecord {
    id: Uuid,
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    notes: Option<String>,
    tags: Box<[String]>,
}

impl ImmutableRecord {
    /// Start building a record. Names and birth date are mandatory.
    pub fn builder(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> ImmutableRecordBuilder {
        ImmutableRecordBuilder {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            notes: None,
            tags: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Read-only view of the tags captured at construction
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Age in whole years as of today. Recomputed on every call.
    pub fn age(&self) -> i32 {
        self.age_with(&SystemClock)
    }

    pub fn age_with(&self, clock: &impl Clock) -> i32 {
        self.age_on(clock.today())
    }

    /// Age in whole years on `today`.
    ///
    /// Year difference, minus one while the birthday is still ahead this
    /// year. A Feb 29 birthday counts as reached on Mar 1 in common years.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let mut age = today.year() - self.birth_date.year();
        if (today.month(), today.day()) < (self.birth_date.month(), self.birth_date.day()) {
            age -= 1;
        }
        age
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Collects the construction-time values; `build()` produces the record
#[derive(Debug, Clone)]
pub struct ImmutableRecordBuilder {
    first_name: String,
    last_name: String,
    birth_date: NaiveDate,
    notes: Option<String>,
    tags: Vec<String>,
}

impl ImmutableRecordBuilder {
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Copy tags out of any borrowed or owned sequence of strings.
    /// Replaces previously supplied tags.
    pub fn tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.tags = tags.into_iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    pub fn build(self) -> ImmutableRecord {
        ImmutableRecord {
            id: Uuid::new_v4(),
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            notes: self.notes,
            tags: self.tags.into_boxed_slice(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
