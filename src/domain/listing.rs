//! Resource-independent building blocks of list queries.
//!
//! A list query is a [`ListFilter`] (search, status and date constraints
//! combined with AND), a [`SortDirective`] over a per-resource allow-list of
//! sortable fields, and a [`PageWindow`]. The repository turns one of these
//! into a filtered count plus a filtered, sorted, windowed page.

use std::fmt::{Display, Formatter};

use crate::domain::types::TypeConstraintError;
use crate::pagination::PageWindow;

/// Status value meaning "no status constraint".
pub const ALL_STATUSES: &str = "all";

/// Direction of the primary sort key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Accepts exactly `asc` or `desc`.
    pub fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        match value {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "sortOrder '{other}' must be 'asc' or 'desc'"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Allow-list of sortable fields for one resource.
///
/// Implementors are plain enums; `ALLOWED` maps the public (camelCase) field
/// name to the variant, so nothing outside the list ever reaches the store.
pub trait SortField: Copy + PartialEq + std::fmt::Debug + 'static {
    const ALLOWED: &'static [(&'static str, Self)];

    fn parse(value: &str) -> Result<Self, TypeConstraintError> {
        Self::ALLOWED
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, field)| *field)
            .ok_or_else(|| {
                let allowed = Self::ALLOWED
                    .iter()
                    .map(|(name, _)| *name)
                    .collect::<Vec<_>>()
                    .join(", ");
                TypeConstraintError::InvalidValue(format!(
                    "sortBy '{value}' must be one of {allowed}"
                ))
            })
    }

    fn as_str(self) -> &'static str {
        Self::ALLOWED
            .iter()
            .find(|(_, field)| *field == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }
}

/// Per-resource configuration of the list query engine.
pub trait ListResource {
    type SortField: SortField;

    /// Key of the item array in the response envelope.
    const COLLECTION: &'static str;
    const DEFAULT_SORT: Self::SortField;
    const DEFAULT_ORDER: SortOrder;
    /// Whether the resource accepts an exact `date` constraint.
    const DATE_FILTER: bool = false;
}

/// Case-insensitive (Unicode lowercase) literal substring search term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTerm(String);

/// Escape character used in generated `LIKE` patterns.
pub const LIKE_ESCAPE: char = '\\';

impl SearchTerm {
    /// Returns `None` for an empty term, which imposes no constraint.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.is_empty() { None } else { Some(Self(value)) }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased `LIKE` pattern matching the term anywhere, with `%`, `_`
    /// and the escape character itself taken literally. Compared against
    /// lowercased columns.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.to_lowercase().chars() {
            if matches!(ch, '%' | '_') || ch == LIKE_ESCAPE {
                pattern.push(LIKE_ESCAPE);
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }
}

/// Predicate shared by all list endpoints. Every present field is ANDed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub search: Option<SearchTerm>,
    /// Exact, case-sensitive status label.
    pub status: Option<String>,
    /// Exact date string.
    pub date: Option<String>,
}

impl ListFilter {
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = SearchTerm::new(term);
        self
    }

    /// `"all"` and the empty string clear the constraint.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        let status = status.into();
        self.status = if status.is_empty() || status == ALL_STATUSES {
            None
        } else {
            Some(status)
        };
        self
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        let date = date.into();
        self.date = if date.is_empty() { None } else { Some(date) };
        self
    }

    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_ref().map(SearchTerm::like_pattern)
    }
}

/// Primary sort key and direction; repositories append a creation time and
/// id tie-break so page boundaries are stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortDirective<F> {
    pub field: F,
    pub order: SortOrder,
}

/// Complete list request for one resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery<F> {
    pub filter: ListFilter,
    pub sort: SortDirective<F>,
    pub window: PageWindow,
}

impl<F: SortField> ListQuery<F> {
    /// Query with no constraints, the given sort and the default window.
    pub fn new(field: F, order: SortOrder) -> Self {
        Self {
            filter: ListFilter::default(),
            sort: SortDirective { field, order },
            window: PageWindow::default(),
        }
    }

    /// Query using the resource's default sort.
    pub fn for_resource<R>() -> Self
    where
        R: ListResource<SortField = F>,
    {
        Self::new(R::DEFAULT_SORT, R::DEFAULT_ORDER)
    }

    pub fn filter(mut self, filter: ListFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn sort(mut self, field: F, order: SortOrder) -> Self {
        self.sort = SortDirective { field, order };
        self
    }

    pub fn paginate(mut self, window: PageWindow) -> Self {
        self.window = window;
        self
    }
}
