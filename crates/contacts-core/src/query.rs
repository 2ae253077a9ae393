//! The list query pipeline: filter → sort → paginate.
//!
//! Every stage is a pure function over an owned `Vec<Contact>`. The stages are
//! always run in that order by [`ListQuery::apply`]; an empty filter, an absent
//! sort and default pagination are each identity-like rather than skipped.

use std::cmp::Ordering;

use crate::contact::{Contact, ContactField};

/// Query-string key selecting the sort field.
pub const SORT_FIELD_PARAM: &str = "sortField";
/// Query-string key selecting the sort direction.
pub const SORT_ORDER_PARAM: &str = "sortOrder";
/// Query-string key for the 1-based page number.
pub const PAGE_PARAM: &str = "page";
/// Query-string key for the page size.
pub const PAGE_SIZE_PARAM: &str = "pageSize";

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Exact-match criteria, at most one per [`ContactField`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
  criteria: Vec<(ContactField, String)>,
}

impl Filter {
  pub fn new() -> Self { Self::default() }

  /// Build a filter from raw key/value pairs.
  ///
  /// Keys that are not a [`ContactField`] name are ignored. If a field is
  /// given more than once the first value is kept.
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
  {
    let mut filter = Self::new();
    for (key, value) in pairs {
      if let Ok(field) = key.as_ref().parse::<ContactField>() {
        filter.add(field, value);
      }
    }
    filter
  }

  /// Require `field` to equal `value`. A field that already has a criterion
  /// keeps its existing value.
  pub fn add(&mut self, field: ContactField, value: impl Into<String>) {
    if !self.criteria.iter().any(|(f, _)| *f == field) {
      self.criteria.push((field, value.into()));
    }
  }

  pub fn with(mut self, field: ContactField, value: impl Into<String>) -> Self {
    self.add(field, value);
    self
  }

  pub fn is_empty(&self) -> bool { self.criteria.is_empty() }

  /// Whether `contact` satisfies every criterion.
  pub fn matches(&self, contact: &Contact) -> bool {
    self
      .criteria
      .iter()
      .all(|(field, expected)| contact.field(*field) == expected)
  }
}

/// Keep only the contacts matching `filter`, preserving order.
pub fn filter(contacts: Vec<Contact>, filter: &Filter) -> Vec<Contact> {
  if filter.is_empty() {
    return contacts;
  }
  contacts.into_iter().filter(|c| filter.matches(c)).collect()
}

// ─── Sort ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
  #[default]
  Asc,
  Desc,
}

impl SortOrder {
  /// `"desc"` selects descending order; anything else, including an empty or
  /// differently-cased value, is ascending.
  pub fn from_param(value: &str) -> Self {
    if value == "desc" { Self::Desc } else { Self::Asc }
  }
}

/// A single-field sort request. `field: None` leaves the order untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort {
  pub field: Option<ContactField>,
  pub order: SortOrder,
}

impl Sort {
  pub fn by(field: ContactField, order: SortOrder) -> Self {
    Self {
      field: Some(field),
      order,
    }
  }

  /// Interpret raw `sortField` / `sortOrder` parameters. An empty or
  /// unrecognised field name means no sort.
  pub fn from_params(field: &str, order: &str) -> Self {
    Self {
      field: field.parse().ok(),
      order: SortOrder::from_param(order),
    }
  }
}

/// Stable sort by the requested field. Equal keys keep their input order in
/// both directions.
pub fn sort(mut contacts: Vec<Contact>, sort: &Sort) -> Vec<Contact> {
  let Some(field) = sort.field else {
    return contacts;
  };
  contacts.sort_by(|a, b| {
    let ord: Ordering = a.field(field).cmp(b.field(field));
    match sort.order {
      SortOrder::Asc => ord,
      SortOrder::Desc => ord.reverse(),
    }
  });
  contacts
}

// ─── Paginate ────────────────────────────────────────────────────────────────

/// 1-based offset pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
  pub page:      usize,
  pub page_size: usize,
}

impl Default for Pagination {
  fn default() -> Self {
    Self {
      page:      DEFAULT_PAGE,
      page_size: DEFAULT_PAGE_SIZE,
    }
  }
}

impl Pagination {
  pub fn new(page: usize, page_size: usize) -> Self { Self { page, page_size } }

  /// Interpret raw `page` / `pageSize` parameters. Missing, unparsable and
  /// non-positive values fall back to the defaults independently.
  pub fn from_params(page: Option<&str>, page_size: Option<&str>) -> Self {
    Self {
      page:      parse_positive(page).unwrap_or(DEFAULT_PAGE),
      page_size: parse_positive(page_size).unwrap_or(DEFAULT_PAGE_SIZE),
    }
  }
}

fn parse_positive(value: Option<&str>) -> Option<usize> {
  value
    .and_then(|v| v.parse::<i64>().ok())
    .filter(|n| *n >= 1)
    .and_then(|n| usize::try_from(n).ok())
}

/// Return the requested page. A page starting past the end is empty; a zero
/// page or page size returns `contacts` unchanged.
pub fn paginate(contacts: Vec<Contact>, pagination: &Pagination) -> Vec<Contact> {
  let Pagination { page, page_size } = *pagination;
  if page == 0 || page_size == 0 {
    return contacts;
  }

  let start = (page - 1).saturating_mul(page_size);
  if start >= contacts.len() {
    return Vec::new();
  }
  let end = start.saturating_add(page_size).min(contacts.len());

  contacts.into_iter().skip(start).take(end - start).collect()
}

// ─── Composite ───────────────────────────────────────────────────────────────

/// Everything [`ContactService::list`](crate::service::ContactService::list)
/// needs to select a page of contacts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
  pub filter:     Filter,
  pub sort:       Sort,
  pub pagination: Pagination,
}

impl ListQuery {
  /// Build a query from raw query-string pairs.
  ///
  /// Each control key (`sortField`, `sortOrder`, `page`, `pageSize`) uses its
  /// first occurrence. Every pair is also offered to the filter, which keeps
  /// only contact field names.
  pub fn from_pairs<K, V>(pairs: &[(K, V)]) -> Self
  where
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let first = |key: &str| {
      pairs
        .iter()
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.as_ref())
    };

    Self {
      filter:     Filter::from_pairs(
        pairs.iter().map(|(k, v)| (k.as_ref(), v.as_ref().to_owned())),
      ),
      sort:       Sort::from_params(
        first(SORT_FIELD_PARAM).unwrap_or_default(),
        first(SORT_ORDER_PARAM).unwrap_or_default(),
      ),
      pagination: Pagination::from_params(
        first(PAGE_PARAM),
        first(PAGE_SIZE_PARAM),
      ),
    }
  }

  /// Run filter, sort and paginate in sequence.
  pub fn apply(&self, contacts: Vec<Contact>) -> Vec<Contact> {
    let contacts = filter(contacts, &self.filter);
    let contacts = sort(contacts, &self.sort);
    paginate(contacts, &self.pagination)
  }
}
