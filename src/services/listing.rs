//! Turns raw list query parameters into a typed [`ListQuery`].

use crate::domain::listing::{ListFilter, ListQuery, ListResource, SortField, SortOrder};
use crate::dto::api::{ListEnvelope, ListParams};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE, PageWindow, PaginationMeta};
use crate::services::{ServiceError, ServiceResult};

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn positive(name: &str, value: &Option<String>, default: usize) -> ServiceResult<usize> {
    match provided(value) {
        Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
            ServiceError::Validation(format!("{name} must be a positive integer"))
        }),
        None => Ok(default),
    }
}

/// Resolves filter, sort and window for resource `R`.
///
/// Blank parameters fall back to the resource defaults; an unknown sort
/// field, a sort order other than `asc`/`desc`, or a page or limit below one
/// is a validation error.
pub fn build_list_query<R>(params: &ListParams) -> ServiceResult<ListQuery<R::SortField>>
where
    R: ListResource,
{
    let field = match provided(&params.sort_by) {
        Some(name) => R::SortField::parse(name)?,
        None => R::DEFAULT_SORT,
    };
    let order = match provided(&params.sort_order) {
        Some(order) => SortOrder::parse(order)?,
        None => R::DEFAULT_ORDER,
    };

    let page = positive("page", &params.page, DEFAULT_PAGE)?;
    let limit = positive("limit", &params.limit, DEFAULT_ITEMS_PER_PAGE)?;
    let window = PageWindow::new(page, limit)?;

    let mut filter = ListFilter::default();
    if let Some(search) = provided(&params.search) {
        filter = filter.search(search);
    }
    if let Some(status) = provided(&params.status) {
        filter = filter.status(status);
    }
    if let Some(date) = provided(&params.date).filter(|_| R::DATE_FILTER) {
        filter = filter.date(date);
    }

    Ok(ListQuery::new(field, order).filter(filter).paginate(window))
}

/// Wraps a loaded page and its total into the response envelope.
pub fn envelope<T>(query_window: PageWindow, total: usize, items: Vec<T>) -> ListEnvelope<T> {
    ListEnvelope {
        items,
        pagination: PaginationMeta::new(total, query_window),
    }
}
