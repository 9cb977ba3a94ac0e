pub mod categories;
pub mod exams;
pub mod topics;
pub mod users;

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tabled::{Table, Tabled};
use tracing::{debug, info};

use crate::cli::api_client::ApiClient;
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, field_names, page_footer};
use crate::view::{FieldName, ListView, Page, Record, SortOrder, SortState};

/// Where a list command gets its records from
#[derive(Clone, Copy)]
pub enum DataSource<'a> {
    /// Built-in demo data
    Mock,
    /// JSON array on disk
    File(&'a Path),
    /// `GET {api_url}/{resource}`
    Remote(&'a ApiClient),
}

/// Common search, sort and page parameters for all list commands
#[derive(Debug, Clone)]
pub struct ListParams<'a> {
    pub search: Option<&'a str>,
    pub sort: Option<&'a str>,
    pub order: Option<&'a str>,
    pub page: usize,
    pub page_size: usize,
    /// Show records the resource normally hides
    pub include_hidden: bool,
}

impl Default for ListParams<'_> {
    fn default() -> Self {
        Self {
            search: None,
            sort: None,
            order: None,
            page: 1,
            page_size: 10,
            include_hidden: false,
        }
    }
}

/// Static description of one record kind
pub(crate) struct Resource<R: Record> {
    /// Plural name, also the API path
    pub name: &'static str,
    pub mock: fn() -> Vec<R>,
    pub search_fields: &'static [R::Field],
    pub default_sort: Option<R::Field>,
    /// Records left out unless `include_hidden` is set
    pub hidden: Option<fn(&R) -> bool>,
}

pub(crate) async fn load_records<R>(
    resource: &Resource<R>,
    source: DataSource<'_>,
) -> CliResult<Vec<R>>
where
    R: Record + DeserializeOwned,
{
    match source {
        DataSource::Mock => Ok((resource.mock)()),
        DataSource::File(path) => {
            let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|e| CliError::InvalidFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
        DataSource::Remote(api_client) => api_client.fetch_collection(resource.name).await,
    }
}

pub(crate) fn parse_field<F: FieldName>(resource: &str, name: &str) -> CliResult<F> {
    F::from_name(name).ok_or_else(|| CliError::UnknownField {
        resource: resource.to_string(),
        field: name.to_string(),
        valid: field_names::<F>(),
    })
}

/// Load, search, sort and page one record kind, then render it
pub(crate) async fn list_records<R, D>(
    resource: &Resource<R>,
    source: DataSource<'_>,
    params: &ListParams<'_>,
    format: &str,
) -> CliResult<String>
where
    R: Record + DeserializeOwned + Serialize + 'static,
    D: Tabled + for<'r> From<&'r R>,
{
    let sort_key = match params.sort {
        Some(name) => Some(parse_field::<R::Field>(resource.name, name)?),
        None => resource.default_sort,
    };
    let order = match params.order {
        Some(order) => order.parse::<SortOrder>()?,
        None => SortOrder::Asc,
    };

    let records = load_records(resource, source).await?;
    let mut view = ListView::new(
        records,
        resource.search_fields.to_vec(),
        SortState::new(sort_key, order),
        params.page_size,
    )?;
    debug!(
        resource = resource.name,
        count = view.data().len(),
        search_fields = ?view.search_fields(),
        "Loaded records"
    );
    if let (Some(hidden), false) = (resource.hidden, params.include_hidden) {
        view.set_predicate(move |record| !hidden(record));
    }
    if let Some(query) = params.search {
        view.set_query(query);
    }
    let last_page = view.paginator().total_pages();
    view.go_to_page(params.page.clamp(1, last_page));

    let page = view.page();
    info!(
        resource = resource.name,
        matched = view.matched(),
        page = page.page,
        total_pages = page.total_pages,
        "Listing records"
    );

    match format {
        "json" => Ok(serde_json::to_string_pretty(&page)?),
        _ => Ok(format_table::<R, D>(resource.name, &page)),
    }
}

pub(crate) fn format_table<R, D>(resource: &str, page: &Page<&R>) -> String
where
    D: Tabled + for<'r> From<&'r R>,
{
    if page.items.is_empty() {
        return format!("No {} found.", resource);
    }

    let display: Vec<D> = page.items.iter().map(|record| D::from(*record)).collect();
    let mut table = Table::new(display);
    apply_table_style(&mut table);
    format!("{}\n{}", table, page_footer(page))
}

/// One field name per line
pub(crate) fn list_fields<F: FieldName>() -> String {
    F::ALL
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>()
        .join("\n")
}


#[cfg(test)]
#[path = "exams_test.rs"]
mod exams_test;
