use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum_template::RenderHtml;
use serde::Serialize;
use tracing::instrument;

use super::charts::SelectionQuery;
use super::AppEngine;
use crate::dashboard::{self, ChartSlot, DropdownOption};
use crate::dataset::Dataset;

pub const PAGE_TITLE: &str = "YouTube Analytics Dashboard";

/// Context of the `index.html` template.
#[derive(Debug, Serialize)]
pub struct Page {
    pub title: &'static str,
    pub options: Vec<DropdownOption>,
    pub selected: String,
    pub layout: Vec<LayoutRow>,
}

/// One row of the chart grid.
#[derive(Debug, Serialize)]
pub struct LayoutRow {
    /// Bootstrap column width of each chart.
    pub width: u8,
    pub justify: &'static str,
    /// Chart placeholder ids.
    pub slots: Vec<&'static str>,
}

impl Page {
    pub fn new(dataset: &Dataset, query: &SelectionQuery) -> Self {
        let rows = ChartSlot::LAYOUT.len();
        let layout = ChartSlot::LAYOUT
            .iter()
            .enumerate()
            .map(|(index, row)| LayoutRow {
                width: if index == 0 { 5 } else { 4 },
                justify: if index + 1 == rows { "around" } else { "center" },
                slots: row.iter().map(|slot| slot.id()).collect(),
            })
            .collect();

        Self {
            title: PAGE_TITLE,
            options: dashboard::dropdown_options(dataset),
            selected: query.channel.value().to_string(),
            layout,
        }
    }
}

#[instrument(skip(engine, dataset))]
pub async fn index(
    engine: AppEngine, State(dataset): State<Arc<Dataset>>, Query(query): Query<SelectionQuery>,
) -> impl IntoResponse {
    RenderHtml("index.html", engine, Page::new(&dataset, &query))
}
