use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use snafu::ResultExt;
use tracing::instrument;

use super::{App, Result, UnknownChartSnafu};
use crate::dashboard::{self, ChartSlot, ChartView, Dashboard, DropdownOption, View};
use crate::dataset::Dataset;
use crate::model::Selection;

#[derive(Debug, Deserialize)]
pub struct SelectionQuery {
    #[serde(default)]
    pub channel: Selection,
}

#[instrument(skip(dataset))]
pub async fn channels(State(dataset): State<Arc<Dataset>>) -> Json<Vec<DropdownOption>> {
    Json(dashboard::dropdown_options(&dataset))
}

#[instrument(skip(app))]
pub async fn render(State(app): State<App>, Query(query): Query<SelectionQuery>) -> Json<Dashboard> {
    tracing::info!("render dashboard for `{}`", query.channel);
    Json(dashboard::assemble(app.dataset(), &query.channel, &app.theme))
}

#[instrument(skip(app))]
pub async fn render_chart(
    State(app): State<App>, Path(slot): Path<String>, Query(query): Query<SelectionQuery>,
) -> Result<Json<ChartView>> {
    let chart: ChartSlot = slot.parse().context(UnknownChartSnafu { slot: &slot })?;

    let spec = View::new(app.dataset(), &query.channel).chart(chart);
    Ok(Json(ChartView::new(spec, &app.theme)))
}
