use std::cmp::Reverse;

use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::dataset::Dataset;
use crate::model::{Selection, VideoRecord, ALL};

pub use chart::*;

mod chart;

/// How many videos the best and worst performing charts show.
pub const RANK_LIMIT: usize = 9;

/// Videos of the selected channel in table order, or every video for [Selection::All].
pub fn filter<'a>(videos: &'a [VideoRecord], selection: &Selection) -> Vec<&'a VideoRecord> {
    videos.iter().filter(|video| selection.includes(video)).collect()
}

/// The most viewed videos, most viewed first. Ties keep table order.
pub fn best_performing<'a>(videos: &[&'a VideoRecord]) -> Vec<&'a VideoRecord> {
    let mut ranked = videos.to_vec();
    ranked.sort_by_key(|video| Reverse(video.view_count));
    ranked.truncate(RANK_LIMIT);
    ranked
}

/// The least viewed videos, least viewed first. Ties keep table order.
pub fn worst_performing<'a>(videos: &[&'a VideoRecord]) -> Vec<&'a VideoRecord> {
    let mut ranked = videos.to_vec();
    ranked.sort_by_key(|video| video.view_count);
    ranked.truncate(RANK_LIMIT);
    ranked
}

/// The dataset as seen through one dropdown selection.
#[derive(Debug, Clone)]
pub struct View<'a> {
    dataset: &'a Dataset,
    selection: &'a Selection,
    videos: Vec<&'a VideoRecord>,
}

impl<'a> View<'a> {
    pub fn new(dataset: &'a Dataset, selection: &'a Selection) -> Self {
        let videos = filter(dataset.videos(), selection);
        Self {
            dataset,
            selection,
            videos,
        }
    }

    pub fn videos(&self) -> &[&'a VideoRecord] {
        &self.videos
    }

    pub fn chart(&self, slot: ChartSlot) -> ChartSpec {
        let selection = self.selection;

        match slot {
            ChartSlot::SubscriberCountGraph | ChartSlot::ViewCountGraph => {
                ChartSpec::build(slot, self.dataset.channels(), selection)
            }
            ChartSlot::ViewCountViolin | ChartSlot::ViewCommentScatter | ChartSlot::ViewLikeScatter => {
                ChartSpec::build(slot, self.videos.iter().copied(), selection)
            }
            ChartSlot::BestPerforming => {
                ChartSpec::build(slot, best_performing(&self.videos), selection)
            }
            ChartSlot::WorstPerforming => {
                ChartSpec::build(slot, worst_performing(&self.videos), selection)
            }
        }
    }

    pub fn charts(&self) -> Vec<ChartSpec> {
        ChartSlot::ALL.into_iter().map(|slot| self.chart(slot)).collect()
    }
}

/// Everything the page needs to redraw after a selection change.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub selection: Selection,
    pub title_suffix: String,
    pub charts: Vec<ChartView>,
}

/// A chart as sent to the browser: the spec together with its rendered figure.
#[derive(Debug, Clone, Serialize)]
pub struct ChartView {
    pub id: ChartSlot,
    pub spec: ChartSpec,
    pub figure: Value,
}

impl ChartView {
    pub fn new(spec: ChartSpec, theme: &Theme) -> Self {
        let figure = spec.figure(theme);
        Self {
            id: spec.slot,
            spec,
            figure,
        }
    }
}

#[instrument(skip(dataset, theme))]
pub fn assemble(dataset: &Dataset, selection: &Selection, theme: &Theme) -> Dashboard {
    let view = View::new(dataset, selection);
    tracing::debug!(videos = view.videos().len(), "selected videos for `{}`", selection);

    let charts = view
        .charts()
        .into_iter()
        .map(|spec| ChartView::new(spec, theme))
        .collect();

    Dashboard {
        selection: selection.clone(),
        title_suffix: selection.title_suffix().to_string(),
        charts,
    }
}

/// An entry of the channel dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

impl DropdownOption {
    fn channel(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: name.to_string(),
        }
    }
}

/// "All" followed by every distinct channel name.
pub fn dropdown_options(dataset: &Dataset) -> Vec<DropdownOption> {
    std::iter::once(ALL)
        .chain(dataset.channel_names())
        .map(DropdownOption::channel)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cell, ChannelStats};

    fn video(channel: &str, title: &str, views: u64) -> VideoRecord {
        VideoRecord::new(channel.into(), title.into(), views, Some(views / 10), Some(views / 100))
    }

    fn titles(videos: &[&VideoRecord]) -> Vec<String> {
        videos.iter().map(|video| video.title.clone()).collect()
    }

    fn example() -> Dataset {
        Dataset::new(
            vec![
                ChannelStats::new("A".into(), 100, 300),
                ChannelStats::new("B".into(), 200, 50),
            ],
            vec![video("A", "a1", 100), video("B", "b1", 50), video("A", "a2", 200)],
        )
    }

    #[test]
    fn all_is_identity() {
        let dataset = example();
        let videos = filter(dataset.videos(), &Selection::All);

        assert_eq!(videos, dataset.videos().iter().collect::<Vec<_>>());
    }

    #[test]
    fn filter_keeps_channel_rows_in_order() {
        let dataset = example();
        let videos = filter(dataset.videos(), &Selection::from("A"));

        assert_eq!(titles(&videos), vec!["a1", "a2"]);
        assert!(videos.iter().all(|video| video.channel_title == "A"));
    }

    #[test]
    fn unknown_channel_filters_everything() {
        let dataset = example();
        assert!(filter(dataset.videos(), &Selection::from("Nobody")).is_empty());
    }

    #[test]
    fn best_performing_of_selection() {
        let dataset = example();
        let videos = filter(dataset.videos(), &Selection::from("A"));

        assert_eq!(titles(&best_performing(&videos)), vec!["a2", "a1"]);
        assert_eq!(titles(&worst_performing(&videos)), vec!["a1", "a2"]);
    }

    #[test]
    fn ranking_is_limited_to_nine() {
        let videos: Vec<VideoRecord> = (0..20).map(|i| video("A", &format!("v{i}"), i)).collect();
        let videos: Vec<&VideoRecord> = videos.iter().collect();

        let best = best_performing(&videos);
        let worst = worst_performing(&videos);

        assert_eq!(best.len(), RANK_LIMIT);
        assert_eq!(best.first().map(|v| v.view_count), Some(19));
        assert_eq!(best.last().map(|v| v.view_count), Some(11));
        assert_eq!(worst.len(), RANK_LIMIT);
        assert_eq!(worst.first().map(|v| v.view_count), Some(0));
        assert_eq!(worst.last().map(|v| v.view_count), Some(8));
    }

    #[test]
    fn ranking_returns_everything_when_short() {
        let videos = [video("A", "only", 5)];
        let videos: Vec<&VideoRecord> = videos.iter().collect();

        assert_eq!(best_performing(&videos).len(), 1);
        assert!(best_performing(&[]).is_empty());
    }

    #[test]
    fn ties_keep_table_order() {
        let videos = [
            video("A", "first", 7),
            video("A", "low", 1),
            video("A", "second", 7),
            video("A", "third", 7),
        ];
        let videos: Vec<&VideoRecord> = videos.iter().collect();

        assert_eq!(titles(&best_performing(&videos)), vec!["first", "second", "third", "low"]);
        assert_eq!(titles(&worst_performing(&videos)), vec!["low", "first", "second", "third"]);
    }

    #[test]
    fn assemble_every_slot_in_order() {
        let dashboard = assemble(&example(), &Selection::from("A"), &Theme::default());

        let ids: Vec<ChartSlot> = dashboard.charts.iter().map(|chart| chart.id).collect();
        assert_eq!(ids, ChartSlot::ALL.to_vec());
        assert_eq!(dashboard.title_suffix, "A");
    }

    #[test]
    fn channel_charts_ignore_the_filter() {
        let dataset = example();
        let selection = Selection::from("A");
        let view = View::new(&dataset, &selection);

        let subscribers = view.chart(ChartSlot::SubscriberCountGraph);
        assert_eq!(subscribers.series.x, vec![Cell::from("A"), Cell::from("B")]);
        assert_eq!(subscribers.colors, Some(vec!["red", "grey"]));

        let best = view.chart(ChartSlot::BestPerforming);
        assert_eq!(best.series.x, vec![Cell::from("a2"), Cell::from("a1")]);
        assert_eq!(best.highlight, None);
    }

    #[test]
    fn unknown_channel_renders_empty_video_charts() {
        let dashboard = assemble(&example(), &Selection::from("Nobody"), &Theme::default());

        for chart in &dashboard.charts {
            if chart.spec.slot.highlights_selection() {
                assert_eq!(chart.spec.series.len(), 2);
            } else {
                assert!(chart.spec.series.is_empty(), "{} should be empty", chart.id);
            }
        }
    }

    #[test]
    fn scatter_plots_bind_counts() {
        let dataset = example();
        let view = View::new(&dataset, &Selection::All);

        let comments = view.chart(ChartSlot::ViewCommentScatter);
        assert_eq!(comments.kind, ChartKind::Scatter);
        assert_eq!(comments.series.x, vec![Cell::from(100_u64), Cell::from(50_u64), Cell::from(200_u64)]);
        assert_eq!(comments.series.y, vec![Cell::from(1_u64), Cell::from(0_u64), Cell::from(2_u64)]);
    }

    #[test]
    fn dropdown_starts_with_all() {
        let options = dropdown_options(&example());
        let values: Vec<&str> = options.iter().map(|option| option.value.as_str()).collect();

        assert_eq!(values, vec!["All", "A", "B"]);
    }
}
