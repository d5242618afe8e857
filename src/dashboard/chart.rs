use derive_new::new;
use serde::Serialize;
use serde_json::{json, Value};
use snafu::Snafu;

use crate::model::{Cell, Field, Row, Selection};

/// One of the seven chart regions of the page, identified by the id of its placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChartSlot {
    SubscriberCountGraph,
    ViewCountGraph,
    ViewCountViolin,
    ViewCommentScatter,
    ViewLikeScatter,
    BestPerforming,
    WorstPerforming,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 7] = [
        ChartSlot::SubscriberCountGraph,
        ChartSlot::ViewCountGraph,
        ChartSlot::ViewCountViolin,
        ChartSlot::ViewCommentScatter,
        ChartSlot::ViewLikeScatter,
        ChartSlot::BestPerforming,
        ChartSlot::WorstPerforming,
    ];

    /// Rows of the page grid, top to bottom.
    pub const LAYOUT: [&'static [ChartSlot]; 3] = [
        &[ChartSlot::SubscriberCountGraph, ChartSlot::ViewCountGraph],
        &[
            ChartSlot::ViewCountViolin,
            ChartSlot::ViewCommentScatter,
            ChartSlot::ViewLikeScatter,
        ],
        &[ChartSlot::BestPerforming, ChartSlot::WorstPerforming],
    ];

    pub fn id(self) -> &'static str {
        match self {
            ChartSlot::SubscriberCountGraph => "subscriber-count-graph",
            ChartSlot::ViewCountGraph => "view-count-graph",
            ChartSlot::ViewCountViolin => "view-count-violin",
            ChartSlot::ViewCommentScatter => "view-comment-scatter",
            ChartSlot::ViewLikeScatter => "view-like-scatter",
            ChartSlot::BestPerforming => "best-performing",
            ChartSlot::WorstPerforming => "worst-performing",
        }
    }

    pub fn kind(self) -> ChartKind {
        match self {
            ChartSlot::ViewCountViolin => ChartKind::Violin,
            ChartSlot::ViewCommentScatter | ChartSlot::ViewLikeScatter => ChartKind::Scatter,
            _ => ChartKind::Bar,
        }
    }

    /// The `(x, y)` columns plotted by this slot.
    pub fn bindings(self) -> (Field, Field) {
        match self {
            ChartSlot::SubscriberCountGraph => (Field::ChannelName, Field::SubscriberCount),
            ChartSlot::ViewCountGraph => (Field::ChannelName, Field::ViewCount),
            ChartSlot::ViewCountViolin => (Field::ChannelTitle, Field::ViewCount),
            ChartSlot::ViewCommentScatter => (Field::ViewCount, Field::CommentCount),
            ChartSlot::ViewLikeScatter => (Field::ViewCount, Field::LikeCount),
            ChartSlot::BestPerforming | ChartSlot::WorstPerforming => (Field::Title, Field::ViewCount),
        }
    }

    fn heading(self) -> &'static str {
        match self {
            ChartSlot::SubscriberCountGraph => "Subscriber Count",
            ChartSlot::ViewCountGraph => "View Count",
            ChartSlot::ViewCountViolin => "View Count Distribution",
            ChartSlot::ViewCommentScatter => "Views vs Comments",
            ChartSlot::ViewLikeScatter => "Views vs Likes",
            ChartSlot::BestPerforming => "Best performing videos",
            ChartSlot::WorstPerforming => "Worst performing videos",
        }
    }

    pub fn title(self, selection: &Selection) -> String {
        format!("{} - {}", self.heading(), selection.title_suffix())
    }

    /// Whether the bar of the selected channel is recolored.
    pub fn highlights_selection(self) -> bool {
        matches!(
            self,
            ChartSlot::SubscriberCountGraph | ChartSlot::ViewCountGraph
        )
    }
}

impl std::fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for ChartSlot {
    type Err = UnknownSlot;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        ChartSlot::ALL
            .into_iter()
            .find(|slot| slot.id() == input)
            .ok_or_else(|| UnknownSlot::new(input.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Snafu, new)]
#[snafu(display("no chart is named `{}`", text))]
pub struct UnknownSlot {
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Violin,
    Scatter,
}

/// Recolors the bar whose `field` equals `value`, every other bar gets `base_color`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub field: Field,
    pub value: String,
    pub color: &'static str,
    pub base_color: &'static str,
}

impl Highlight {
    pub const COLOR: &'static str = "red";
    pub const BASE_COLOR: &'static str = "grey";

    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            color: Self::COLOR,
            base_color: Self::BASE_COLOR,
        }
    }

    pub fn color_of<R: Row>(&self, row: &R) -> &'static str {
        let cell = row.cell(self.field);
        if cell.as_ref().and_then(Cell::as_text) == Some(self.value.as_str()) {
            self.color
        } else {
            self.base_color
        }
    }
}

/// Column-oriented data of a single trace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Series {
    pub x: Vec<Cell>,
    pub y: Vec<Cell>,
}

impl Series {
    pub fn collect<'r, R: Row + 'r>(rows: impl IntoIterator<Item = &'r R>, x: Field, y: Field) -> Self {
        let mut series = Series::default();
        for row in rows {
            series.x.push(row.cell(x).unwrap_or(Cell::Count(None)));
            series.y.push(row.cell(y).unwrap_or(Cell::Count(None)));
        }
        series
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// A declarative description of one chart, independent of the charting library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub slot: ChartSlot,
    pub kind: ChartKind,
    pub x: Field,
    pub y: Field,
    pub title: String,
    pub highlight: Option<Highlight>,
    /// Per-point marker colors, present only when a highlight applies.
    pub colors: Option<Vec<&'static str>>,
    pub series: Series,
}

impl ChartSpec {
    pub fn build<'r, R: Row + 'r>(
        slot: ChartSlot, rows: impl IntoIterator<Item = &'r R>, selection: &Selection,
    ) -> Self {
        let rows: Vec<&R> = rows.into_iter().collect();
        let (x, y) = slot.bindings();

        let highlight = selection
            .channel()
            .filter(|_| slot.highlights_selection())
            .map(|channel| Highlight::new(x, channel));

        let colors = highlight
            .as_ref()
            .map(|highlight| rows.iter().map(|row| highlight.color_of(*row)).collect());

        ChartSpec {
            slot,
            kind: slot.kind(),
            x,
            y,
            title: slot.title(selection),
            highlight,
            colors,
            series: Series::collect(rows, x, y),
        }
    }

    /// Renders the chart as a Plotly.js figure (`{"data": [...], "layout": {...}}`).
    pub fn figure(&self, theme: &Theme) -> Value {
        let mut trace = json!({
            "type": self.kind,
            "x": self.series.x,
            "y": self.series.y,
            "hovertemplate": format!("{}=%{{x}}<br>{}=%{{y}}<extra></extra>", self.x, self.y),
        });

        match self.kind {
            ChartKind::Scatter => trace["mode"] = json!("markers"),
            ChartKind::Violin => trace["points"] = json!(false),
            ChartKind::Bar => {}
        }

        if let Some(colors) = &self.colors {
            trace["marker"] = json!({ "color": colors });
        }

        json!({
            "data": [trace],
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": self.x.column() } },
                "yaxis": { "title": { "text": self.y.column() } },
                "plot_bgcolor": theme.plot_background,
                "paper_bgcolor": theme.paper_background,
                "font": { "color": theme.font_color },
            },
        })
    }
}

/// Colors shared by every figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub plot_background: String,
    pub paper_background: String,
    pub font_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            plot_background: "rgba(0, 0, 0, 0)".to_string(),
            paper_background: "rgba(0, 0, 0, 0)".to_string(),
            font_color: "#ffffff".to_string(),
        }
    }
}
