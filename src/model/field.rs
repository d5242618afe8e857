use super::*;

/// A column of one of the dataset tables that a chart axis can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    ChannelName,
    ChannelTitle,
    Title,
    SubscriberCount,
    ViewCount,
    LikeCount,
    CommentCount,
}

impl Field {
    /// The column name used in the CSV header.
    pub fn column(self) -> &'static str {
        match self {
            Field::ChannelName => "channelName",
            Field::ChannelTitle => "channelTitle",
            Field::Title => "title",
            Field::SubscriberCount => "subscriberCount",
            Field::ViewCount => "viewCount",
            Field::LikeCount => "likeCount",
            Field::CommentCount => "commentCount",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

/// A single value read from a row. A missing count serializes as `null` so charts leave a gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Count(Option<u64>),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text.as_str()),
            Cell::Count(_) => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(text: &str) -> Self {
        Cell::Text(text.to_owned())
    }
}

impl From<u64> for Cell {
    fn from(count: u64) -> Self {
        Cell::Count(Some(count))
    }
}

impl From<Option<u64>> for Cell {
    fn from(count: Option<u64>) -> Self {
        Cell::Count(count)
    }
}

/// A table row whose columns can be read by [Field].
///
/// Implemented with [define_row!](crate::define_row).
pub trait Row {
    /// Returns `None` when the row has no such column.
    fn cell(&self, field: Field) -> Option<Cell>;
}
