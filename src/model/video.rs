use super::*;

use crate::{define_row, define_table};

/// Statistics of a single upload, one row of `video_data.csv`.
///
/// Like and comment counts are absent when the uploader disabled them.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub channel_title: String,
    pub title: String,
    #[serde_as(as = "Count")]
    pub view_count: u64,
    #[serde_as(as = "Count")]
    #[serde(default)]
    pub like_count: Option<u64>,
    #[serde_as(as = "Count")]
    #[serde(default)]
    pub comment_count: Option<u64>,
}

define_table!("video_data.csv" : VideoRecord requires [ChannelTitle, Title, ViewCount]);

define_row! {
    VideoRecord : self {
        ChannelTitle => self.channel_title.as_str(),
        Title => self.title.as_str(),
        ViewCount => self.view_count,
        LikeCount => self.like_count,
        CommentCount => self.comment_count,
    }
}

impl VideoRecord {
    pub fn belongs_to(&self, channel: &str) -> bool {
        self.channel_title == channel
    }
}
