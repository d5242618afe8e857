use super::*;

use crate::{define_row, define_table};

/// Aggregate statistics of a single channel, one row of `channel_stats.csv`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, new)]
#[serde(rename_all = "camelCase")]
pub struct ChannelStats {
    pub channel_name: String,
    #[serde_as(as = "Count")]
    pub subscriber_count: u64,
    #[serde_as(as = "Count")]
    pub view_count: u64,
}

define_table!("channel_stats.csv" : ChannelStats requires [ChannelName, SubscriberCount, ViewCount]);

define_row! {
    ChannelStats : self {
        ChannelName => self.channel_name.as_str(),
        SubscriberCount => self.subscriber_count,
        ViewCount => self.view_count,
    }
}
