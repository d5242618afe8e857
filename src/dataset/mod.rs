use std::collections::HashSet;
use std::io;
use std::path::Path;

use derive_new::new;
use serde::de::DeserializeOwned;
use snafu::{ensure, ResultExt};
use tracing::instrument;

use crate::model::{ChannelStats, Field, VideoRecord};

pub use error::*;

mod error;

/// A model that is loaded from a CSV file of the data directory.
///
/// Implemented with [define_table!](crate::define_table).
pub trait Table: DeserializeOwned {
    fn file() -> &'static str;

    /// Columns that must be present in the header.
    fn required() -> &'static [Field];
}

/// The two tables the dashboard is computed from. Loaded once at startup, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct Dataset {
    channels: Vec<ChannelStats>,
    videos: Vec<VideoRecord>,
}

impl Dataset {
    #[instrument]
    pub fn load(dir: &Path) -> Result<Dataset> {
        let channels = read_table::<ChannelStats>(dir)?;
        let videos = read_table::<VideoRecord>(dir)?;

        tracing::info!(
            channels = channels.len(),
            videos = videos.len(),
            "loaded dataset from `{}`",
            dir.display()
        );

        Ok(Dataset { channels, videos })
    }

    pub fn from_readers(channels: impl io::Read, videos: impl io::Read) -> Result<Dataset> {
        let channels = parse_table(reader(channels), ChannelStats::file())?;
        let videos = parse_table(reader(videos), VideoRecord::file())?;

        Ok(Dataset { channels, videos })
    }

    pub fn channels(&self) -> &[ChannelStats] {
        &self.channels
    }

    pub fn videos(&self) -> &[VideoRecord] {
        &self.videos
    }

    /// Distinct channel names in the order they first appear in the channel table.
    pub fn channel_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.channels
            .iter()
            .map(|channel| channel.channel_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}

pub fn read_table<T: Table>(dir: &Path) -> Result<Vec<T>> {
    let path = dir.join(T::file());
    let reader = builder().from_path(&path).context(OpenTableSnafu { path })?;

    parse_table(reader, T::file())
}

fn parse_table<T: Table, R: io::Read>(mut reader: csv::Reader<R>, table: &str) -> Result<Vec<T>> {
    let headers = reader.headers().context(ReadHeaderSnafu { table })?;

    for field in T::required() {
        let column = field.column();
        ensure!(
            headers.iter().any(|header| header == column),
            MissingColumnSnafu { table, column }
        );
    }

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .context(ParseRowSnafu { table })
}

fn reader<R: io::Read>(input: R) -> csv::Reader<R> {
    builder().from_reader(input)
}

fn builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::Headers);
    builder
}
