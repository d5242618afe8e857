use std::path::PathBuf;

use snafu::{Location, Snafu};

pub type Result<T, E = DatasetError> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum DatasetError {
    #[snafu(display("Failed to open the table `{}`: {source}", path.display()))]
    OpenTable {
        path: PathBuf,
        source: csv::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Failed to read the header of `{table}`: {source}"))]
    ReadHeader {
        table: String,
        source: csv::Error,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Table `{table}` is missing the column `{column}`"))]
    MissingColumn {
        table: String,
        column: &'static str,
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("Malformed row in `{table}`: {source}"))]
    ParseRow {
        table: String,
        source: csv::Error,
        #[snafu(implicit)]
        location: Location,
    },
}
