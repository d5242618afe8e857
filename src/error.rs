use std::net::SocketAddr;

use snafu::{Location, Snafu};

use crate::dataset::DatasetError;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ApplicationError {
    /// could not parse the configuration from the environment
    ConfigLoad {
        source: envy::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not load the channel and video tables
    LoadDataset {
        source: DatasetError,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not compile the page templates
    LoadTemplates {
        source: tera::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not serve the application
    WebServer {
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not bind to the given address, check if it's already in use
    BindAddress {
        address: SocketAddr,
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },

    /// Could not initialize the logger
    InitializeLogger {
        source: tracing::subscriber::SetGlobalDefaultError,
        #[snafu(implicit)]
        location: Location,
    },
}
