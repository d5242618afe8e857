use super::*;

/// Dropdown value meaning "no filter applied".
pub const ALL: &str = "All";

/// Title suffix used when no channel is selected.
pub const ALL_CHANNELS: &str = "All Channels";

/// The channel picked in the dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Channel(String),
}

impl Selection {
    pub fn channel(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::Channel(name) => Some(name.as_str()),
        }
    }

    /// The value as it appears in the dropdown.
    pub fn value(&self) -> &str {
        self.channel().unwrap_or(ALL)
    }

    pub fn title_suffix(&self) -> &str {
        self.channel().unwrap_or(ALL_CHANNELS)
    }

    pub fn includes(&self, video: &VideoRecord) -> bool {
        match self {
            Selection::All => true,
            Selection::Channel(name) => video.belongs_to(name),
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Channel(value)
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::from(value.to_owned())
    }
}

impl From<Selection> for String {
    fn from(selection: Selection) -> Self {
        match selection {
            Selection::All => ALL.to_owned(),
            Selection::Channel(name) => name,
        }
    }
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value())
    }
}
