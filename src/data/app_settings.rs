use crate::data::persistence::Persistable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Será que o Rômulo vai trabalhar hoje?";

/// Contents of `settings.yaml`. Read at startup, never written back by the UI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub title: String,
    /// Fixed origin for the work/off alternation. `None` means "the day the
    /// program starts".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            title: DEFAULT_TITLE.to_string(),
            reference_date: None,
        }
    }
}

impl Persistable for AppSettings {
    fn filename() -> &'static str {
        "settings.yaml"
    }
}

impl AppSettings {
    /// Command-line override first, then the settings file, then `today`.
    pub fn resolve_reference(&self, cli: Option<NaiveDate>, today: NaiveDate) -> NaiveDate {
        cli.or(self.reference_date).unwrap_or(today)
    }
}
