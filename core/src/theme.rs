use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";
    pub const STORAGE_KEY: &'static str = "theme";

    pub const fn as_str(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    pub const fn toggled(self) -> Self {
        use Theme::*;
        match self {
            Light => Dark,
            Dark => Light,
        }
    }

    /// Value for the `theme-color` meta tag.
    pub const fn meta_color(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "#ffa8c5",
            Dark => "#282c35",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::InvalidTheme(other.to_string())),
        }
    }
}
