use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Response of `/endpoints`: the category names of each mode.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct EndpointsResult {
    pub sfw: Vec<String>,
    pub nsfw: Vec<String>,
}

/// Response of `/{mode}/{category}`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ImageResult {
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Sfw,
    Nsfw,
}

impl Mode {
    pub fn from_sfw(is_sfw: bool) -> Self {
        if is_sfw {
            Mode::Sfw
        } else {
            Mode::Nsfw
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Mode::Sfw => "sfw",
            Mode::Nsfw => "nsfw",
        };
        write!(f, "{}", s)
    }
}
