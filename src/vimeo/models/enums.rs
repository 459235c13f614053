use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

// Every variant spells out its API token. Renaming a variant must not change
// what goes over the wire.

/// Who can view the video (`privacy.view`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum VideoPrivacy {
    #[serde(rename = "anybody")]
    #[strum(serialize = "anybody")]
    Anybody,
    #[serde(rename = "contacts")]
    #[strum(serialize = "contacts")]
    Contacts,
    #[serde(rename = "disable")]
    #[strum(serialize = "disable")]
    Disable,
    #[serde(rename = "nobody")]
    #[strum(serialize = "nobody")]
    Nobody,
    /// Requires the `password` parameter alongside it.
    #[serde(rename = "password")]
    #[strum(serialize = "password")]
    Password,
    /// Not available to basic accounts.
    #[serde(rename = "unlisted")]
    #[strum(serialize = "unlisted")]
    Unlisted,
    #[serde(rename = "users")]
    #[strum(serialize = "users")]
    Users,
}

/// Where the video can be embedded (`privacy.embed`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum VideoEmbedPrivacy {
    #[serde(rename = "private")]
    #[strum(serialize = "private")]
    Private,
    #[serde(rename = "public")]
    #[strum(serialize = "public")]
    Public,
    /// Only on the domains registered for the video.
    #[serde(rename = "whitelist")]
    #[strum(serialize = "whitelist")]
    Whitelist,
}

/// Who can comment on the video (`privacy.comments`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum VideoComments {
    #[serde(rename = "anybody")]
    #[strum(serialize = "anybody")]
    Anybody,
    #[serde(rename = "contacts")]
    #[strum(serialize = "contacts")]
    Contacts,
    #[serde(rename = "nobody")]
    #[strum(serialize = "nobody")]
    Nobody,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum SpatialProjection {
    #[serde(rename = "equirectangular")]
    #[strum(serialize = "equirectangular")]
    Equirectangular,
    #[serde(rename = "cylindrical")]
    #[strum(serialize = "cylindrical")]
    Cylindrical,
    #[serde(rename = "cubical")]
    #[strum(serialize = "cubical")]
    Cubical,
    #[serde(rename = "pyramid")]
    #[strum(serialize = "pyramid")]
    Pyramid,
    #[serde(rename = "dome")]
    #[strum(serialize = "dome")]
    Dome,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum SpatialStereoFormat {
    #[serde(rename = "mono")]
    #[strum(serialize = "mono")]
    Mono,
    #[serde(rename = "left-right")]
    #[strum(serialize = "left-right")]
    LeftRight,
    #[serde(rename = "top-bottom")]
    #[strum(serialize = "top-bottom")]
    TopBottom,
}
