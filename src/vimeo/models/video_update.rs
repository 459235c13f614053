use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::{
    enums::{VideoComments, VideoEmbedPrivacy, VideoPrivacy},
    spatial::SpatialUpdateMetadata,
};
use crate::vimeo::{
    error::MetadataError,
    params::{bool_value, ParameterMap, SetParameterValues},
};

/// Fields to change on a video. `None` leaves the remote value untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct VideoUpdateMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<VideoPrivacy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_privacy: Option<VideoEmbedPrivacy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_link_enabled: Option<bool>,
    /// Only sent when `privacy` is [`VideoPrivacy::Password`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<VideoComments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_add_to_album_channel_group: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_download_video: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spatial: Option<SpatialUpdateMetadata>,
}

impl VideoUpdateMetadata {
    /// Request parameters for the set fields.
    ///
    /// With `privacy` set to password, `password` is always emitted and
    /// renders as an empty string when no password was given. Call
    /// [`VideoUpdateMetadata::validate`] first to reject that case locally.
    pub fn parameter_values(&self) -> ParameterMap {
        let mut parameters = ParameterMap::new();

        if let Some(name) = &self.name {
            parameters.insert("name".to_string(), name.trim().to_string());
        }

        if let Some(description) = &self.description {
            parameters.insert("description".to_string(), description.trim().to_string());
        }

        if let Some(privacy) = self.privacy {
            parameters.insert("privacy.view".to_string(), privacy.to_string());
        }

        if self.privacy == Some(VideoPrivacy::Password) {
            if self.password.is_none() {
                warn!("privacy is password but no password is set, sending an empty one");
            }
            parameters.insert(
                "password".to_string(),
                self.password.clone().unwrap_or_default(),
            );
        }

        if let Some(embed_privacy) = self.embed_privacy {
            parameters.insert(
                "privacy.embed".to_string(),
                embed_privacy.to_string(),
            );
        }

        if let Some(comments) = self.comments {
            parameters.insert(
                "privacy.comments".to_string(),
                comments.to_string(),
            );
        }

        if let Some(enabled) = self.review_link_enabled {
            parameters.insert("review_page".to_string(), bool_value(enabled));
        }

        if let Some(allow) = self.allow_download_video {
            parameters.insert("privacy.download".to_string(), bool_value(allow));
        }

        if let Some(allow) = self.allow_add_to_album_channel_group {
            parameters.insert("privacy.add".to_string(), bool_value(allow));
        }

        if let Some(spatial) = &self.spatial {
            spatial.set_parameter_values(&mut parameters, "spatial");
        }

        debug!("video update produced {} parameters", parameters.len());
        parameters
    }

    pub fn validate(&self) -> Result<(), MetadataError> {
        if self.privacy == Some(VideoPrivacy::Password)
            && self
                .password
                .as_deref()
                .map_or(true, |p| p.trim().is_empty())
        {
            return Err(MetadataError::MissingPassword);
        }

        if let Some(spatial) = &self.spatial {
            spatial.validate()?;
        }
        Ok(())
    }
}
