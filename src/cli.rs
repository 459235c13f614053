use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};

use crate::vimeo::models::{
    enums::{
        SpatialProjection, SpatialStereoFormat, VideoComments, VideoEmbedPrivacy, VideoPrivacy,
    },
    spatial::{DirectorTimelineEntry, SpatialUpdateMetadata},
    video_update::VideoUpdateMetadata,
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Form,
}

/// Render the parameters of a Vimeo video update request.
#[derive(Parser, Debug)]
#[command(name = "vimeo-update", version)]
pub struct Args {
    /// JSON file with update fields, flags take precedence over it
    #[arg(long)]
    pub metadata_file: Option<PathBuf>,

    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// anybody, contacts, disable, nobody, password, unlisted or users
    #[arg(long)]
    pub privacy: Option<VideoPrivacy>,
    #[arg(long)]
    pub password: Option<String>,
    /// private, public or whitelist
    #[arg(long)]
    pub embed_privacy: Option<VideoEmbedPrivacy>,
    /// anybody, contacts or nobody
    #[arg(long)]
    pub comments: Option<VideoComments>,
    #[arg(long, action = ArgAction::Set)]
    pub review_page: Option<bool>,
    #[arg(long, action = ArgAction::Set)]
    pub allow_download: Option<bool>,
    #[arg(long, action = ArgAction::Set)]
    pub allow_add: Option<bool>,

    #[arg(long)]
    pub field_of_view: Option<u32>,
    /// equirectangular, cylindrical, cubical, pyramid or dome
    #[arg(long)]
    pub projection: Option<SpatialProjection>,
    /// mono, left-right or top-bottom
    #[arg(long)]
    pub stereo_format: Option<SpatialStereoFormat>,
    /// time_code:pitch:yaw[:roll], repeat for each entry
    #[arg(long = "director-timeline")]
    pub director_timeline: Vec<DirectorTimelineEntry>,

    #[arg(long, value_enum, env = "VIMEO_UPDATE_FORMAT", default_value = "json")]
    pub format: OutputFormat,
    /// Reject updates the API would refuse instead of passing them through
    #[arg(long, env = "VIMEO_UPDATE_STRICT")]
    pub strict: bool,
}

impl Args {
    pub fn to_metadata(&self) -> Result<VideoUpdateMetadata, anyhow::Error> {
        let mut metadata = match &self.metadata_file {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                serde_json::from_str::<VideoUpdateMetadata>(&raw)
                    .with_context(|| format!("failed to parse {}", path.display()))?
            }
            None => VideoUpdateMetadata::default(),
        };

        if self.name.is_some() {
            metadata.name = self.name.clone();
        }
        if self.description.is_some() {
            metadata.description = self.description.clone();
        }
        if self.privacy.is_some() {
            metadata.privacy = self.privacy;
        }
        if self.password.is_some() {
            metadata.password = self.password.clone();
        }
        if self.embed_privacy.is_some() {
            metadata.embed_privacy = self.embed_privacy;
        }
        if self.comments.is_some() {
            metadata.comments = self.comments;
        }
        if self.review_page.is_some() {
            metadata.review_link_enabled = self.review_page;
        }
        if self.allow_download.is_some() {
            metadata.allow_download_video = self.allow_download;
        }
        if self.allow_add.is_some() {
            metadata.allow_add_to_album_channel_group = self.allow_add;
        }

        let mut spatial = metadata.spatial.take().unwrap_or_default();
        if self.field_of_view.is_some() {
            spatial.field_of_view = self.field_of_view;
        }
        if self.projection.is_some() {
            spatial.projection = self.projection;
        }
        if self.stereo_format.is_some() {
            spatial.stereo_format = self.stereo_format;
        }
        if !self.director_timeline.is_empty() {
            spatial.director_timeline = Some(self.director_timeline.clone());
        }
        if !spatial.is_empty() {
            metadata.spatial = Some(spatial);
        }

        Ok(metadata)
    }
}
