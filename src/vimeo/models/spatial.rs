use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::enums::{SpatialProjection, SpatialStereoFormat};
use crate::vimeo::{
    error::MetadataError,
    params::{ParameterMap, SetParameterValues},
};

/// A camera direction the player turns to at `time_code` seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DirectorTimelineEntry {
    pub time_code: u32,
    pub pitch: f64,
    pub yaw: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll: Option<f64>,
}

impl FromStr for DirectorTimelineEntry {
    type Err = MetadataError;

    /// `time_code:pitch:yaw` or `time_code:pitch:yaw:roll`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MetadataError::InvalidTimelineEntry(s.to_string());
        let parts: Vec<&str> = s.split(':').map(|p| p.trim()).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(invalid());
        }

        let time_code = parts[0].parse::<u32>().map_err(|_| invalid())?;
        let pitch = parts[1].parse::<f64>().map_err(|_| invalid())?;
        let yaw = parts[2].parse::<f64>().map_err(|_| invalid())?;
        let roll = match parts.get(3) {
            Some(roll) => Some(roll.parse::<f64>().map_err(|_| invalid())?),
            None => None,
        };

        Ok(DirectorTimelineEntry {
            time_code,
            pitch,
            yaw,
            roll,
        })
    }
}

/// 360° settings of a video update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SpatialUpdateMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director_timeline: Option<Vec<DirectorTimelineEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_view: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<SpatialProjection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stereo_format: Option<SpatialStereoFormat>,
}

impl SpatialUpdateMetadata {
    pub fn is_empty(&self) -> bool {
        self == &SpatialUpdateMetadata::default()
    }

    pub fn validate(&self) -> Result<(), MetadataError> {
        if let Some(fov) = self.field_of_view {
            if !(30..=90).contains(&fov) {
                return Err(MetadataError::FieldOfViewOutOfRange(fov));
            }
        }

        for (index, entry) in self.director_timeline.iter().flatten().enumerate() {
            if !(-90.0..=90.0).contains(&entry.pitch) {
                return Err(MetadataError::PitchOutOfRange {
                    index,
                    pitch: entry.pitch,
                });
            }
            if !(0.0..=360.0).contains(&entry.yaw) {
                return Err(MetadataError::YawOutOfRange {
                    index,
                    yaw: entry.yaw,
                });
            }
        }
        Ok(())
    }
}

impl SetParameterValues for SpatialUpdateMetadata {
    fn set_parameter_values(&self, parameters: &mut ParameterMap, prefix: &str) {
        if let Some(timeline) = &self.director_timeline {
            for (i, entry) in timeline.iter().enumerate() {
                let key = format!("{}.director_timeline[{}]", prefix, i);
                parameters.insert(format!("{}.time_code", key), entry.time_code.to_string());
                parameters.insert(format!("{}.pitch", key), entry.pitch.to_string());
                parameters.insert(format!("{}.yaw", key), entry.yaw.to_string());
                if let Some(roll) = entry.roll {
                    parameters.insert(format!("{}.roll", key), roll.to_string());
                }
            }
        }

        if let Some(fov) = self.field_of_view {
            parameters.insert(format!("{}.field_of_view", prefix), fov.to_string());
        }

        if let Some(projection) = self.projection {
            parameters.insert(
                format!("{}.projection", prefix),
                projection.to_string(),
            );
        }

        if let Some(stereo_format) = self.stereo_format {
            parameters.insert(
                format!("{}.stereo_format", prefix),
                stereo_format.to_string(),
            );
        }
    }
}
