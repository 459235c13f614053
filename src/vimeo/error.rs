use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MetadataError {
    #[error("privacy is set to password but no password was given")]
    MissingPassword,
    #[error("field of view {0} is outside 30..=90")]
    FieldOfViewOutOfRange(u32),
    #[error("director timeline entry {index}: pitch {pitch} is outside -90..=90")]
    PitchOutOfRange { index: usize, pitch: f64 },
    #[error("director timeline entry {index}: yaw {yaw} is outside 0..=360")]
    YawOutOfRange { index: usize, yaw: f64 },
    #[error("invalid director timeline entry {0:?}, expected time_code:pitch:yaw[:roll]")]
    InvalidTimelineEntry(String),
}
