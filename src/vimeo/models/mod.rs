pub mod enums;
pub mod spatial;
pub mod video_update;
