pub mod audio;
pub mod image_resolver;

pub use audio::AlertAudio;
pub use image_resolver::ImageResolver;
