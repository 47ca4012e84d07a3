use log::{debug, warn};
use shared::ImageRef;
use web_sys::{File, Url};

/// Turns user-selected files and typed URLs into `ImageRef`s, and releases
/// the object URLs behind `ImageRef::Local`.
pub struct ImageResolver;

impl ImageResolver {
    pub fn from_file(file: &File) -> Option<ImageRef> {
        match Url::create_object_url_with_blob(file) {
            Ok(url) => {
                debug!("Created object URL for {}", file.name());
                Some(ImageRef::local(url))
            }
            Err(e) => {
                warn!("Could not read image {}: {:?}", file.name(), e);
                None
            }
        }
    }

    pub fn from_url(url: &str) -> Option<ImageRef> {
        let url = url.trim();
        if url.is_empty() {
            None
        } else {
            Some(ImageRef::remote(url))
        }
    }

    pub fn release(image: ImageRef) {
        if let ImageRef::Local { url } = image {
            if let Err(e) = Url::revoke_object_url(&url) {
                warn!("Failed to revoke {}: {:?}", url, e);
            }
        }
    }

    pub fn release_all(images: impl IntoIterator<Item = ImageRef>) {
        for image in images {
            Self::release(image);
        }
    }
}
