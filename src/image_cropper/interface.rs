use crate::image_ref::ImageRef;

pub trait ImageCropper {
    /// Writes a square copy of `source` no larger than the configured size
    /// and returns where it was written.
    fn crop_square(
        &self,
        source: &ImageRef,
    ) -> Result<ImageRef, Box<dyn std::error::Error + Send + Sync>>;
}
