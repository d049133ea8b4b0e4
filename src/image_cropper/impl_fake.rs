use crate::image_cropper::interface::ImageCropper;
use crate::image_ref::ImageRef;

/// Pretends to crop by appending `.cropped` to the source path, or fails
/// with the given message.
pub struct ImageCropperFake {
    error: Option<String>,
}

impl ImageCropperFake {
    pub fn new() -> Self {
        Self { error: None }
    }

    #[allow(dead_code)]
    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
        }
    }

    pub fn cropped_path(source: &ImageRef) -> ImageRef {
        let mut path = source.0.clone();
        path.set_extension(match source.path().extension() {
            Some(ext) => format!("{}.cropped", ext.to_string_lossy()),
            None => "cropped".to_string(),
        });
        ImageRef(path)
    }
}

impl ImageCropper for ImageCropperFake {
    fn crop_square(
        &self,
        source: &ImageRef,
    ) -> Result<ImageRef, Box<dyn std::error::Error + Send + Sync>> {
        match &self.error {
            Some(message) => Err(message.clone().into()),
            None => Ok(Self::cropped_path(source)),
        }
    }
}
