use crate::image_cropper::interface::ImageCropper;
use crate::image_ref::ImageRef;
use crate::library::logger::interface::Logger;
use chrono::Utc;
use image::imageops;
use std::path::PathBuf;
use std::sync::Arc;

/// Centre crop to 1:1, then downscale to at most `max_size` per side.
pub struct ImageCropperImage {
    cache_dir: PathBuf,
    max_size: u32,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageCropperImage {
    pub fn new(cache_dir: PathBuf, max_size: u32, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            cache_dir,
            max_size,
            logger: logger.with_namespace("image_cropper"),
        }
    }

    fn destination(&self) -> PathBuf {
        let unique_file_name = format!("cropped_image_{}.jpg", Utc::now().timestamp_millis());
        self.cache_dir.join(unique_file_name)
    }
}

impl ImageCropper for ImageCropperImage {
    fn crop_square(
        &self,
        source: &ImageRef,
    ) -> Result<ImageRef, Box<dyn std::error::Error + Send + Sync>> {
        let image = image::open(source.path())?;

        let side = image.width().min(image.height());
        if side == 0 {
            return Err(format!("Image has no pixels: {}", source).into());
        }
        let x = (image.width() - side) / 2;
        let y = (image.height() - side) / 2;

        let mut square = image.crop_imm(x, y, side, side);
        if side > self.max_size {
            square = square.resize_exact(self.max_size, self.max_size, imageops::FilterType::Triangle);
        }

        std::fs::create_dir_all(&self.cache_dir)?;
        let destination = self.destination();
        // jpeg has no alpha channel
        square.to_rgb8().save(&destination)?;

        self.logger.info(&format!(
            "Cropped {} to {}x{} at {}",
            source,
            square.width(),
            square.height(),
            destination.display()
        ))?;

        Ok(ImageRef(destination))
    }
}
