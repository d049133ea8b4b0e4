use crate::image_ref::ImageRef;

pub trait ImagePicker {
    /// `Ok(None)` means the user picked nothing.
    fn pick(&self) -> Result<Option<ImageRef>, Box<dyn std::error::Error + Send + Sync>>;
}

pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "webp"];

pub fn is_image_path(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
