use crate::image_picker::interface::ImagePicker;
use crate::image_ref::ImageRef;

pub struct ImagePickerFake {
    next: Option<ImageRef>,
}

impl ImagePickerFake {
    pub fn new(next: Option<ImageRef>) -> Self {
        Self { next }
    }
}

impl ImagePicker for ImagePickerFake {
    fn pick(&self) -> Result<Option<ImageRef>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.next.clone())
    }
}
