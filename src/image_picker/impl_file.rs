use crate::image_picker::interface::{is_image_path, ImagePicker};
use crate::image_ref::ImageRef;
use crate::library::logger::interface::Logger;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;

#[derive(Debug, Clone)]
pub enum PickSource {
    /// Always the same file, e.g. from the command line.
    Path(PathBuf),
    /// Most recently modified image in a directory.
    Gallery(PathBuf),
}

pub struct ImagePickerFile {
    source: PickSource,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImagePickerFile {
    pub fn new(source: PickSource, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            source,
            logger: logger.with_namespace("image_picker").with_namespace("file"),
        }
    }

    fn newest_in(
        &self,
        dir: &std::path::Path,
    ) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let mut newest: Option<(SystemTime, PathBuf)> = None;

        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() || !is_image_path(&path) {
                continue;
            }
            let modified = std::fs::metadata(&path)?.modified()?;
            match &newest {
                Some((time, _)) if *time >= modified => {}
                _ => newest = Some((modified, path)),
            }
        }

        Ok(newest.map(|(_, path)| path))
    }
}

impl ImagePicker for ImagePickerFile {
    fn pick(&self) -> Result<Option<ImageRef>, Box<dyn std::error::Error + Send + Sync>> {
        let picked = match &self.source {
            PickSource::Path(path) => {
                if path.is_file() {
                    Some(path.clone())
                } else {
                    return Err(format!("Image not found: {}", path.display()).into());
                }
            }
            PickSource::Gallery(dir) => self.newest_in(dir)?,
        };

        match &picked {
            Some(path) => self.logger.info(&format!("Picked {}", path.display()))?,
            None => self.logger.info("No media selected")?,
        }

        Ok(picked.map(ImageRef))
    }
}
