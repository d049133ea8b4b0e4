use image::{imageops, DynamicImage, Rgb, RgbImage};
use tract_onnx::prelude::*;

/// Fits the image inside `width`x`height` keeping its aspect ratio and pads
/// the rest with black. Square inputs are resized directly.
pub fn letterbox(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    if image.width() == image.height() && width == height {
        return image
            .resize_exact(width, height, imageops::FilterType::Triangle)
            .to_rgb8();
    }

    let scaled = image
        .resize(width, height, imageops::FilterType::Triangle)
        .to_rgb8();

    let mut padded = RgbImage::from_pixel(width, height, Rgb([0, 0, 0]));
    let x_offset = (width - scaled.width().min(width)) / 2;
    let y_offset = (height - scaled.height().min(height)) / 2;
    imageops::replace(&mut padded, &scaled, x_offset as i64, y_offset as i64);

    padded
}

/// NCHW float tensor with channels scaled to [0, 1].
pub fn rgb_to_tensor(rgb: &RgbImage) -> Tensor {
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);
    tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    })
    .into_tensor()
}

pub fn load_image_tensor(
    path: &std::path::Path,
    width: u32,
    height: u32,
) -> Result<Tensor, Box<dyn std::error::Error + Send + Sync>> {
    let image = image::open(path)?;
    Ok(rgb_to_tensor(&letterbox(&image, width, height)))
}
