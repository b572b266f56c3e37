use image::{imageops, DynamicImage};
use tract_onnx::prelude::*;

/// Letterbox the image into a `width` x `height` square: scale to fit,
/// then pad with black so the aspect ratio survives.
pub fn resize_image(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    if image.width() == image.height() {
        return image.resize_exact(width, height, imageops::FilterType::Triangle);
    }

    let (w, h) = (image.width() as f32, image.height() as f32);
    let scale = (width as f32 / w).min(height as f32 / h);
    let new_w = (w * scale) as u32;
    let new_h = (h * scale) as u32;

    let scaled = image
        .resize(new_w, new_h, imageops::FilterType::Triangle)
        .to_rgb8();

    let mut padded = image::RgbImage::new(width, height);
    let x_offset = (width - scaled.width()) / 2;
    let y_offset = (height - scaled.height()) / 2;
    imageops::overlay(&mut padded, &scaled, x_offset as i64, y_offset as i64);

    DynamicImage::from(padded)
}

/// NCHW f32 tensor, channels in [0, 1].
fn image_to_tensor(image: &DynamicImage) -> Tensor {
    let rgb = image.to_rgb8();
    let (width, height) = (rgb.width() as usize, rgb.height() as usize);

    let tensor = tract_ndarray::Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        rgb.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    });

    tensor.into_tensor()
}

pub fn resize_image_to_tensor(image: &DynamicImage, width: u32, height: u32) -> Tensor {
    image_to_tensor(&resize_image(image, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, Rgb};

    fn solid_image(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        let mut img = ImageBuffer::new(width, height);
        for pixel in img.pixels_mut() {
            *pixel = Rgb(color);
        }
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_image_to_tensor_square() {
        let image = solid_image(100, 100, [255, 0, 0]);

        let tensor = resize_image_to_tensor(&image, 224, 224);
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);

        let slice = tensor.as_slice::<f32>().unwrap();
        // Red channel saturated, green and blue empty.
        assert_eq!(slice[0], 1.0);
        assert_eq!(slice[224 * 224], 0.0);
        assert_eq!(slice[2 * 224 * 224], 0.0);
    }

    #[test]
    fn test_image_to_tensor_rectangle_is_centered() {
        let image = solid_image(200, 100, [255, 0, 0]);

        let tensor = resize_image_to_tensor(&image, 224, 224);
        assert_eq!(tensor.shape(), &[1, 3, 224, 224]);

        let slice = tensor.as_slice::<f32>().unwrap();
        // Center pixel lands inside the scaled content, corners in padding.
        let center = 112 * 224 + 112;
        assert_eq!(slice[center], 1.0);
        assert_eq!(slice[0], 0.0);
    }

    #[test]
    fn test_image_to_tensor_normalization() {
        let image = solid_image(100, 100, [128, 128, 128]);

        let tensor = resize_image_to_tensor(&image, 224, 224);
        let slice = tensor.as_slice::<f32>().unwrap();

        let expected = 128.0 / 255.0;
        assert!((slice[0] - expected).abs() < 0.0001);
        assert!((slice[224 * 224] - expected).abs() < 0.0001);
        assert!((slice[2 * 224 * 224] - expected).abs() < 0.0001);
    }
}
