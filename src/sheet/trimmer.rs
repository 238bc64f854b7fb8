use image::{GenericImageView, Pixel};

/// Find the furthest visible pixel in a cell.
///
/// Returns the largest local x and the largest local y among pixels with a
/// non-zero alpha, tracked independently. Any alpha above zero counts as
/// visible. A fully transparent cell yields `(0, 0)`.
///
/// Pixels are read through [`Pixel::to_rgba`], so views without an alpha
/// channel report every pixel as opaque.
pub fn trim_bounds<I>(cell: &I) -> (u32, u32)
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    visible_bounds(cell).unwrap_or((0, 0))
}

/// Same scan as [`trim_bounds`], but `None` when no pixel is visible.
pub fn visible_bounds<I>(cell: &I) -> Option<(u32, u32)>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let mut bounds: Option<(u32, u32)> = None;

    for (x, y, pixel) in cell.pixels() {
        if pixel.to_rgba()[3] != 0 {
            let (right, bottom) = bounds.unwrap_or((0, 0));
            bounds = Some((right.max(x), bottom.max(y)));
        }
    }

    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage, imageops};

    #[test]
    fn test_trim_fully_opaque() {
        let img = RgbaImage::from_pixel(10, 8, Rgba([255, 0, 0, 255]));
        assert_eq!(trim_bounds(&img), (9, 7));
    }

    #[test]
    fn test_trim_fully_transparent() {
        let img = RgbaImage::new(10, 10);
        assert_eq!(trim_bounds(&img), (0, 0));
    }

    #[test]
    fn test_trim_with_transparent_border() {
        let mut img = RgbaImage::new(10, 10);
        // Fill a 4x4 block in the middle
        for y in 3..7 {
            for x in 2..6 {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }

        assert_eq!(trim_bounds(&img), (5, 6));
    }

    #[test]
    fn test_trim_axes_are_independent() {
        let mut img = RgbaImage::new(8, 8);
        img.put_pixel(7, 0, Rgba([0, 0, 0, 255]));
        img.put_pixel(0, 5, Rgba([0, 0, 0, 255]));

        assert_eq!(trim_bounds(&img), (7, 5));
    }

    #[test]
    fn test_visible_bounds_distinguishes_empty_cell() {
        let empty = RgbaImage::new(3, 3);
        assert_eq!(visible_bounds(&empty), None);

        let mut corner = RgbaImage::new(3, 3);
        corner.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
        assert_eq!(visible_bounds(&corner), Some((0, 0)));
        assert_eq!(trim_bounds(&corner), trim_bounds(&empty));
    }

    #[test]
    fn test_trim_faint_alpha_is_visible() {
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(3, 2, Rgba([0, 0, 0, 1]));

        assert_eq!(trim_bounds(&img), (3, 2));
    }

    #[test]
    fn test_trim_ignores_color_of_transparent_pixels() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 0]));
        assert_eq!(trim_bounds(&img), (0, 0));
    }

    #[test]
    fn test_trim_without_alpha_channel() {
        let img = GrayImage::from_pixel(6, 3, Luma([0]));
        assert_eq!(trim_bounds(&img), (5, 2));
    }

    #[test]
    fn test_trim_uses_view_local_coordinates() {
        let mut sheet = RgbaImage::new(8, 8);
        sheet.put_pixel(5, 6, Rgba([0, 0, 0, 255]));

        let view = imageops::crop_imm(&sheet, 4, 4, 4, 4);
        assert_eq!(trim_bounds(&*view), (1, 2));
    }
}
