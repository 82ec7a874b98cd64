//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::bbox::{GeoBBox, PixelBBox};
use crate::core::config::OverlayCfg;
use crate::render::{
    encode_png, key_background, render_overlay, tile_anchor, tile_pixel_bboxes, OverlayStyle,
    BACKGROUND, TRANSPARENT,
};
use image::{Rgba, RgbaImage};
use tile_grid::{GlobalMercator, TileIndex};

fn assert_bbox_near(actual: &PixelBBox, expected: [i32; 4]) {
    let actual = [actual.x1, actual.y1, actual.x2, actual.y2];
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!((a - e).abs() <= 1, "{:?} != {:?}", actual, expected);
    }
}

fn opaque_pixels(image: &RgbaImage) -> usize {
    image.pixels().filter(|p| p[3] != 0).count()
}

fn thin(stroke: Rgba<u8>) -> OverlayStyle {
    OverlayStyle {
        stroke,
        stroke_width: 1,
    }
}

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

#[test]
fn test_tile_anchor() {
    let grid = GlobalMercator::default();
    let tile = TileIndex::new(327938, 167876, 19).unwrap();
    assert_eq!(tile_anchor(&grid, &tile), (83952128.0, 91241472.0));
}

#[test]
fn test_tile_pixel_bboxes() {
    let grid = GlobalMercator::default();

    let tile = TileIndex::new(327938, 167876, 19).unwrap();
    let bboxes = tile_pixel_bboxes(
        &grid,
        &tile,
        &[
            GeoBBox::new(54.18632391751572, 45.177304744720466, 54.18631842427248, 45.17738252878187),
            GeoBBox::new(54.1863247022647, 45.17730206251144, 54.18630351403713, 45.17737850546836),
        ],
    )
    .unwrap();
    assert_eq!(bboxes.len(), 2);
    assert_bbox_near(&bboxes[0], [56, 143, 85, 146]);
    assert_bbox_near(&bboxes[1], [55, 142, 83, 156]);

    let tile = TileIndex::new(327937, 167880, 19).unwrap();
    let bboxes = tile_pixel_bboxes(
        &grid,
        &tile,
        &[
            GeoBBox::new(54.18468, 45.17661, 54.18466, 45.17668),
            GeoBBox::new(54.18465, 45.17665, 54.18463, 45.17673),
            GeoBBox::new(54.18467, 45.17683, 54.18465, 45.1769),
            GeoBBox::new(54.18463, 45.17707, 54.18461, 45.17713),
        ],
    )
    .unwrap();
    assert_bbox_near(&bboxes[0], [52, 166, 79, 179]);
    assert_bbox_near(&bboxes[1], [67, 185, 97, 198]);
    assert_bbox_near(&bboxes[2], [135, 172, 161, 185]);
    assert_bbox_near(&bboxes[3], [224, 198, 246, 210]);

    let tile = TileIndex::new(327938, 167880, 19).unwrap();
    let bboxes =
        tile_pixel_bboxes(&grid, &tile, &[GeoBBox::new(54.18472, 45.17717, 54.18468, 45.17723)])
            .unwrap();
    assert_bbox_near(&bboxes[0], [5, 140, 28, 166]);
}

#[test]
fn test_tile_pixel_bboxes_errors() {
    let grid = GlobalMercator::default();
    let tile = TileIndex::new(327938, 167876, 19).unwrap();
    assert!(tile_pixel_bboxes(&grid, &tile, &[]).unwrap().is_empty());
    assert!(
        tile_pixel_bboxes(&grid, &tile, &[GeoBBox::new(54.186, 45.177, 54.186, 181.0)]).is_err()
    );
}

#[test]
fn test_empty_overlay() {
    let image = render_overlay(&[], &OverlayStyle::default());
    assert_eq!(image.dimensions(), (256, 256));
    assert!(image.pixels().all(|p| *p == TRANSPARENT));
}

#[test]
fn test_default_style() {
    let style = OverlayStyle::default();
    assert_eq!(style.stroke, RED);
    assert_eq!(style.stroke_width, 3);

    let cfg = OverlayCfg {
        stroke_color: [0, 128, 255],
        stroke_width: 2,
    };
    let style = OverlayStyle::from(&cfg);
    assert_eq!(style.stroke, Rgba([0, 128, 255, 255]));
    assert_eq!(style.stroke_width, 2);
}

#[test]
fn test_outline() {
    let image = render_overlay(&[PixelBBox::new(10, 20, 40, 50)], &thin(RED));
    for &(x, y) in &[(10, 20), (40, 20), (10, 50), (40, 50), (25, 20), (10, 35), (40, 35), (25, 50)] {
        assert_eq!(*image.get_pixel(x, y), RED, "({}, {})", x, y);
    }
    // Interior and surroundings stay transparent
    for &(x, y) in &[(25, 35), (11, 21), (39, 49), (9, 20), (41, 50), (10, 19), (0, 0)] {
        assert_eq!(*image.get_pixel(x, y), TRANSPARENT, "({}, {})", x, y);
    }
    assert_eq!(opaque_pixels(&image), 2 * 31 + 2 * 29);
}

#[test]
fn test_stroke_width() {
    let style = OverlayStyle::default();
    let image = render_overlay(&[PixelBBox::new(10, 20, 40, 50)], &style);
    for x in 10..13 {
        assert_eq!(*image.get_pixel(x, 35), RED);
    }
    for x in 38..41 {
        assert_eq!(*image.get_pixel(x, 35), RED);
    }
    assert_eq!(*image.get_pixel(13, 35), TRANSPARENT);
    assert_eq!(*image.get_pixel(37, 35), TRANSPARENT);
    assert_eq!(*image.get_pixel(25, 22), RED);
    assert_eq!(*image.get_pixel(25, 23), TRANSPARENT);
    // The stroke never grows outside of the box
    assert_eq!(*image.get_pixel(9, 35), TRANSPARENT);
    assert_eq!(*image.get_pixel(41, 35), TRANSPARENT);

    // Narrow boxes are filled by the stroke
    let image = render_overlay(&[PixelBBox::new(100, 100, 103, 130)], &style);
    for x in 100..104 {
        assert_eq!(*image.get_pixel(x, 115), RED);
    }
    assert_eq!(*image.get_pixel(104, 115), TRANSPARENT);
}

#[test]
fn test_unordered_corners() {
    let style = OverlayStyle::default();
    let ordered = render_overlay(&[PixelBBox::new(55, 142, 83, 156)], &style);
    let swapped = render_overlay(&[PixelBBox::new(83, 156, 55, 142)], &style);
    let mixed = render_overlay(&[PixelBBox::new(55, 156, 83, 142)], &style);
    assert_eq!(ordered, swapped);
    assert_eq!(ordered, mixed);
}

#[test]
fn test_clipped_outline() {
    let image = render_overlay(&[PixelBBox::new(-10, -10, 20, 20)], &thin(RED));
    assert_eq!(*image.get_pixel(20, 5), RED);
    assert_eq!(*image.get_pixel(5, 20), RED);
    assert_eq!(*image.get_pixel(0, 5), TRANSPARENT);
    assert_eq!(*image.get_pixel(5, 0), TRANSPARENT);
    assert_eq!(opaque_pixels(&image), 21 + 21 - 1);

    let image = render_overlay(&[PixelBBox::new(250, 250, 100000, 100000)], &thin(RED));
    assert_eq!(*image.get_pixel(250, 255), RED);
    assert_eq!(*image.get_pixel(255, 250), RED);
    assert_eq!(opaque_pixels(&image), 6 + 6 - 1);

    let image = render_overlay(&[PixelBBox::new(300, 10, 400, 20)], &thin(RED));
    assert_eq!(opaque_pixels(&image), 0);
}

#[test]
fn test_wide_stroke() {
    let wide = OverlayStyle {
        stroke: RED,
        stroke_width: u32::MAX,
    };
    // Box around the whole tile
    let image = render_overlay(
        &[PixelBBox::new(-1_000_000, -1_000_000, 1_000_000, 1_000_000)],
        &wide,
    );
    assert_eq!(opaque_pixels(&image), 256 * 256);

    // Box inside the tile
    let image = render_overlay(&[PixelBBox::new(10, 20, 40, 50)], &wide);
    assert_eq!(*image.get_pixel(25, 35), RED);
    assert_eq!(*image.get_pixel(9, 35), TRANSPARENT);
    assert_eq!(opaque_pixels(&image), 31 * 31);

    // Box reaching into the tile from below
    let image = render_overlay(&[PixelBBox::new(-1_000_000, 100, 1_000_000, 1_000_000)], &wide);
    assert_eq!(*image.get_pixel(0, 100), RED);
    assert_eq!(*image.get_pixel(255, 255), RED);
    assert_eq!(*image.get_pixel(128, 99), TRANSPARENT);
    assert_eq!(opaque_pixels(&image), 156 * 256);

    // Box outside of the tile
    let image = render_overlay(&[PixelBBox::new(300, 10, 1_000_000, 20)], &wide);
    assert_eq!(opaque_pixels(&image), 0);
}

#[test]
fn test_overlapping_boxes() {
    let image = render_overlay(
        &[PixelBBox::new(10, 10, 50, 50), PixelBBox::new(30, 10, 70, 50)],
        &thin(RED),
    );
    assert_eq!(*image.get_pixel(30, 30), RED);
    assert_eq!(*image.get_pixel(50, 30), RED);
    assert_eq!(*image.get_pixel(40, 30), TRANSPARENT);
    assert_eq!(opaque_pixels(&image), 2 * 61 + 4 * 39);
}

#[test]
fn test_key_background() {
    let mut image = RgbaImage::from_pixel(4, 4, BACKGROUND);
    image.put_pixel(1, 1, RED);
    // Only the color is compared, alpha is ignored
    image.put_pixel(2, 2, Rgba([0, 0, 0, 17]));
    image.put_pixel(3, 3, Rgba([1, 0, 0, 255]));
    key_background(&mut image);
    assert_eq!(*image.get_pixel(0, 0), TRANSPARENT);
    assert_eq!(*image.get_pixel(1, 1), RED);
    assert_eq!(*image.get_pixel(2, 2), TRANSPARENT);
    assert_eq!(*image.get_pixel(3, 3), Rgba([1, 0, 0, 255]));
}

#[test]
fn test_black_stroke_is_keyed_out() {
    let image = render_overlay(
        &[PixelBBox::new(10, 20, 40, 50)],
        &thin(Rgba([0, 0, 0, 255])),
    );
    assert_eq!(opaque_pixels(&image), 0);
}

#[test]
fn test_encode_png() {
    let image = render_overlay(&[PixelBBox::new(10, 20, 40, 50)], &OverlayStyle::default());
    let png = encode_png(&image).unwrap();
    assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (256, 256));
    assert_eq!(decoded, image);
}
