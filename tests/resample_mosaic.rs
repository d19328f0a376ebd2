use stripstitch::{extract_center, merge, resize, Image, Pixel, ScaleProfile, SeamConfig};

fn count_matching(row: &[Pixel], color: Pixel) -> usize {
    row.iter().filter(|p| **p == color).count()
}

#[test]
fn resized_strip_width_follows_scale() {
    let width = 37;
    let img = Image::new(width, 6, Pixel::BLACK).unwrap();
    let factors = vec![1.0, 1.37, 2.0];
    let profile = ScaleProfile::new(factors.clone(), 2, 12).unwrap();
    let out = resize(&img, &profile).unwrap();
    assert_eq!(out.width(), 74);

    for (strip, scale) in factors.iter().enumerate() {
        let expected = (width as f32 * scale).floor() as usize;
        let row = out.row(strip * 2).unwrap();
        let got = count_matching(row, Pixel::BLACK);
        assert!(
            got.abs_diff(expected) <= 1,
            "strip {strip}: {got} vs {expected}"
        );
        // strips are centered with the floor of the free space on the left
        let first = row.iter().position(|p| *p == Pixel::BLACK).unwrap();
        assert_eq!(first, (74 - expected) / 2);
    }
}

#[test]
fn resize_keeps_left_edge_and_linear_ramp() {
    let img = Image::from_fn(5, 1, |x, _| {
        let v = (x * 50) as u8;
        Pixel::rgb(v, v, v)
    })
    .unwrap();
    let profile = ScaleProfile::new(vec![2.0], 1, 2).unwrap();
    let out = resize(&img, &profile).unwrap();
    let reds: Vec<u8> = out.row(0).unwrap().iter().map(|p| p.r).collect();
    assert_eq!(reds, vec![0, 25, 50, 75, 100, 125, 150, 175, 200, 255]);
}

#[test]
fn single_image_mosaic_is_identity() {
    let img = Image::from_fn(7, 3, |x, y| Pixel::rgba(x as u8, y as u8, 3, 128)).unwrap();
    let out = merge(&[&img], &SeamConfig::default()).unwrap();
    assert_eq!(out.pixels(), img.pixels());
    assert_eq!((out.width(), out.height()), (7, 3));
}

#[test]
fn two_solid_images_blend_monotonically_across_seam() {
    let left_color = Pixel::rgb(20, 200, 40);
    let right_color = Pixel::rgb(220, 10, 240);
    let a = Image::new(12, 3, left_color).unwrap();
    let b = Image::new(10, 3, right_color).unwrap();
    let out = merge(&[&a, &b], &SeamConfig::default()).unwrap();
    assert_eq!(out.width(), 22);

    let seam = 12;
    for y in 0..3 {
        let row = out.row(y).unwrap();
        for (x, px) in row.iter().enumerate() {
            if x + 3 < seam {
                assert_eq!(*px, left_color, "column {x}");
            } else if x > seam + 3 {
                assert_eq!(*px, right_color, "column {x}");
            }
        }
        let band = &row[seam - 4..=seam + 4];
        for pair in band.windows(2) {
            assert!(pair[1].r >= pair[0].r);
            assert!(pair[1].g <= pair[0].g);
            assert!(pair[1].b >= pair[0].b);
        }
        assert_ne!(row[seam], left_color);
        assert_ne!(row[seam], right_color);
    }
}

#[test]
fn crop_then_merge_builds_strip_mosaic() {
    let colors = [Pixel::RED, Pixel::GREEN, Pixel::BLUE];
    let crops: Vec<Image> = colors
        .iter()
        .map(|c| extract_center(&Image::new(30, 4, *c).unwrap(), 10).unwrap())
        .collect();
    let refs: Vec<&Image> = crops.iter().collect();
    let out = merge(&refs, &SeamConfig::default()).unwrap();
    assert_eq!(out.width(), 30);
    assert_eq!(out.pixel(1, 0).unwrap(), Pixel::RED);
    assert_eq!(out.pixel(15, 2).unwrap(), Pixel::GREEN);
    assert_eq!(out.pixel(28, 3).unwrap(), Pixel::BLUE);
}
