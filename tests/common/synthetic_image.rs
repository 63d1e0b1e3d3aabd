/// Generates a constant-valued image with impulses at deterministic spots.
///
/// Impulses alternate between 0 (pepper) and 255 (salt) and are placed with a
/// fixed-stride walk, so runs are reproducible.
pub fn salt_pepper_u8(width: usize, height: usize, base: u8, impulse_stride: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(impulse_stride > 0, "impulse stride must be positive");

    let mut img = vec![base; width * height];
    let mut salt = true;
    for i in (0..width * height).step_by(impulse_stride) {
        img[i] = if salt { 255 } else { 0 };
        salt = !salt;
    }
    img
}

/// Generates a smooth horizontal gradient in [0, 1].
pub fn gradient_f32(width: usize, height: usize) -> Vec<f32> {
    assert!(width > 1 && height > 0, "need at least two columns");

    let mut img = vec![0.0f32; width * height];
    for y in 0..height {
        for x in 0..width {
            img[y * width + x] = x as f32 / (width - 1) as f32;
        }
    }
    img
}
