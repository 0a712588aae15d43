const GREEN_HUE: f64 = 120.0;

pub fn connectivity_palette(max_count: usize) -> Vec<String> {
    let steps = max_count + 1;
    (0..steps)
        .map(|step| {
            let t = if steps > 1 {
                step as f64 / (steps - 1) as f64
            } else {
                0.0
            };
            hsl_to_hex(GREEN_HUE * (1.0 - t), 1.0, 0.5)
        })
        .collect()
}

fn hsl_to_hex(hue: f64, saturation: f64, lightness: f64) -> String {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    format!(
        "#{:02x}{:02x}{:02x}",
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8
    )
}
