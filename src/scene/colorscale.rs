use crate::soil::Rgb;
use crate::surface::linspace;

/// Turbo colormap, polynomial fit, for `t` in `[0, 1]`.
///
/// Returns linear channel values in `[0, 1]`.
#[must_use]
pub fn turbo(t: f64) -> [f64; 3] {
    let t = t.clamp(0.0, 1.0);
    let r = 0.135_721_38
        + t * (4.615_392_6
            + t * (-42.660_322_58 + t * (132.131_082_34 + t * (-152.942_393_96 + t * 59.286_379_43))));
    let g = 0.091_402_61
        + t * (2.194_188_39
            + t * (4.842_966_58 + t * (-14.185_033_33 + t * (4.277_298_57 + t * 2.829_566_04))));
    let b = 0.106_673_3
        + t * (12.641_946_08
            + t * (-60.582_048_36 + t * (110.362_767_71 + t * (-89.903_109_12 + t * 27.348_249_73))));
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

/// `steps` evenly spaced turbo stops as `(position, color)` pairs.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn turbo_colorscale(steps: usize) -> Vec<(f64, Rgb)> {
    linspace(0.0, 1.0, steps)
        .into_iter()
        .map(|t| {
            let [r, g, b] = turbo(t).map(|c| (c * 255.0) as u8);
            (t, Rgb::new(r, g, b))
        })
        .collect()
}
