//! Procedural rasterizer for the C0lorNote icon.
//!
//! Shapes are described by signed distance functions in unit coordinates
//! (origin bottom-left, y up). Coverage is derived from the distance in
//! pixels, which gives antialiased edges without a supersampling pass.

use image::{Rgba, RgbaImage};

const DARK: [u8; 3] = [0x33, 0x33, 0x33];
const PAPER: [u8; 3] = [0xFF, 0xFF, 0xFF];
const RULE: [u8; 3] = [0xCC, 0xCC, 0xCC];
const FOLD: [u8; 3] = [0xEE, 0xEE, 0xEE];
const MATRIX_GREEN: [u8; 3] = [0x00, 0xFF, 0x41];
const DREAMCORE_PURPLE: [u8; 3] = [0xC1, 0x47, 0xE9];
const MINIMALIST_YELLOW: [u8; 3] = [0xFF, 0xDA, 0x79];

#[derive(Clone, Copy, Debug)]
struct Point {
    x: f32,
    y: f32,
}

const fn pt(x: f32, y: f32) -> Point {
    Point { x, y }
}

fn length(x: f32, y: f32) -> f32 {
    (x * x + y * y).sqrt()
}

fn distance(a: Point, b: Point) -> f32 {
    length(a.x - b.x, a.y - b.y)
}

/// Axis-aligned rectangle, negative inside.
fn rect_sd(p: Point, min: Point, max: Point) -> f32 {
    let cx = (min.x + max.x) / 2.0;
    let cy = (min.y + max.y) / 2.0;
    let qx = (p.x - cx).abs() - (max.x - min.x) / 2.0;
    let qy = (p.y - cy).abs() - (max.y - min.y) / 2.0;
    length(qx.max(0.0), qy.max(0.0)) + qx.max(qy).min(0.0)
}

fn circle_sd(p: Point, center: Point, radius: f32) -> f32 {
    distance(p, center) - radius
}

fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len2 = abx * abx + aby * aby;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0)
    };
    distance(p, pt(a.x + t * abx, a.y + t * aby))
}

/// Triangle, negative inside.
fn triangle_sd(p: Point, v: [Point; 3]) -> f32 {
    let edge = (0..3)
        .map(|i| segment_distance(p, v[i], v[(i + 1) % 3]))
        .fold(f32::INFINITY, f32::min);

    let sign = |a: Point, b: Point| (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y);
    let d1 = sign(v[0], v[1]);
    let d2 = sign(v[1], v[2]);
    let d3 = sign(v[2], v[0]);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    if has_neg && has_pos { edge } else { -edge }
}

/// Approximate distance to an ellipse outline.
fn ellipse_distance(p: Point, center: Point, a: f32, b: f32) -> f32 {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    let k = length(dx / a, dy / b);
    if k == 0.0 {
        return a.min(b);
    }
    let grad = length(dx / (a * a), dy / (b * b)) / k;
    ((k - 1.0) / grad).abs()
}

/// Half of an ellipse outline: the left half when `left`, else the right half.
fn half_ellipse_distance(p: Point, center: Point, a: f32, b: f32, left: bool) -> f32 {
    let on_side = if left { p.x <= center.x } else { p.x >= center.x };
    if on_side {
        ellipse_distance(p, center, a, b)
    } else {
        distance(p, pt(center.x, center.y + b)).min(distance(p, pt(center.x, center.y - b)))
    }
}

/// Circle outline with an opening of `gap` radians centred on the +x axis.
fn open_circle_distance(p: Point, center: Point, radius: f32, gap: f32) -> f32 {
    let angle = (p.y - center.y).atan2(p.x - center.x);
    let half_gap = gap / 2.0;
    if angle.abs() >= half_gap {
        (distance(p, center) - radius).abs()
    } else {
        let upper = pt(
            center.x + radius * half_gap.cos(),
            center.y + radius * half_gap.sin(),
        );
        let lower = pt(upper.x, center.y - radius * half_gap.sin());
        distance(p, upper).min(distance(p, lower))
    }
}

/// Distance to `y = 0.5 + 0.1 sin(20x)` for x in [0.3, 0.7].
fn wave_distance(p: Point) -> f32 {
    let f = |x: f32| 0.5 + 0.1 * (20.0 * x).sin();
    let (start, end) = (0.3_f32, 0.7_f32);
    if p.x < start {
        return distance(p, pt(start, f(start)));
    }
    if p.x > end {
        return distance(p, pt(end, f(end)));
    }
    let slope = 2.0 * (20.0 * p.x).cos();
    (p.y - f(p.x)).abs() / (1.0 + slope * slope).sqrt()
}

/// Floating-point RGBA canvas with straight alpha.
struct Canvas {
    size: u32,
    pixels: Vec<[f32; 4]>,
}

impl Canvas {
    fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![[0.0; 4]; (size as usize) * (size as usize)],
        }
    }

    /// Composites `color` over the canvas where `sd` is negative.
    ///
    /// `bounds` (unit coordinates, min then max) limits the pixels evaluated.
    fn paint(
        &mut self,
        bounds: (Point, Point),
        color: [u8; 3],
        opacity: f32,
        sd: impl Fn(Point) -> f32,
    ) {
        let n = self.size as f32;
        let margin = 2.0 / n;
        let to_px = |u: f32| (u * n).clamp(0.0, n) as u32;
        let x0 = to_px(bounds.0.x - margin);
        let x1 = to_px(bounds.1.x + margin);
        // Rows count from the top, unit y from the bottom
        let y0 = to_px(1.0 - bounds.1.y - margin);
        let y1 = to_px(1.0 - bounds.0.y + margin);

        let src = color.map(|c| f32::from(c) / 255.0);
        for py in y0..y1.min(self.size) {
            for px in x0..x1.min(self.size) {
                let p = pt((px as f32 + 0.5) / n, 1.0 - (py as f32 + 0.5) / n);
                let coverage = (0.5 - sd(p) * n).clamp(0.0, 1.0);
                if coverage <= 0.0 {
                    continue;
                }
                let alpha = opacity * coverage;
                let dst = &mut self.pixels[(py * self.size + px) as usize];
                let out_a = alpha + dst[3] * (1.0 - alpha);
                for i in 0..3 {
                    dst[i] = (src[i] * alpha + dst[i] * dst[3] * (1.0 - alpha)) / out_a;
                }
                dst[3] = out_a;
            }
        }
    }

    fn stroke(
        &mut self,
        bounds: (Point, Point),
        color: [u8; 3],
        half_width: f32,
        distance: impl Fn(Point) -> f32,
    ) {
        let grow = (
            pt(bounds.0.x - half_width, bounds.0.y - half_width),
            pt(bounds.1.x + half_width, bounds.1.y + half_width),
        );
        self.paint(grow, color, 1.0, |p| distance(p) - half_width);
    }

    fn into_image(self) -> RgbaImage {
        let size = self.size;
        let mut image = RgbaImage::new(size, size);
        for (i, px) in self.pixels.into_iter().enumerate() {
            let x = i as u32 % size;
            let y = i as u32 / size;
            let [r, g, b, a] = px.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
            image.put_pixel(x, y, Rgba([r, g, b, a]));
        }
        image
    }
}

/// Renders the icon at `size` x `size` pixels.
pub fn render(size: u32) -> RgbaImage {
    let size = size.max(1);
    let mut canvas = Canvas::new(size);

    // Notepad
    let note = (pt(0.15, 0.1), pt(0.85, 0.9));
    canvas.paint(note, PAPER, 0.95, |p| rect_sd(p, note.0, note.1));
    canvas.stroke(note, DARK, 0.0027, |p| rect_sd(p, note.0, note.1).abs());

    // Ruled lines
    for i in 1..8 {
        let y = 0.1 + i as f32 * 0.1;
        let (a, b) = (pt(0.2, y), pt(0.8, y));
        canvas.stroke((a, b), RULE, 0.0014, |p| segment_distance(p, a, b));
    }

    // Minimalist circle
    let center = pt(0.5, 0.5);
    canvas.paint(
        (pt(0.35, 0.35), pt(0.65, 0.65)),
        MINIMALIST_YELLOW,
        0.5,
        |p| circle_sd(p, center, 0.15),
    );

    // Corner fold
    let fold = [pt(0.85, 0.9), pt(0.85, 0.75), pt(0.7, 0.9)];
    let fold_bounds = (pt(0.7, 0.75), pt(0.85, 0.9));
    canvas.paint(fold_bounds, FOLD, 1.0, |p| triangle_sd(p, fold));
    canvas.stroke(fold_bounds, DARK, 0.002, |p| triangle_sd(p, fold).abs());

    // Code brackets
    let (left, right) = (pt(0.3, 0.5), pt(0.7, 0.5));
    canvas.stroke((pt(0.2, 0.2), pt(0.3, 0.8)), MATRIX_GREEN, 0.0055, |p| {
        half_ellipse_distance(p, left, 0.1, 0.3, true)
    });
    canvas.stroke((pt(0.7, 0.2), pt(0.8, 0.8)), MATRIX_GREEN, 0.0055, |p| {
        half_ellipse_distance(p, right, 0.1, 0.3, false)
    });

    // Dreamcore wave
    canvas.stroke(
        (pt(0.3, 0.4), pt(0.7, 0.6)),
        DREAMCORE_PURPLE,
        0.004,
        wave_distance,
    );

    // "C0" monogram
    let c_center = pt(0.455, 0.5);
    canvas.stroke((pt(0.41, 0.455), pt(0.5, 0.545)), DARK, 0.008, |p| {
        open_circle_distance(p, c_center, 0.045, std::f32::consts::FRAC_PI_2)
    });
    let zero_center = pt(0.555, 0.5);
    canvas.stroke((pt(0.52, 0.45), pt(0.59, 0.55)), DARK, 0.008, |p| {
        ellipse_distance(p, zero_center, 0.035, 0.05)
    });

    canvas.into_image()
}
