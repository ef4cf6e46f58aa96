//! Numbers behind the page's motion. Components turn these into inline
//! styles; the easing and timing live in `styles.css`.

/// Where a testimonial card sits given its circular offset from the active
/// card. Every field moves away from the resting pose as `|offset|` grows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardPose {
    pub translate_x: f64,
    pub translate_z: f64,
    pub rotate_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: i32,
}

impl CardPose {
    pub fn for_offset(offset: isize) -> Self {
        let o = offset as f64;
        let d = offset.unsigned_abs() as f64;
        Self {
            translate_x: o * 40.0,
            translate_z: -d * 100.0,
            rotate_y: o * 15.0,
            scale: 1.0 - d * 0.15,
            opacity: if d <= 1.0 { 1.0 } else { 0.3 },
            z_index: 10 - offset.unsigned_abs() as i32,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateX({}px) translateZ({}px) rotateY({}deg) scale({}); opacity: {}; z-index: {};",
            self.translate_x, self.translate_z, self.rotate_y, self.scale, self.opacity, self.z_index
        )
    }
}

/// Linear map of `input` from `from` onto `to`, clamped at both ends.
pub fn map_clamped(input: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let (a, b) = from;
    if a == b {
        return to.0;
    }
    let t = ((input - a) / (b - a)).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

/// Hero parallax layers and fade, driven by window scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    pub back_y: f64,
    pub front_y: f64,
    pub content_opacity: f64,
}

impl Parallax {
    pub fn at(scroll_y: f64) -> Self {
        Self {
            back_y: map_clamped(scroll_y, (0.0, 1000.0), (0.0, -200.0)),
            front_y: map_clamped(scroll_y, (0.0, 1000.0), (0.0, -400.0)),
            content_opacity: map_clamped(scroll_y, (0.0, 300.0), (1.0, 0.0)),
        }
    }
}

/// Inline delay for the `index`-th element of a staggered reveal.
pub fn stagger(index: usize, step_ms: u32) -> String {
    format!("animation-delay: {}ms;", index as u32 * step_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_pose_is_resting() {
        let p = CardPose::for_offset(0);
        assert_eq!(p.translate_x, 0.0);
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.opacity, 1.0);
        assert_eq!(p.z_index, 10);
    }

    #[test]
    fn test_pose_symmetric_and_monotonic() {
        let left = CardPose::for_offset(-1);
        let right = CardPose::for_offset(1);
        assert_eq!(left.translate_x, -right.translate_x);
        assert_eq!(left.scale, right.scale);
        assert_eq!(left.z_index, right.z_index);

        let far = CardPose::for_offset(2);
        assert!(far.scale < right.scale);
        assert!(far.opacity < right.opacity);
        assert!(far.z_index < right.z_index);
        assert!(far.translate_z < right.translate_z);
    }

    #[test]
    fn test_pose_style_string() {
        let s = CardPose::for_offset(-1).style();
        assert!(s.contains("translateX(-40px)"));
        assert!(s.contains("z-index: 9;"));
    }

    #[test]
    fn test_map_clamped() {
        assert_eq!(map_clamped(500.0, (0.0, 1000.0), (0.0, -200.0)), -100.0);
        assert_eq!(map_clamped(-10.0, (0.0, 1000.0), (0.0, -200.0)), 0.0);
        assert_eq!(map_clamped(5000.0, (0.0, 1000.0), (0.0, -200.0)), -200.0);
        assert_eq!(map_clamped(3.0, (1.0, 1.0), (7.0, 9.0)), 7.0);
    }

    #[test]
    fn test_parallax_fades_by_300() {
        assert_eq!(Parallax::at(0.0).content_opacity, 1.0);
        assert_eq!(Parallax::at(150.0).content_opacity, 0.5);
        assert_eq!(Parallax::at(300.0).content_opacity, 0.0);
        assert_eq!(Parallax::at(1000.0).front_y, -400.0);
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(3, 100), "animation-delay: 300ms;");
    }
}
