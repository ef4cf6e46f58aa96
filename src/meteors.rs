//! Background meteor shower. Randomness is injected so the page can use
//! `Math.random()` while tests use a fixed sequence.

#[derive(Clone, Debug, PartialEq)]
pub struct Meteor {
    pub size: f64,     // px, [2, 6)
    pub x: f64,        // % of viewport width
    pub y: f64,        // % of viewport height
    pub delay: f64,    // s, [0, 5)
    pub duration: f64, // s, [2, 5)
}

impl Meteor {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.x, self.y, self.size, self.size, self.delay, self.duration
        )
    }
}

/// `random` must yield values in `[0, 1)`.
pub fn generate(count: usize, mut random: impl FnMut() -> f64) -> Vec<Meteor> {
    (0..count)
        .map(|_| Meteor {
            size: random() * 4.0 + 2.0,
            x: random() * 100.0,
            y: random() * 100.0,
            delay: random() * 5.0,
            duration: random() * 3.0 + 2.0,
        })
        .collect()
}
