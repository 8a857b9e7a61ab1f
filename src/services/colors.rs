use std::collections::HashMap;

use rand::Rng;

use crate::models::Rgb;

/// Fixed fill for the `"Other"` rollup slice, whatever assigner is in use
pub const OTHER_COLOR: Rgb = Rgb::new(128, 128, 128);

/// Assigns a display color to each category label.
///
/// Chart rendering is outside this crate; the engine only needs a collaborator
/// that hands back a color per label, stable for the lifetime of the assigner
/// so a legend and its slices agree.
pub trait ColorAssigner {
    fn color_for(&mut self, label: &str) -> Rgb;
}

const PALETTE: [Rgb; 10] = [
    Rgb::new(231, 76, 60),
    Rgb::new(46, 134, 193),
    Rgb::new(39, 174, 96),
    Rgb::new(241, 196, 15),
    Rgb::new(142, 68, 173),
    Rgb::new(230, 126, 34),
    Rgb::new(26, 188, 156),
    Rgb::new(52, 73, 94),
    Rgb::new(217, 136, 128),
    Rgb::new(133, 146, 158),
];

/// Cycles a fixed palette in assignment order; deterministic, so repeated
/// renders of the same series color identically.
#[derive(Debug, Default)]
pub struct PaletteColorAssigner {
    assigned: HashMap<String, Rgb>,
    next: usize,
}

impl PaletteColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorAssigner for PaletteColorAssigner {
    fn color_for(&mut self, label: &str) -> Rgb {
        if let Some(color) = self.assigned.get(label) {
            return *color;
        }
        let color = PALETTE[self.next % PALETTE.len()];
        self.next += 1;
        self.assigned.insert(label.to_string(), color);
        color
    }
}

/// Draws a uniform random color per new label, the way the original charts
/// colored their slices
#[derive(Debug, Default)]
pub struct RandomColorAssigner {
    assigned: HashMap<String, Rgb>,
}

impl RandomColorAssigner {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ColorAssigner for RandomColorAssigner {
    fn color_for(&mut self, label: &str) -> Rgb {
        if let Some(color) = self.assigned.get(label) {
            return *color;
        }
        let mut rng = rand::thread_rng();
        let color = Rgb::new(rng.gen::<u8>(), rng.gen::<u8>(), rng.gen::<u8>());
        self.assigned.insert(label.to_string(), color);
        color
    }
}
