use rand::seq::SliceRandom;

pub struct RandomPicker;

impl RandomPicker {
    /// Uniform choice over a fixed, non-empty list of lines.
    pub fn pick(lines: &[&'static str]) -> &'static str {
        lines.choose(&mut rand::thread_rng()).copied().unwrap_or_default()
    }
}
