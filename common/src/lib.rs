// everything shared by the webapp that isn't a wire type: the site config,
// the content tables, and the bits of presentation logic that are worth
// testing outside a browser
pub mod config;
pub mod content;
pub mod typewriter;

// entrance animations are staggered by a fixed step per item
pub const STAGGER_STEP_MS: u32 = 100;

pub fn stagger_delay(base_ms: u32, index: usize, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(index.saturating_mul(step_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(200, 0, STAGGER_STEP_MS), 200);
        assert_eq!(stagger_delay(200, 3, STAGGER_STEP_MS), 500);
        assert_eq!(stagger_delay(u32::MAX - 1, 2, 10), u32::MAX);
    }
}
