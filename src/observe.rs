//! Viewport-intersection watching.
//!
//! The host reports element placements with
//! [`Page::intersect`](crate::Page::intersect); the pure geometry here
//! decides whether an element has entered the observation region. The
//! region is the viewport contracted at the bottom edge, so reveals fire
//! slightly before an element is fully in view.

/// Axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Watcher configuration.
#[derive(Debug, Clone, Copy)]
pub struct WatchConfig {
    /// Fraction of the target that must be inside the observation region.
    pub threshold: f64,
    /// Pixels added to the region's bottom edge; negative values contract
    /// it, mirroring a `0px 0px -50px 0px` root margin.
    pub bottom_margin: f64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: -50.0,
        }
    }
}

/// What a watch callback wants to happen to its subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    /// Keep observing this element.
    Keep,
    /// Close the subscription for this element; it will never be reported
    /// again.
    Done,
}

/// Whether a target placed at `target` has entered the observation region
/// of `viewport` under `config`.
pub fn has_entered(config: WatchConfig, viewport: Rect, target: Rect) -> bool {
    let region_bottom = viewport.bottom() + config.bottom_margin;

    let overlap_x = viewport.right().min(target.right()) - viewport.x.max(target.x);
    let overlap_y = region_bottom.min(target.bottom()) - viewport.y.max(target.y);

    let area = target.width * target.height;
    if area <= 0.0 {
        // Degenerate rect: report entry on point containment.
        return target.x >= viewport.x
            && target.x <= viewport.right()
            && target.y >= viewport.y
            && target.y <= region_bottom;
    }

    if overlap_x <= 0.0 || overlap_y <= 0.0 {
        return false;
    }

    (overlap_x * overlap_y) / area >= config.threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn test_fully_visible_enters() {
        let target = Rect::new(100.0, 100.0, 200.0, 200.0);
        assert!(has_entered(WatchConfig::default(), VIEWPORT, target));
    }

    #[test]
    fn test_below_viewport_does_not_enter() {
        let target = Rect::new(100.0, 900.0, 200.0, 200.0);
        assert!(!has_entered(WatchConfig::default(), VIEWPORT, target));
    }

    #[test]
    fn test_bottom_margin_contracts_region() {
        // Tall target peeking 60px above the true viewport bottom: only
        // 10px remain inside the contracted region, under the 10% of its
        // 400px height that the threshold demands.
        let peeking = Rect::new(100.0, 740.0, 200.0, 400.0);
        assert!(!has_entered(WatchConfig::default(), VIEWPORT, peeking));

        // Without the contraction it would clear the threshold.
        let no_margin = WatchConfig {
            bottom_margin: 0.0,
            ..WatchConfig::default()
        };
        assert!(has_entered(no_margin, VIEWPORT, peeking));
    }

    #[test]
    fn test_threshold_fraction() {
        // 200px-tall target with exactly 10% (20px) inside the contracted
        // region bottom at y=750.
        let config = WatchConfig::default();
        let at_threshold = Rect::new(0.0, 730.0, 100.0, 200.0);
        assert!(has_entered(config, VIEWPORT, at_threshold));

        let under_threshold = Rect::new(0.0, 735.0, 100.0, 200.0);
        assert!(!has_entered(config, VIEWPORT, under_threshold));
    }
}
