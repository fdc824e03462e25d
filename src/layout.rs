use thiserror::Error;

// ---------------------------------------------------------------------------
// Size – a width × height pair
// ---------------------------------------------------------------------------

/// Dimensions of a rectangle in logical pixels.
///
/// Purely a value: no identity, no lifecycle. Used both for the container
/// ("parent") and for the item being fitted into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }

    /// Aspect ratio as height / width.
    pub fn ratio(&self) -> f32 {
        self.height / self.width
    }

    /// Both dimensions are positive finite numbers.
    fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}×{:.0}", self.width, self.height)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// A dimension was zero, negative, or non-finite. Bad inputs are caller
    /// errors, so they are rejected up front rather than propagated as
    /// NaN / infinity through the arithmetic.
    #[error("invalid dimension {width}×{height}: both sides must be positive and finite")]
    InvalidDimension { width: f32, height: f32 },
}

// ---------------------------------------------------------------------------
// Contain fit
// ---------------------------------------------------------------------------

/// Which fitted dimension [`fit`] should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitAxis {
    Height,
    Width,
}

/// Compute the largest size at which `item` can be shown inside `parent`
/// while preserving `item`'s aspect ratio, without overflowing in either
/// dimension ("contain" fit).
///
/// When the parent is relatively taller than the item, the width is the
/// binding constraint; otherwise the height is. Equal ratios land in the
/// fit-by-height branch.
pub fn fit_size(parent: Size, item: Size) -> Result<Size, LayoutError> {
    for s in [parent, item] {
        if !s.is_valid() {
            return Err(LayoutError::InvalidDimension {
                width: s.width,
                height: s.height,
            });
        }
    }

    let item_ratio = item.ratio();
    let fitted = if parent.ratio() > item_ratio {
        // Fit by width
        Size::new(parent.width, parent.width * item_ratio)
    } else {
        // Fit by height
        Size::new(parent.height / item_ratio, parent.height)
    };
    Ok(fitted)
}

/// One dimension of the contain fit, selected by `axis`.
pub fn fit(parent: Size, item: Size, axis: FitAxis) -> Result<f32, LayoutError> {
    let fitted = fit_size(parent, item)?;
    Ok(match axis {
        FitAxis::Height => fitted.height,
        FitAxis::Width => fitted.width,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn size(width: f32, height: f32) -> Size {
        Size::new(width, height)
    }

    #[test]
    fn wide_item_in_square_parent_fits_by_width() {
        // parent 100×100, item 100×50: parent ratio 1.0 > item ratio 0.5
        let parent = size(100.0, 100.0);
        let item = size(100.0, 50.0);
        assert_eq!(fit(parent, item, FitAxis::Width).unwrap(), 100.0);
        assert_eq!(fit(parent, item, FitAxis::Height).unwrap(), 50.0);
    }

    #[test]
    fn square_item_in_tall_parent_is_width_bound() {
        // parent 100 wide × 200 high, item 100×100: parent ratio 2.0 > item
        // ratio 1.0, so the width binds
        let parent = size(100.0, 200.0);
        let item = size(100.0, 100.0);
        assert_eq!(fit(parent, item, FitAxis::Width).unwrap(), 100.0);
        assert_eq!(fit(parent, item, FitAxis::Height).unwrap(), 100.0);
    }

    #[test]
    fn equal_ratios_take_the_height_branch() {
        let parent = size(100.0, 100.0);
        let item = size(100.0, 100.0);
        let fitted = fit_size(parent, item).unwrap();
        assert_eq!(fitted.height, 100.0);
        assert_eq!(fitted.width, 100.0);
    }

    #[test]
    fn fitted_rect_preserves_item_ratio() {
        let cases = [
            (size(1280.0, 720.0), size(1920.0, 1080.0)),
            (size(720.0, 1280.0), size(1920.0, 1080.0)),
            (size(300.0, 300.0), size(40.0, 1000.0)),
            (size(97.0, 13.0), size(512.0, 512.0)),
        ];
        for (parent, item) in cases {
            let fitted = fit_size(parent, item).unwrap();
            assert!(
                (fitted.ratio() - item.ratio()).abs() < EPS,
                "ratio drift for parent {parent}, item {item}: {} vs {}",
                fitted.ratio(),
                item.ratio()
            );
        }
    }

    #[test]
    fn fitted_rect_never_overflows_parent() {
        let cases = [
            (size(1280.0, 720.0), size(1920.0, 1080.0)),
            (size(200.0, 900.0), size(350.0, 40.0)),
            (size(64.0, 64.0), size(1.0, 4096.0)),
        ];
        for (parent, item) in cases {
            let fitted = fit_size(parent, item).unwrap();
            assert!(fitted.width <= parent.width + EPS, "parent {parent}, item {item}");
            assert!(fitted.height <= parent.height + EPS, "parent {parent}, item {item}");
        }
    }

    #[test]
    fn pure_function_is_repeatable() {
        let parent = size(123.0, 456.0);
        let item = size(789.0, 321.0);
        let first = fit(parent, item, FitAxis::Width).unwrap();
        let second = fit(parent, item, FitAxis::Width).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn both_axes_reconstruct_the_item_rect() {
        let parent = size(640.0, 480.0);
        let item = size(1000.0, 200.0);
        let w = fit(parent, item, FitAxis::Width).unwrap();
        let h = fit(parent, item, FitAxis::Height).unwrap();
        assert!((h / w - item.ratio()).abs() < EPS);
    }

    #[test]
    fn zero_width_item_is_rejected() {
        let err = fit_size(size(100.0, 100.0), size(0.0, 50.0)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDimension { .. }));
    }

    #[test]
    fn negative_parent_height_is_rejected() {
        let err = fit_size(size(100.0, -1.0), size(50.0, 50.0)).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidDimension { .. }));
    }

    #[test]
    fn non_finite_dimensions_are_rejected() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            assert!(fit_size(size(bad, 10.0), size(5.0, 5.0)).is_err());
            assert!(fit_size(size(10.0, 10.0), size(5.0, bad)).is_err());
        }
    }
}
