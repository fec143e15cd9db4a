//! Asset size representations.
//!
//! Sizes may be declared as a bare edge length (square) or as an explicit
//! width/height pair. Both forms normalize into [`ResolvedSize`], which
//! keeps the original declaration around for strict comparisons and padded
//! inner-box computation.

use serde::{Deserialize, Serialize};

/// A declared asset size: a bare square edge length, or an explicit pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AssetSize {
    /// Square icon, e.g. `512`.
    Square(u32),
    /// Explicit dimensions, e.g. `{ width: 512, height: 256 }`.
    Rectangular { width: u32, height: u32 },
}

impl AssetSize {
    /// Normalize into a [`ResolvedSize`].
    pub fn resolve(self) -> ResolvedSize {
        let (width, height) = match self {
            AssetSize::Square(edge) => (edge, edge),
            AssetSize::Rectangular { width, height } => (width, height),
        };
        ResolvedSize {
            original: self,
            width,
            height,
        }
    }

    /// Compare a declared size against a resolved one.
    ///
    /// Sizes of different shapes never compare equal, even when their
    /// effective dimensions coincide: `64` is not the same declaration as
    /// `{ width: 64, height: 64 }`.
    pub fn matches(&self, resolved: &ResolvedSize) -> bool {
        match (self, resolved.original) {
            (AssetSize::Square(a), AssetSize::Square(b)) => *a == b,
            (AssetSize::Rectangular { width, height }, AssetSize::Rectangular { .. }) => {
                *width == resolved.width && *height == resolved.height
            }
            _ => false,
        }
    }
}

impl From<u32> for AssetSize {
    fn from(edge: u32) -> Self {
        AssetSize::Square(edge)
    }
}

impl From<(u32, u32)> for AssetSize {
    fn from((width, height): (u32, u32)) -> Self {
        AssetSize::Rectangular { width, height }
    }
}

/// A size normalized to concrete dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedSize {
    /// The size as originally declared.
    pub original: AssetSize,
    pub width: u32,
    pub height: u32,
}

impl ResolvedSize {
    /// The inner box an image occupies on the canvas after padding.
    ///
    /// Each axis is `round(declared_dimension * (1 - padding))`, computed
    /// from the original declaration. Never collapses below 1x1.
    pub fn padded_box(&self, padding: f64) -> (u32, u32) {
        let (width, height) = match self.original {
            AssetSize::Square(edge) => (edge, edge),
            AssetSize::Rectangular { width, height } => (width, height),
        };
        (scale_dimension(width, padding), scale_dimension(height, padding))
    }
}

fn scale_dimension(dimension: u32, padding: f64) -> u32 {
    ((f64::from(dimension) * (1.0 - padding)).round() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_square() {
        let resolved = AssetSize::Square(512).resolve();
        assert_eq!(resolved.width, 512);
        assert_eq!(resolved.height, 512);
        assert_eq!(resolved.original, AssetSize::Square(512));
    }

    #[test]
    fn test_resolve_rectangular() {
        let resolved = AssetSize::Rectangular {
            width: 640,
            height: 480,
        }
        .resolve();
        assert_eq!(resolved.width, 640);
        assert_eq!(resolved.height, 480);
    }

    #[test]
    fn test_matches_same_shape() {
        let square = AssetSize::Square(64);
        assert!(square.matches(&square.resolve()));

        let rect = AssetSize::Rectangular {
            width: 64,
            height: 32,
        };
        assert!(rect.matches(&rect.resolve()));
    }

    #[test]
    fn test_matches_rejects_shape_mismatch() {
        // Equal effective dimensions, different declaration shapes.
        let square = AssetSize::Square(64);
        let rect = AssetSize::Rectangular {
            width: 64,
            height: 64,
        };
        assert!(!square.matches(&rect.resolve()));
        assert!(!rect.matches(&square.resolve()));
    }

    #[test]
    fn test_matches_rejects_different_values() {
        assert!(!AssetSize::Square(64).matches(&AssetSize::Square(48).resolve()));
    }

    #[test]
    fn test_padded_box() {
        let resolved = AssetSize::Square(512).resolve();
        // 512 * 0.7 = 358.4 -> 358
        assert_eq!(resolved.padded_box(0.3), (358, 358));
        assert_eq!(resolved.padded_box(0.0), (512, 512));
    }

    #[test]
    fn test_padded_box_rounds_per_axis() {
        let resolved = AssetSize::Rectangular {
            width: 100,
            height: 75,
        }
        .resolve();
        // 100 * 0.95 = 95, 75 * 0.95 = 71.25 -> 71
        assert_eq!(resolved.padded_box(0.05), (95, 71));
    }

    #[test]
    fn test_padded_box_never_collapses() {
        let resolved = AssetSize::Square(1).resolve();
        assert_eq!(resolved.padded_box(0.9), (1, 1));
    }

    #[test]
    fn test_serde_untagged_forms() {
        let square: AssetSize = serde_yaml::from_str("64").unwrap();
        assert_eq!(square, AssetSize::Square(64));

        let rect: AssetSize = serde_yaml::from_str("{ width: 640, height: 480 }").unwrap();
        assert_eq!(
            rect,
            AssetSize::Rectangular {
                width: 640,
                height: 480
            }
        );
    }
}
