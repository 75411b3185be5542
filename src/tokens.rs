//! Spacing scale used by the layout primitives.

/// A step on the spacing scale. One step is a quarter rem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Spacing(pub u16);

impl Spacing {
    /// CSS length for this step, e.g. `Spacing(8)` is `2rem`.
    pub fn to_css(self) -> String {
        if self.0 == 0 {
            return "0".to_string();
        }
        let rem = f32::from(self.0) * 0.25;
        format!("{}rem", rem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_scale() {
        assert_eq!(Spacing(8).to_css(), "2rem");
        assert_eq!(Spacing(1).to_css(), "0.25rem");
        assert_eq!(Spacing(2).to_css(), "0.5rem");
        assert_eq!(Spacing(6).to_css(), "1.5rem");
    }

    #[test]
    fn test_spacing_zero_is_unitless() {
        assert_eq!(Spacing(0).to_css(), "0");
        assert_eq!(Spacing::default(), Spacing(0));
    }
}
