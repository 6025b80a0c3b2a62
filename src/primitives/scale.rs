//! Scale - CSS transform scale factor applied to the zoomed image

bounded_f32!(Scale, 1.0, 4.0);

impl Scale {
    pub const DOUBLE: Self = Self::new(2.0);

    /// Always emitted, even at 1.0, so the transform string keeps one shape
    pub fn to_css(&self) -> String {
        format!("scale({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_css() {
        assert_eq!(Scale::DOUBLE.to_css(), "scale(2)");
        assert_eq!(Scale::new(1.0).to_css(), "scale(1)");
        assert_eq!(Scale::new(1.5).to_css(), "scale(1.5)");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn scale_rejects_shrinking() {
        let _ = Scale::new(0.5);
    }
}
