//! 7-segment digit glyphs
//!
//! Fixed mapping from a digit value to the set of segments to light.
//! Segment naming follows the usual clockwise convention:
//!
//! ```text
//!      A
//!    ┌───┐
//!  F │ G │ B
//!    ├───┤
//!  E │   │ C
//!    └───┘
//!      D
//! ```
//!
//! The table is a rendering contract, not behavioral logic: the display
//! controller picks a glyph (or blank) per digit, the firmware renderer
//! turns it into pin writes.

/// One of the seven segments of a display digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    /// All segments, in bit order
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// A set of segments, one bit per segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(u8);

impl Segments {
    /// The blank glyph (no segment lit)
    pub const NONE: Segments = Segments(0);

    const fn of(segments: &[Segment]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < segments.len() {
            bits |= segments[i].bit();
            i += 1;
        }
        Segments(bits)
    }

    /// Whether this set lights the given segment
    pub fn contains(self, segment: Segment) -> bool {
        self.0 & segment.bit() != 0
    }

    /// Number of lit segments
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether no segment is lit
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// Digit shapes for 0-9
const GLYPHS: [Segments; 10] = {
    use Segment::*;
    [
        Segments::of(&[A, B, C, D, E, F]),    // 0
        Segments::of(&[B, C]),                // 1
        Segments::of(&[A, B, G, E, D]),       // 2
        Segments::of(&[A, B, G, C, D]),       // 3
        Segments::of(&[F, G, B, C]),          // 4
        Segments::of(&[A, F, G, C, D]),       // 5
        Segments::of(&[A, F, G, C, D, E]),    // 6
        Segments::of(&[F, A, B, C]),          // 7
        Segments::of(&[A, B, F, G, C, D, E]), // 8
        Segments::of(&[A, B, F, G, C]),       // 9
    ]
};

/// Glyph for a digit value
///
/// Feeding a value outside 0-9 is a defect in the caller's encoding, not
/// a runtime condition, and is asserted as such.
pub fn glyph(value: u8) -> Segments {
    assert!(value <= 9, "digit value out of range");
    GLYPHS[value as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_shapes() {
        assert_eq!(glyph(8).len(), 7);
        assert_eq!(glyph(1).len(), 2);
        assert!(glyph(0).contains(Segment::A));
        assert!(!glyph(0).contains(Segment::G));
        assert!(glyph(4).contains(Segment::F));
        assert!(!glyph(4).contains(Segment::A));
    }

    #[test]
    fn test_glyphs_distinct() {
        for a in 0..10u8 {
            for b in (a + 1)..10 {
                assert_ne!(glyph(a), glyph(b), "glyphs {} and {} collide", a, b);
            }
        }
    }

    #[test]
    #[should_panic(expected = "digit value out of range")]
    fn test_glyph_rejects_out_of_range() {
        let _ = glyph(10);
    }
}
