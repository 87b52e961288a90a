use crate::packed_location::PackedLocation;
use crate::width_height::WidthHeight;

impl PackedLocation {
    /// Whether or not two packed locations share any area.
    ///
    /// Locations are half open, so two locations that only touch along an edge do not overlap,
    /// and a location with no area never overlaps anything.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.whd.area() == 0 || other.whd.area() == 0 {
            return false;
        }

        (self.x as u64) < other.right()
            && (other.x as u64) < self.right()
            && (self.y as u64) < other.bottom()
            && (other.y as u64) < self.bottom()
    }

    /// Whether or not this location lies entirely within a container of the given size that has
    /// its top left corner at the origin.
    pub fn is_within(&self, container: WidthHeight) -> bool {
        self.right() <= container.width as u64 && self.bottom() <= container.height as u64
    }

    fn right(&self) -> u64 {
        self.x as u64 + self.whd.width as u64
    }

    fn bottom(&self) -> u64 {
        self.y as u64 + self.whd.height as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Verify that the overlaps method works properly.
    #[test]
    fn overlaps() {
        OverlapsTest {
            label: "Overlaps X and Y",
            location1: PackedLocation::new(3, 4, WidthHeight::new(1, 1)),
            location2: location_2_3(),
            expected_overlap: true,
        }
        .test();

        OverlapsTest {
            label: "Overlaps X only",
            location1: PackedLocation::new(3, 40, WidthHeight::new(1, 1)),
            location2: location_2_3(),
            expected_overlap: false,
        }
        .test();

        OverlapsTest {
            label: "Overlaps Y only",
            location1: PackedLocation::new(30, 4, WidthHeight::new(1, 1)),
            location2: location_2_3(),
            expected_overlap: false,
        }
        .test();

        OverlapsTest {
            label: "Touches the right edge",
            location1: PackedLocation::new(4, 3, WidthHeight::new(5, 5)),
            location2: location_2_3(),
            expected_overlap: false,
        }
        .test();

        OverlapsTest {
            label: "Contains the other location",
            location1: PackedLocation::new(0, 0, WidthHeight::new(50, 50)),
            location2: location_2_3(),
            expected_overlap: true,
        }
        .test();

        OverlapsTest {
            label: "Zero area inside the other location",
            location1: PackedLocation::new(3, 4, WidthHeight::new(0, 0)),
            location2: location_2_3(),
            expected_overlap: false,
        }
        .test();
    }

    /// Verify that we can tell whether or not a location fits inside of a container.
    #[test]
    fn is_within() {
        let container = WidthHeight::new(10, 10);

        assert!(PackedLocation::new(0, 0, WidthHeight::new(10, 10)).is_within(container));
        assert!(PackedLocation::new(5, 5, WidthHeight::new(5, 5)).is_within(container));
        assert!(!PackedLocation::new(6, 5, WidthHeight::new(5, 5)).is_within(container));
        assert!(!PackedLocation::new(5, 6, WidthHeight::new(5, 5)).is_within(container));
    }

    fn location_2_3() -> PackedLocation {
        PackedLocation::new(2, 3, WidthHeight::new(2, 3))
    }

    struct OverlapsTest {
        label: &'static str,
        location1: PackedLocation,
        location2: PackedLocation,
        expected_overlap: bool,
    }

    impl OverlapsTest {
        fn test(self) {
            assert_eq!(
                self.location1.overlaps(&self.location2),
                self.expected_overlap,
                "{}",
                self.label
            );
            assert_eq!(
                self.location2.overlaps(&self.location1),
                self.expected_overlap,
                "{} (reversed)",
                self.label
            );
        }
    }
}
