//! Reduced-motion preference mirrored onto the document element.

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
pub const REDUCED_MOTION_ATTRIBUTE: &str = "data-reduced-motion";

/// Document surface holding the mirrored flag.
pub trait MotionSurface {
    fn set_reduced_motion(&mut self, reduced: bool);
}

/// Copy the current media-query result onto the surface.
pub fn mirror_reduced_motion<S: MotionSurface>(surface: &mut S, matches: bool) {
    tracing::debug!(matches, "reduced motion preference");
    surface.set_reduced_motion(matches);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirror_follows_query() {
        struct Flag(Option<bool>);
        impl MotionSurface for Flag {
            fn set_reduced_motion(&mut self, reduced: bool) {
                self.0 = Some(reduced);
            }
        }

        let mut flag = Flag(None);
        mirror_reduced_motion(&mut flag, true);
        assert_eq!(flag.0, Some(true));
        mirror_reduced_motion(&mut flag, false);
        assert_eq!(flag.0, Some(false));
    }
}
