use super::bounded::BoundedRng;
use crate::common::Face;

/// A source of die faces.
pub trait Roller {
    /// A uniform draw in `[0, n)`.
    fn next(&mut self, n: u32) -> u32;

    fn roll(&mut self, faces: Face) -> Face {
        1 + self.next(faces)
    }
}

impl Roller for BoundedRng {
    fn next(&mut self, n: u32) -> u32 {
        BoundedRng::next(self, n)
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedRoller;

#[cfg(test)]
mod scripted {
    use super::*;

    /// Replays fixed draws in order and records the ranges it was asked for.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedRoller {
        draws: Vec<u32>,
        pub requests: Vec<u32>,
    }

    impl ScriptedRoller {
        pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
            Self {
                draws: draws.into_iter().collect(),
                requests: Vec::new(),
            }
        }

        /// Builds a roller whose successive rolls produce exactly `faces`.
        pub fn faces(faces: &[Face]) -> Self {
            Self::new(faces.iter().map(|f| f - 1))
        }
    }

    impl Roller for ScriptedRoller {
        fn next(&mut self, n: u32) -> u32 {
            let draw = self.draws[self.requests.len()];
            assert!(draw < n, "scripted draw {} is outside [0, {})", draw, n);
            self.requests.push(n);
            draw
        }
    }
}
