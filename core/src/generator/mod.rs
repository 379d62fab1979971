use crate::*;

pub use random::*;

mod random;

/// Produces the fixed mine layout for a fresh game.
pub trait LayoutGenerator {
    fn generate(self, config: GameConfig) -> Layout;
}
