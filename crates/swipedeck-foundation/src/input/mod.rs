pub mod types;

pub use types::{InputFamily, PointerPhase, RawInput, Signal, TouchPoints};

pub mod prelude {
    pub use super::types::{InputFamily, PointerPhase, RawInput, Signal, TouchPoints};
}
