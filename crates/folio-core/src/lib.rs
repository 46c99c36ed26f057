// crates/folio-core/src/lib.rs
// Portfolio page behavior: state machines and transform math (native + WASM compatible)
// No browser dependencies allowed here

pub mod carousel;
pub mod config;
pub mod error;
pub mod limit;
pub mod nav;
pub mod reveal;
pub mod tilt;

pub use carousel::{CarouselEvent, CarouselState, CarouselView, DragState};
pub use config::{ActivePolicy, FolioConfig};
pub use error::{FolioError, Result};
pub use limit::{Gate, Throttle};
pub use nav::{MenuState, NavTracker, NavbarState, SectionHit};
pub use reveal::RevealTracker;
pub use tilt::{Bounds, Tilt};
