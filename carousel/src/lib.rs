//! Headless engine for an endlessly looping image carousel.
//!
//! The crate owns navigation, gesture and selection state. Rendering is left
//! to the caller, who implements [`TrackHost`] and reads the derived state
//! off [`Carousel`].

pub mod carousel;
pub mod config;
pub mod gesture;
pub mod host;
pub mod item;
pub mod keyboard;
pub mod ring;
pub mod scheduler;
pub mod selection;
pub mod selector;

pub use carousel::Carousel;
pub use config::{CarouselConfig, ConfigError, GestureConfig};
pub use gesture::{GestureOutcome, PointerEvent, PointerGestureInterpreter, PointerType};
pub use host::{Clock, FixedTrack, ManualClock, SystemClock, TrackHost};
pub use item::{CarouselImage, CarouselItem};
pub use keyboard::{Key, KeyCommand, KeyScope, KeyboardListener};
pub use ring::{Slide, SlideRing, TrackState, normalize_index};
pub use scheduler::{CommitHandle, Direction, NavigationScheduler, shortest_path};
pub use selection::{SelectionChange, SelectionState};
pub use selector::{ThumbnailSelector, image_label, visible_thumbnail_indexes};
