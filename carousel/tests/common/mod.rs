#![allow(dead_code)]

use std::time::Duration;

use carousel::{Carousel, CarouselConfig, CarouselImage, ManualClock, TrackHost};

/// Calls the engine made on its track, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackOp {
    Transition(bool),
    Layout,
    Capture(u64),
    Release(u64),
}

/// Headless track that records every call.
#[derive(Debug)]
pub struct RecordingTrack {
    pub width: f32,
    pub ops: Vec<TrackOp>,
}

impl RecordingTrack {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ops: Vec::new(),
        }
    }
}

impl TrackHost for RecordingTrack {
    fn width(&self) -> f32 {
        self.width
    }

    fn set_transition(&mut self, enabled: bool) {
        self.ops.push(TrackOp::Transition(enabled));
    }

    fn force_layout(&mut self) {
        self.ops.push(TrackOp::Layout);
    }

    fn capture_pointer(&mut self, pointer_id: u64) {
        self.ops.push(TrackOp::Capture(pointer_id));
    }

    fn release_pointer(&mut self, pointer_id: u64) {
        self.ops.push(TrackOp::Release(pointer_id));
    }
}

pub type TestCarousel = Carousel<CarouselImage, RecordingTrack>;

pub fn images(count: usize) -> Vec<CarouselImage> {
    (0..count)
        .map(|i| {
            CarouselImage::new(format!("https://example.com/{}.jpg", i + 1))
                .alt(format!("Photo {}", i + 1))
        })
        .collect()
}

pub fn setup(count: usize) -> TestCarousel {
    setup_with_clock(count).0
}

pub fn setup_with_clock(count: usize) -> (TestCarousel, ManualClock) {
    let clock = ManualClock::new();
    let carousel = Carousel::with_config(
        images(count),
        RecordingTrack::new(400.0),
        CarouselConfig::default(),
        clock.clone(),
    )
    .unwrap();
    (carousel, clock)
}

pub fn ring(carousel: &TestCarousel) -> Vec<usize> {
    carousel.ring().item_indexes()
}

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}
