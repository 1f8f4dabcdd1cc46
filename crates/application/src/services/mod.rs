pub mod transition_detector;

pub use transition_detector::TransitionDetectorService;
