//! Input handling subsystem for UI interactions.
//!
//! Translates egui input into the platform-free events of the page
//! controller:
//! - Key presses
//! - Pointer drags on the carousel track, fed as touch gestures

pub mod page_input_handler;
