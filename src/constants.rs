/// DOM wiring constants for the web front-end.
///
/// The physics lives in `flick_core::constants`; these only name the page
/// element and style property the front-end touches.
// Element that is dragged and sprung back
pub const CARD_ELEMENT_ID: &str = "card";

// Style property written every rendered frame
pub const TRANSFORM_PROPERTY: &str = "transform";
