//! Free placements anchored to the nearest known vertex.
//!
//! An [`AnchoredFrame`] keeps a viewpoint as "anchor vertex plus relative
//! isometry". Rebasing walks the anchor toward the vertex nearest the
//! viewer, which keeps the relative translation bounded by about one edge
//! length however far the viewer travels.

mod anchored_frame;

pub use self::anchored_frame::AnchoredFrame;
