//! Movement domain: system modules for locomotion updates.

pub(crate) mod ground;
pub(crate) mod input;
pub(crate) mod locomotion;

pub(crate) use ground::detect_ground;
pub(crate) use input::read_input;
pub(crate) use locomotion::{apply_locomotion, update_animation_flags, update_facing};
