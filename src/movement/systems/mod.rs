//! Movement domain: system modules for input and locomotion.

pub(crate) mod drive;
pub(crate) mod input;

pub(crate) use drive::drive_player;
pub(crate) use input::sample_input;
