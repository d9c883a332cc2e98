//! Percentage-based placement math. Pure functions only; nothing here touches pixels.

pub(crate) mod solver;
