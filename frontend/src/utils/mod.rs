pub mod parallax;
pub mod scroll;
pub mod shuffle;
