//! Reusable view components shared by pages.

pub mod nav_bar;
pub mod profile_card;
pub mod save_feedback;
