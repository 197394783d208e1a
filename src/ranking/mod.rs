//! Curated ranking and display ordering of classified places.

pub mod pipeline;
mod table;

pub use pipeline::{
    classify_all, group_for_display, order_for_display, DisplayEntry, RunSummary,
};
pub use table::{RankEntry, RankTable};
