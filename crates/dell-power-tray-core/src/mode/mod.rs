mod label;
mod mode_axis;
mod mode_id;

pub use {
    label::{format_label, header_text},
    mode_axis::ModeAxis,
    mode_id::ModeId,
};
