pub(crate) mod button;
pub(crate) mod flow;
pub(crate) mod label;
pub(crate) mod schematic;
pub(crate) mod spacer;
pub(crate) mod table;
