pub(crate) mod breakdown;
pub(crate) mod cards;
pub(crate) mod entries;
pub(crate) mod form;
pub(crate) mod header;
