pub(crate) mod compare;
pub(crate) mod loan;
pub(crate) mod prettify;
