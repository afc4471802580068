pub(crate) mod classify;
pub(crate) mod implicit;
pub(crate) mod scan;
pub(crate) mod token;
