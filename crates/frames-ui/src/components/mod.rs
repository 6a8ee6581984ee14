pub(crate) mod atoms;
pub(crate) mod load;
pub(crate) mod shell;
pub(crate) mod toast;
pub(crate) mod user_table;
