pub(crate) mod configuration_detail;
pub(crate) mod configuration_list;
pub(crate) mod navbar;
pub(crate) mod shell;
pub(crate) mod sidebar;
pub(crate) mod status;
