mod alias;
mod cd;
mod executable;
mod exit;

pub(crate) use alias::handle_alias;
pub(crate) use cd::handle_cd;
pub(crate) use executable::handle_executable;
pub(crate) use exit::handle_exit;
