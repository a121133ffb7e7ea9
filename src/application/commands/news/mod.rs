mod create;
mod naming;
mod service;
mod update;

pub use create::CreateNewsCommand;
pub use naming::FileNamer;
pub use service::NewsCommandService;
pub use update::UpdateNewsCommand;

pub(crate) const NEWS_NOT_FOUND: &str = "News not found.";
pub(crate) const NOT_OWNER: &str = "User is unauthorized.";
