pub mod current;
pub mod install;
pub mod list;
pub mod ls_remote;
pub mod uninstall;
pub mod r#use;
