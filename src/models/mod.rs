pub mod form;
pub mod provisioned;
pub mod template;
