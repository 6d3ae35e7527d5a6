pub mod output;
pub mod provisioner;
