mod generate;
mod init;

pub use generate::{GenerateArgs, generate_command};
pub use init::init_command;
