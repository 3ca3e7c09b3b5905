pub mod initialize_config;
pub mod update_config;
pub mod create_airdrop;
pub mod claim;
pub mod send_token_back;
pub mod view;

pub use initialize_config::*;
pub use update_config::*;
pub use create_airdrop::*;
pub use claim::*;
pub use send_token_back::*;
pub use view::*;
