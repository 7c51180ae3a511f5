pub mod contract;
pub mod shell;

pub use contract::PageContract;
pub use shell::{page_contract, render_page};
