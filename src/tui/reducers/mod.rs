pub mod data_loading;
pub mod navigation;
pub mod pages;
pub mod prompt;
pub mod review;
pub mod selection;

pub use data_loading::reduce_data_loading;
pub use navigation::reduce_navigation;
pub use pages::reduce_pages;
pub use prompt::reduce_prompt;
pub use review::reduce_review;
pub use selection::reduce_selection;
