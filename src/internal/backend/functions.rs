pub mod delete_history_file;
pub mod get_history;
pub mod get_task_status;
pub mod response;
pub mod save_file;
pub mod start_download;
pub mod validate_url;

pub use delete_history_file::delete_history_file;
pub use get_history::get_history;
pub use get_task_status::get_task_status;
pub use response::error_message_from_body;
pub use save_file::{local_file_name, save_file};
pub use start_download::start_download;
pub use validate_url::validate_url;
