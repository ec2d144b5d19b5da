pub mod http_submitter;
pub mod traits;

pub use http_submitter::HttpFormSubmitter;
pub use traits::FormSubmitter;
