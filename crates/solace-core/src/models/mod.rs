mod document;
mod retrieval_event;
mod retrieval_result;

pub use document::{Document, Metadata};
pub use retrieval_event::RetrievalEvent;
pub use retrieval_result::RetrievalResult;
