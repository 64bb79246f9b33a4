pub mod builder;
pub mod builtin;
pub mod chain;
pub mod filter;
pub mod pipeline;
pub mod restrict_saving;

pub use builder::build_chain;
pub use builtin::{KeywordSkipFilter, PassthroughFilter};
pub use chain::FilterChain;
pub use filter::{FilterResult, MessageFilter};
pub use pipeline::FilterPipeline;
pub use restrict_saving::{DEFAULT_PHOTO_NAME, RestrictSavingBypassFilter};
