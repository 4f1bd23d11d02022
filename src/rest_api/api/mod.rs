mod api_v1;
pub use api_v1::ApiV1;

mod batch;
pub use batch::*;

mod features;
pub use features::*;

mod filters;
pub use filters::*;

mod response_types;
pub use response_types::*;
