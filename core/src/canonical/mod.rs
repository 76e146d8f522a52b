pub mod builder;
pub mod model;
pub mod render;

pub use builder::{build_canonical_profile, build_canonical_profile_with};
pub use model::{
    CanonicalCompanyProfile, ProfileMode, DEFAULT_COMPANY_NAME, PIPELINE_VERSION,
};
pub use render::render_profile_markdown;
