mod link_policy;

pub use link_policy::{LinkPolicy, PrefixRewrite, CANONICAL_HOST_PREFIX};
