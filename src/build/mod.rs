pub mod mapping;

pub use mapping::{
    RedirectMapping,
    build_mapping,
    builtin_mapping,
};
