// Thu Feb 12 2026 - Alex

pub mod fs;
pub mod logging;
