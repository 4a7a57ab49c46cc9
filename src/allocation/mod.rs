//! Asset allocation model and its memo cache

mod model;
mod cache;

pub use model::{allocate, allocate_with, AllocationPlan, AssetClass, ClassBreakdown};
pub use cache::{AllocationCache, CacheStats};
