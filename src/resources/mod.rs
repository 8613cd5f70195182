//! Resource model: flat records of resource counters.
//!
//! ## Key Types
//!
//! - `Resource`: the nine resource kinds
//! - `Assets`: what a card contributes to the pool
//! - `Prerequisites`: rock/animal/vegetal minimums of a main card
//! - `Rewards`: per-resource weights plus `all_4_colors` and `flat`
//! - `SummedAssets`: pool totals with the derived `all_4_colors` and `flat`
//!
//! Each record declares exactly the fields it needs. Conversions between
//! them are explicit (`Rewards::resource_weights`, `SummedAssets::from`,
//! `Prerequisites::get`).

pub mod assets;
pub mod prerequisites;
pub mod resource;
pub mod rewards;
pub mod summed;

pub use assets::Assets;
pub use prerequisites::Prerequisites;
pub use resource::Resource;
pub use rewards::Rewards;
pub use summed::SummedAssets;
