//! Data models for AgroSmart entities.
//!
//! - `LoginRequest`, `RegisterRequest`, `AuthResponse`: authentication payloads
//! - `Page`, `PaginationInfo`, `PageRequest`: the paginated list envelope
//! - `Animal`, `Breed`, `Lot`, `Paddock`, `Milking`: farm-scoped resources,
//!   each with a draft type used for create and update bodies

pub mod animal;
pub mod auth;
pub mod breed;
pub mod lot;
pub mod milking;
pub mod page;
pub mod paddock;

pub use animal::{Animal, AnimalDraft, AnimalStatus, Sex};
pub use auth::{AuthResponse, FarmClaim, FarmRequest, LoginRequest, RefreshRequest, RegisterRequest, UserProfile};
pub use breed::{Breed, BreedDraft};
pub use lot::{Lot, LotDraft};
pub use milking::{Milking, MilkingDraft, Shift};
pub use page::{Page, PageRequest, PaginationInfo, DEFAULT_PAGE_SIZE};
pub use paddock::{Paddock, PaddockDraft, PaddockType};
