//! Typed records in application naming

pub mod booking;
pub mod cabin;
pub mod guest;
pub mod settings;

pub use booking::{BookedCabin, Booking, BookingPatch, BookingSales, BookingStatus};
pub use cabin::{Cabin, CabinDraft, CabinImage, CabinRow};
pub use guest::Guest;
pub use settings::{Settings, SettingsPatch};
