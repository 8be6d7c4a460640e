//! Domain - ドメインモデル（ids, delivery, status, schedule, roster, profile, workflow, errors, events）

pub mod delivery;
pub mod errors;
pub mod events;
pub mod ids;
pub mod profile;
pub mod roster;
pub mod schedule;
pub mod status;
pub mod workflow;

pub use delivery::{ContainerSize, DeliveryRecord, DeliveryType, NewDelivery};
pub use errors::{DeliveryError, UnknownVariant, ValidationError};
pub use events::DomainEvent;
pub use ids::{DeliveryId, DriverId, ParseIdError};
pub use profile::{DRIVER_PROFILE, DriverProfile};
pub use roster::{DEFAULT_PROVINCE, DRIVER_ROSTER, Driver, PROVINCES, find_driver};
pub use schedule::{ScheduleDate, ScheduleTime};
pub use status::{DeliveryCounts, DeliveryStatus};
pub use workflow::RequiredField;
