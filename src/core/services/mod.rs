pub mod allocation_service;
pub mod goal_service;
pub mod summary_service;

pub use allocation_service::{AllocationService, EntryAllocations, GoalAllocation};
pub use goal_service::{ContributionPolicy, GoalService};
pub use summary_service::SummaryService;

pub type ServiceResult<T> = crate::errors::Result<T>;
