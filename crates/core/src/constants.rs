/// Assignment status given to every new assignment.
pub const ASSIGNMENT_STATUS_PENDING: &str = "pending";

/// Query value meaning "do not filter by status".
pub const ASSIGNMENT_STATUS_ALL: &str = "all";

/// Activity log types
pub const ACTIVITY_ACCOUNT_CREATED: &str = "account_created";
pub const ACTIVITY_LOGIN: &str = "login";
pub const ACTIVITY_ASSIGNMENT_CREATED: &str = "assignment_created";
pub const ACTIVITY_ASSIGNMENT_UPDATED: &str = "assignment_updated";

/// Dashboard list sizes
pub const DASHBOARD_PENDING_ASSIGNMENTS_LIMIT: i64 = 5;
pub const DASHBOARD_RECENT_ACTIVITIES_LIMIT: i64 = 10;
pub const DASHBOARD_PERFORMANCE_LIMIT: i64 = 5;

/// Number of most recent quiz results averaged for the tutor level.
pub const TUTOR_HISTORY_WINDOW: i64 = 5;

/// Level a freshly registered user starts at.
pub const DEFAULT_USER_LEVEL: i32 = 1;
