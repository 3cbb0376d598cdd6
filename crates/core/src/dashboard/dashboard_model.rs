use serde::{Deserialize, Serialize};

use crate::activities::Activity;
use crate::assignments::Assignment;
use crate::performance::Performance;
use crate::users::User;

/// Everything the dashboard screen shows for one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub user: User,
    pub pending_assignments: Vec<Assignment>,
    pub recent_activities: Vec<Activity>,
    pub performance: Vec<Performance>,
}
