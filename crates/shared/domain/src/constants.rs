//! Domain-level constants.
//!
//! Document field names for the player collection. Stored documents use the
//! PascalCase property names, with the identity in `_id`.

// =============================================================================
// Player document fields
// =============================================================================

/// Document identity field
pub const FIELD_ID: &str = "_id";

pub const FIELD_NAME: &str = "Name";
pub const FIELD_POSITION: &str = "Position";
pub const FIELD_ASSISTS: &str = "Assists";
pub const FIELD_YEAR: &str = "Year";
pub const FIELD_BRANCH: &str = "Branch";
pub const FIELD_COLLEGE_ID: &str = "CollegeId";
pub const FIELD_GOALS: &str = "Goals";
pub const FIELD_IMAGELINK: &str = "Imagelink";
pub const FIELD_INSTAGRAM: &str = "Instagram";
pub const FIELD_AGE: &str = "Age";
pub const FIELD_TEAM_ID: &str = "TeamId";

// =============================================================================
// Teams
// =============================================================================

/// Team ids at or below this value never match a team
pub const NO_TEAM: i32 = 0;

/// Check if a team id can reference a team
pub fn is_valid_team_id(team_id: i32) -> bool {
    team_id > NO_TEAM
}
