use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{proficiency::ProficiencyScoreDto, user::UserDto};

/// An instruction relationship between a CFI and a student pilot.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RelationshipDto {
    pub id: i32,
    pub cfi_id: i32,
    pub student_id: i32,
    pub status: String,
    pub start_date: NaiveDateTime,
    pub end_date: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::cfi_student_relationship::Model> for RelationshipDto {
    fn from(relationship: entity::cfi_student_relationship::Model) -> Self {
        Self {
            id: relationship.id,
            cfi_id: relationship.cfi_id,
            student_id: relationship.student_id,
            status: relationship.status,
            start_date: relationship.start_date,
            end_date: relationship.end_date,
            created_at: relationship.created_at,
            updated_at: relationship.updated_at,
        }
    }
}

/// Payload for taking on a new student.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssignStudentRequest {
    pub student_id: i32,
}

/// A student on a CFI's roster, with their current proficiency standing.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StudentWithProficiencyDto {
    pub relationship_id: i32,
    pub started_at: NaiveDateTime,
    pub student: UserDto,
    /// Absent until the scoring engine has produced a summary for the student
    pub proficiency: Option<ProficiencyScoreDto>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct StudentsDto {
    pub students: Vec<StudentWithProficiencyDto>,
}

/// An endorsement a CFI has issued to a pilot.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CfiEndorsementDto {
    pub id: i32,
    pub cfi_id: i32,
    pub pilot_id: i32,
    pub flight_log_id: Option<i32>,
    pub endorsement_type: String,
    pub notes: Option<String>,
    pub endorsed_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl From<entity::cfi_endorsement::Model> for CfiEndorsementDto {
    fn from(endorsement: entity::cfi_endorsement::Model) -> Self {
        Self {
            id: endorsement.id,
            cfi_id: endorsement.cfi_id,
            pilot_id: endorsement.pilot_id,
            flight_log_id: endorsement.flight_log_id,
            endorsement_type: endorsement.endorsement_type,
            notes: endorsement.notes,
            endorsed_at: endorsement.endorsed_at,
            created_at: endorsement.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EndorsementWithPilotDto {
    pub endorsement: CfiEndorsementDto,
    pub pilot: UserDto,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct EndorsementsDto {
    pub endorsements: Vec<EndorsementWithPilotDto>,
}

/// Payload for issuing an endorsement.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IssueEndorsementRequest {
    pub pilot_id: i32,
    /// Open vocabulary, e.g. `solo`, `flight_review`, `proficiency_check`
    pub endorsement_type: String,
    pub flight_log_id: Option<i32>,
    pub notes: Option<String>,
}
